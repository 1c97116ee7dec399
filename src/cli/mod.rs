//! Command-line interface
//!
//! - assess: score a case, resolve its verdict, print the War Room report
//! - gates: required gate items and their resolution
//! - explain: structured rule-by-rule explanation
//! - library: the cause catalog
//! - template: starting records for a case and a checklist

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, TemplateKind};
pub use commands::{
    assess, explain_command, gates_command, library, run, run_command, template, Output,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_json, write_error, write_response};
