//! CLI argument definitions using clap
//!
//! Commands:
//! - bumplogic assess [CASE] [--gates <path>] [--format text|json] [--why]
//! - bumplogic gates [CASE] [--gates <path>]
//! - bumplogic explain [CASE] [--gates <path>] [--gate-only]
//! - bumplogic library
//! - bumplogic template case|gates
//!
//! CASE is a path to a JSON case record, or `-` for stdin.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// BumpLogic War Room - root-cause ranking and release gating for metal residue excursions
#[derive(Parser, Debug)]
#[command(name = "bumplogic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a case and resolve its verdict
    Assess {
        /// Case record (JSON file, or - for stdin)
        #[arg(default_value = "-")]
        case: PathBuf,

        /// Gate checklist (JSON file); all items pending when omitted
        #[arg(long)]
        gates: Option<PathBuf>,

        /// Append the trigger trace
        #[arg(long)]
        why: bool,

        /// Trigger lines in the trace (overrides config)
        #[arg(long)]
        why_limit: Option<usize>,
    },

    /// List the gate items required before release
    Gates {
        #[arg(default_value = "-")]
        case: PathBuf,

        /// Gate checklist (JSON file) to resolve against
        #[arg(long)]
        gates: Option<PathBuf>,
    },

    /// Rule-by-rule explanation of an assessment (always JSON)
    Explain {
        #[arg(default_value = "-")]
        case: PathBuf,

        #[arg(long)]
        gates: Option<PathBuf>,

        /// Only explain the gate resolution
        #[arg(long)]
        gate_only: bool,
    },

    /// Print the cause catalog
    Library,

    /// Print a starting record
    Template {
        #[arg(value_enum)]
        kind: TemplateKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// The default case record
    Case,
    /// A gate checklist with every item pending
    Gates,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
