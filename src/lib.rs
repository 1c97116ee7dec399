//! bumplogic - a deterministic, explainable root-cause and containment engine
//! for metal residue excursions on bump lines
//!
//! Given one structured case record, the engine ranks the ten candidate root
//! causes, logs every score adjustment, proposes first moves and confirmation
//! tests, and resolves a STOP/HOLD/RELEASE verdict against a release-gate
//! checklist. The engine is pure; sessions and the CLI own state and logging.

pub mod case;
pub mod cli;
pub mod config;
pub mod explain;
pub mod gate;
pub mod library;
pub mod observability;
pub mod pipeline;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod session;

pub use case::{CaseError, CaseInput};
pub use gate::{GateKey, GateState};
pub use pipeline::{assess, Assessment};
pub use scoring::{Risk, Verdict};
pub use session::WarRoomSession;
