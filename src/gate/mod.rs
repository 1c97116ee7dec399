//! Release gate
//!
//! The checklist that stands between a containment verdict and RELEASE.
//! The host owns the checklist state; this module only reads it, decides which
//! items a case requires, and resolves the final verdict.

mod errors;
mod keys;
mod machine;

pub use errors::{GateError, GateResult};
pub use keys::{GateKey, GateState};
pub use machine::{final_verdict, required_gates, GateEvaluation, RequiredGates};
