//! Case records
//!
//! A case is the operator's structured observation of a defect excursion:
//! morphology, location, tool/time correlation, SEM/EDS evidence and recent
//! process changes. Every field is drawn from a closed domain; malformed
//! records are rejected here, at the boundary, before any scoring happens.

mod errors;
mod input;
mod types;
mod validator;

pub use errors::{CaseError, CaseResult, ValidationDetails};
pub use input::CaseInput;
pub use types::{
    AcrossLot, ChangeFlag, ChangeFlags, ChemAge, DefectSeverity, Domain, Evidence,
    LocationSignature, Morphology, PackageType, ProcessStep, TimeBehavior, ToolCorrelation,
};
pub use validator::{CaseValidator, CASE_FIELDS};
