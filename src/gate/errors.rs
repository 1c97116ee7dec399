//! Gate checklist error types

use thiserror::Error;

/// Rejection of a malformed gate checklist record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("gate state must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("gate item '{0}' is missing")]
    MissingItem(String),

    #[error("gate item '{0}' is not declared")]
    UnknownItem(String),

    #[error("gate item '{key}' must be a boolean, got {actual}")]
    NotBoolean { key: String, actual: String },
}

impl GateError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GateError::NotAnObject(_) => "BUMP_GATE_NOT_AN_OBJECT",
            GateError::MissingItem(_) => "BUMP_GATE_MISSING_ITEM",
            GateError::UnknownItem(_) => "BUMP_GATE_UNKNOWN_ITEM",
            GateError::NotBoolean { .. } => "BUMP_GATE_NOT_BOOLEAN",
        }
    }
}

/// Result type for gate checklist operations
pub type GateResult<T> = Result<T, GateError>;
