//! Case record error types
//!
//! Error codes:
//! - BUMP_CASE_NOT_AN_OBJECT (REJECT)
//! - BUMP_CASE_INVALID_INPUT (REJECT)
//!
//! Both are raised at the record boundary, before any scoring happens.

use std::fmt;

use thiserror::Error;

/// Field-level description of a rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field path (e.g. "changes.NEW_PR_BATCH")
    pub field: String,
    /// Expected type or domain
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn extra_field(field: impl Into<String>) -> Self {
        Self::new(field, "no undeclared fields", "extra field present")
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Rejection of a malformed case record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("case record must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("invalid case input: {0}")]
    InvalidInput(ValidationDetails),
}

impl CaseError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            CaseError::NotAnObject(_) => "BUMP_CASE_NOT_AN_OBJECT",
            CaseError::InvalidInput(_) => "BUMP_CASE_INVALID_INPUT",
        }
    }

    /// Field details, if the rejection concerns a single field.
    pub fn details(&self) -> Option<&ValidationDetails> {
        match self {
            CaseError::InvalidInput(details) => Some(details),
            CaseError::NotAnObject(_) => None,
        }
    }
}

/// Result type for case record operations
pub type CaseResult<T> = Result<T, CaseError>;
