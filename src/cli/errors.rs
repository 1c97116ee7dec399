//! CLI error types
//!
//! Every CLI error ends the process with a non-zero status.

use std::fmt;
use std::io;

use crate::case::CaseError;
use crate::config::ConfigError;
use crate::gate::GateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (file, stdin, stdout)
    IoError,
    /// Case record rejected
    InvalidCase,
    /// Gate checklist rejected
    InvalidGates,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BUMP_CLI_CONFIG_ERROR",
            Self::IoError => "BUMP_CLI_IO_ERROR",
            Self::InvalidCase => "BUMP_CLI_INVALID_CASE",
            Self::InvalidGates => "BUMP_CLI_INVALID_GATES",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(format!("{} ({})", e, e.code()))
    }
}

impl From<CaseError> for CliError {
    fn from(e: CaseError) -> Self {
        Self::new(CliErrorCode::InvalidCase, format!("{} ({})", e, e.code()))
    }
}

impl From<GateError> for CliError {
    fn from(e: GateError) -> Self {
        Self::new(CliErrorCode::InvalidGates, format!("{} ({})", e, e.code()))
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_carries_code() {
        let err = CliError::io_error("Empty input");
        assert_eq!(err.to_string(), "BUMP_CLI_IO_ERROR: Empty input");
    }

    #[test]
    fn test_case_error_conversion() {
        let case_err = crate::case::CaseInput::from_json(&json!([])).unwrap_err();
        let err = CliError::from(case_err);
        assert_eq!(err.code(), CliErrorCode::InvalidCase);
        assert!(err.message().contains("BUMP_CASE_NOT_AN_OBJECT"));
    }

    #[test]
    fn test_gate_error_conversion() {
        let gate_err = crate::gate::GateState::from_json(&json!({})).unwrap_err();
        let err = CliError::from(gate_err);
        assert_eq!(err.code_str(), "BUMP_CLI_INVALID_GATES");
    }
}
