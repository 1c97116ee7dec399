//! Observable events
//!
//! Every line the logger writes names one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    SessionOpened,
    SessionCleared,

    // Configuration
    ConfigLoaded,

    // Case records
    CaseAccepted,
    CaseRejected,
    /// Gate checklist record rejected
    GateRejected,

    // Engine runs
    AssessmentComplete,
    VerdictResolved,
    GateToggled,

    // Output
    ReportRendered,
    ExplainComplete,

    /// Command failed, process exits non-zero
    CommandFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionOpened => "SESSION_OPENED",
            Event::SessionCleared => "SESSION_CLEARED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CaseAccepted => "CASE_ACCEPTED",
            Event::CaseRejected => "CASE_REJECTED",
            Event::GateRejected => "GATE_REJECTED",
            Event::AssessmentComplete => "ASSESSMENT_COMPLETE",
            Event::VerdictResolved => "VERDICT_RESOLVED",
            Event::GateToggled => "GATE_TOGGLED",
            Event::ReportRendered => "REPORT_RENDERED",
            Event::ExplainComplete => "EXPLAIN_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Severity this event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::CaseRejected | Event::GateRejected => Severity::Warn,
            Event::CommandFailed => Severity::Error,
            Event::GateToggled => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
