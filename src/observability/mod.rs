//! Observability
//!
//! Structured JSON logging over a closed set of events.
//!
//! # Principles
//!
//! 1. Observability is read-only: it never changes a verdict
//! 2. Only the session and CLI log; engine functions stay pure
//! 3. Synchronous, no background threads
//! 4. Deterministic line layout
//!
//! # Usage
//!
//! ```ignore
//! use bumplogic::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::VerdictResolved, &[("verdict", "HOLD")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields at its default severity.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
