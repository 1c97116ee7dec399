//! "Why" panel text

use crate::scoring::Trigger;

/// Trigger lines shown by default.
pub const DEFAULT_WHY_LIMIT: usize = 12;

pub const NO_TRIGGERS: &str = "No triggers logged.";

/// First `limit` triggers, one per line.
pub fn why_text(triggers: &[Trigger], limit: usize) -> String {
    if triggers.is_empty() || limit == 0 {
        return NO_TRIGGERS.to_string();
    }
    triggers
        .iter()
        .take(limit)
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
