//! Trigger log entries
//!
//! One entry per effect of every rule that fired, in firing order.

use std::fmt;

use serde::Serialize;

use super::rules::Effect;
use crate::library::{CauseId, CauseLibrary};

/// Signed effect recorded in a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TriggerEffect {
    /// Additive weight
    Add(f64),
    /// Multiplicative factor
    Scale(f64),
}

impl fmt::Display for TriggerEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerEffect::Add(weight) => write!(f, "{:+}", weight),
            TriggerEffect::Scale(factor) => write!(f, "×{}", factor),
        }
    }
}

/// A single explained score adjustment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trigger {
    /// Rule that fired
    pub rule_id: &'static str,
    /// Cause affected
    pub cause: CauseId,
    /// Signed weight or factor
    pub effect: TriggerEffect,
    /// Short reason
    pub reason: &'static str,
}

impl Trigger {
    pub(crate) fn from_effect(rule_id: &'static str, effect: &Effect) -> Self {
        match *effect {
            Effect::Add {
                cause,
                weight,
                reason,
            } => Self {
                rule_id,
                cause,
                effect: TriggerEffect::Add(weight),
                reason,
            },
            Effect::Scale {
                cause,
                factor,
                reason,
            } => Self {
                rule_id,
                cause,
                effect: TriggerEffect::Scale(factor),
                reason,
            },
        }
    }
}

impl fmt::Display for Trigger {
    /// `Title: +25 (reason)` or `Title: ×0.55 (reason)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            CauseLibrary::get(self.cause).title,
            self.effect,
            self.reason
        )
    }
}
