//! Scoring engine
//!
//! Turns a case record into a ranked list of probable root causes, an ordered
//! trigger log explaining every score adjustment, a preliminary verdict and a
//! qualitative risk level. Deterministic: identical inputs always produce
//! identical outcomes.

mod engine;
mod normalize;
mod rules;
mod trigger;
mod verdict;

pub use engine::{score_causes, ScoreOutcome, ScoringEngine, BASELINE_SCORE, TOP_CAUSES};
pub use normalize::{normalize_to_percent, rank_top, RawScore, ScoredCause};
pub use rules::{Condition, Effect, WeightRule, STANDARD_RULES};
pub use trigger::{Trigger, TriggerEffect};
pub use verdict::{assess_risk, base_verdict, Risk, Verdict};
