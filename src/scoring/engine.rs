//! Scoring engine
//!
//! Algorithm:
//! 1. Every cause starts at the baseline score
//! 2. Rules are evaluated in table order; each fired rule applies its
//!    effects (add a weight or scale the current score) and logs a trigger
//!    per effect
//! 3. Every score is multiplied by its cause's package multiplier
//! 4. Scores are normalized to a percentage distribution
//! 5. The top causes are ranked, descending, ties in library order
//! 6. Base verdict and risk are derived from the case record
//!
//! The engine is a pure function of its input: no I/O, no hidden state.

use serde::Serialize;

use super::normalize::{normalize_to_percent, rank_top, RawScore, ScoredCause};
use super::rules::{WeightRule, STANDARD_RULES};
use super::trigger::Trigger;
use super::verdict::{assess_risk, base_verdict, Risk, Verdict};
use crate::case::CaseInput;
use crate::library::{CauseId, CauseLibrary};

/// Starting score of every cause.
pub const BASELINE_SCORE: f64 = 10.0;

/// Number of causes in the ranked result.
pub const TOP_CAUSES: usize = 3;

/// Result of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    /// Top causes, descending, shares summing to 100
    pub ranked: Vec<ScoredCause>,
    /// Share of every cause in library order, summing to 100
    pub distribution: Vec<ScoredCause>,
    /// Scores after rules and package multipliers, library order
    pub raw_scores: Vec<RawScore>,
    /// Explained adjustments, in firing order
    pub triggers: Vec<Trigger>,
    /// Identifiers of the rules that fired, in order
    pub fired_rules: Vec<&'static str>,
    pub base_verdict: Verdict,
    pub risk: Risk,
}

impl ScoreOutcome {
    /// Highest-ranked cause.
    pub fn top_cause(&self) -> Option<CauseId> {
        self.ranked.first().map(|s| s.cause)
    }
}

/// Rule-weighting engine over the cause library.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    rules: &'static [WeightRule],
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    /// Engine over the standard rule table.
    pub fn new() -> Self {
        Self {
            rules: &STANDARD_RULES,
        }
    }

    /// Engine over a caller-supplied rule table.
    pub fn with_rules(rules: &'static [WeightRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [WeightRule] {
        self.rules
    }

    /// Score every cause for the given case.
    pub fn score(&self, input: &CaseInput) -> ScoreOutcome {
        let mut scores = [BASELINE_SCORE; CauseId::COUNT];
        let mut triggers = Vec::new();
        let mut fired_rules = Vec::new();

        for rule in self.rules {
            if !rule.condition.holds(input) {
                continue;
            }
            fired_rules.push(rule.id);
            for effect in rule.effects {
                let slot = &mut scores[effect.cause().index()];
                *slot = effect.apply(*slot);
                triggers.push(Trigger::from_effect(rule.id, effect));
            }
        }

        // Package bias strictly after every rule.
        let raw_scores: Vec<RawScore> = CauseLibrary::iter()
            .map(|desc| RawScore {
                cause: desc.id,
                score: scores[desc.id.index()] * desc.multiplier(input.package),
            })
            .collect();

        let distribution = normalize_to_percent(&raw_scores);
        let ranked = rank_top(&distribution, TOP_CAUSES);

        let base = base_verdict(input);
        let risk = assess_risk(input, base);

        ScoreOutcome {
            ranked,
            distribution,
            raw_scores,
            triggers,
            fired_rules,
            base_verdict: base,
            risk,
        }
    }
}

/// Score a case with the standard rule table.
pub fn score_causes(input: &CaseInput) -> ScoreOutcome {
    ScoringEngine::new().score(input)
}
