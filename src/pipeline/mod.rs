//! Assessment pipeline
//!
//! Composes the engine stages into one pass over a case and a checklist:
//! scoring, gate resolution, first moves and the confirmation matrix.
//! Pure: the same case and checklist always yield the same assessment.

use serde::Serialize;

use crate::case::CaseInput;
use crate::gate::{GateEvaluation, GateKey, GateState, RequiredGates};
use crate::library::{CauseId, TestCard};
use crate::recommend::{confirmation_matrix, first_moves};
use crate::scoring::{score_causes, Risk, ScoreOutcome, ScoredCause, Trigger, Verdict};

/// Full output of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub ranked: Vec<ScoredCause>,
    pub distribution: Vec<ScoredCause>,
    pub triggers: Vec<Trigger>,
    pub base_verdict: Verdict,
    pub risk: Risk,
    pub required_gates: RequiredGates,
    pub pending_gates: Vec<GateKey>,
    pub final_verdict: Verdict,
    pub first_moves: Vec<String>,
    pub confirmation_matrix: Vec<TestCard>,
}

impl Assessment {
    /// Assemble from a scoring outcome and the current checklist.
    pub fn from_outcome(input: &CaseInput, outcome: ScoreOutcome, gate: &GateState) -> Self {
        let evaluation = GateEvaluation::evaluate(input, outcome.base_verdict, gate);
        let first_moves = first_moves(input, &outcome.ranked);
        let confirmation_matrix = confirmation_matrix(&outcome.ranked);

        Self {
            ranked: outcome.ranked,
            distribution: outcome.distribution,
            triggers: outcome.triggers,
            base_verdict: outcome.base_verdict,
            risk: outcome.risk,
            required_gates: evaluation.required,
            pending_gates: evaluation.pending,
            final_verdict: evaluation.final_verdict,
            first_moves,
            confirmation_matrix,
        }
    }

    pub fn top_cause(&self) -> Option<CauseId> {
        self.ranked.first().map(|s| s.cause)
    }
}

/// Run the whole engine over a case and a checklist.
pub fn assess(input: &CaseInput, gate: &GateState) -> Assessment {
    Assessment::from_outcome(input, score_causes(input), gate)
}
