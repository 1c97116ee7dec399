//! Scoring Determinism Tests
//!
//! Tests for engine invariants:
//! - Identical inputs give identical rankings, trigger logs and verdicts
//! - Serialized output is byte-stable across runs
//! - Triggers follow rule-table order and name their cause and effect
//! - Ties break in library order

use bumplogic::case::{CaseInput, ChangeFlag, ChangeFlags, Evidence, PackageType, ProcessStep};
use bumplogic::explain::explain;
use bumplogic::gate::GateState;
use bumplogic::library::{CauseId, CauseLibrary};
use bumplogic::scoring::{
    normalize_to_percent, rank_top, score_causes, RawScore, TriggerEffect, STANDARD_RULES,
};
use bumplogic::assess;

// =============================================================================
// Helper Functions
// =============================================================================

fn busy_case() -> CaseInput {
    CaseInput {
        package: PackageType::Ep,
        process_step: ProcessStep::PostEpRinseDry,
        dense_bias: true,
        changes: ChangeFlags::none()
            .with(ChangeFlag::NewPrBatch, true)
            .with(ChangeFlag::FilterDpHighOrChange, true)
            .with(ChangeFlag::HandlingChange, true),
        evidence: Evidence::SaltOxide,
        ..CaseInput::default()
    }
}

// =============================================================================
// Repeatability Tests
// =============================================================================

#[test]
fn test_repeated_runs_identical() {
    for input in [CaseInput::default(), busy_case()] {
        let first = score_causes(&input);
        for _ in 0..5 {
            assert_eq!(score_causes(&input), first);
        }
    }
}

#[test]
fn test_serialized_output_byte_stable() {
    let gate = GateState::cleared();
    let a = serde_json::to_string(&assess(&busy_case(), &gate)).unwrap();
    let b = serde_json::to_string(&assess(&busy_case(), &gate)).unwrap();
    assert_eq!(a, b);

    let e1 = serde_json::to_string(&explain(&busy_case(), &gate)).unwrap();
    let e2 = serde_json::to_string(&explain(&busy_case(), &gate)).unwrap();
    assert_eq!(e1, e2);
}

// =============================================================================
// Trigger Log Tests
// =============================================================================

#[test]
fn test_triggers_follow_rule_order() {
    let outcome = score_causes(&busy_case());
    let positions: Vec<usize> = outcome
        .triggers
        .iter()
        .map(|t| STANDARD_RULES.iter().position(|r| r.id == t.rule_id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_trigger_text_names_cause_and_effect() {
    let outcome = score_causes(&busy_case());
    for trigger in &outcome.triggers {
        let line = trigger.to_string();
        assert!(line.starts_with(CauseLibrary::get(trigger.cause).title));
        match trigger.effect {
            TriggerEffect::Add(_) => assert!(line.contains(": +")),
            TriggerEffect::Scale(_) => assert!(line.contains(": ×")),
        }
    }
}

/// SALT_OXIDE down-weights BP transfer; the scale is logged.
#[test]
fn test_salt_oxide_scale_logged() {
    let outcome = score_causes(&busy_case());
    assert!(outcome.triggers.iter().any(|t| {
        t.cause == CauseId::BpTransferNozzle && t.effect == TriggerEffect::Scale(0.7)
    }));
}

#[test]
fn test_quiet_case_has_no_triggers() {
    let input = CaseInput {
        process_step: ProcessStep::FinalInspection,
        location: bumplogic::case::LocationSignature::Center,
        morphology: bumplogic::case::Morphology::Streaks,
        dense_bias: false,
        tool_correlation: bumplogic::case::ToolCorrelation::Unknown,
        time_behavior: bumplogic::case::TimeBehavior::Intermittent,
        across_lot: bumplogic::case::AcrossLot::OneLot,
        changes: ChangeFlags::none(),
        evidence: Evidence::NotDone,
        ..CaseInput::default()
    };
    let outcome = score_causes(&input);
    assert!(outcome.triggers.is_empty());
    assert!(outcome.fired_rules.is_empty());
}

// =============================================================================
// Tie-Breaking Tests
// =============================================================================

#[test]
fn test_ties_break_in_library_order() {
    let scores: Vec<RawScore> = CauseId::ALL
        .iter()
        .map(|c| RawScore {
            cause: *c,
            score: 10.0,
        })
        .collect();
    let distribution = normalize_to_percent(&scores);
    let ranked = rank_top(&distribution, 3);
    let order: Vec<CauseId> = ranked.iter().map(|s| s.cause).collect();
    assert_eq!(order, CauseId::ALL[..3].to_vec());
}

#[test]
fn test_degenerate_scores_share_equally() {
    let scores: Vec<RawScore> = CauseId::ALL
        .iter()
        .map(|c| RawScore {
            cause: *c,
            score: -4.0,
        })
        .collect();
    let distribution = normalize_to_percent(&scores);
    assert_eq!(distribution.len(), 10);
    for share in &distribution {
        assert!((share.share - 10.0).abs() < 1e-12);
    }
}
