//! Verdict and Gate Invariant Tests
//!
//! Swept over a broad product of the case domains:
//! - Bridging risk always yields a STOP base verdict
//! - Baseline gate items are always required; SEM/EDS and bridging items
//!   exactly when their conditions hold
//! - RELEASE iff every required item is complete, otherwise the base verdict
//! - Top-3 shares sum to 100

use bumplogic::case::{
    AcrossLot, CaseInput, ChangeFlag, ChangeFlags, ChemAge, DefectSeverity, Domain, Evidence,
    LocationSignature, Morphology, PackageType, ProcessStep, TimeBehavior, ToolCorrelation,
};
use bumplogic::gate::{final_verdict, required_gates, GateKey, GateState};
use bumplogic::scoring::{score_causes, Verdict};
use bumplogic::assess;

// =============================================================================
// Helper Functions
// =============================================================================

fn pick<T: Domain>(i: usize) -> T {
    let all = T::all();
    all[i % all.len()]
}

fn changes_from_mask(mask: usize) -> ChangeFlags {
    let mut changes = ChangeFlags::none();
    for (bit, flag) in ChangeFlag::all().iter().enumerate() {
        changes.set(*flag, mask & (1 << bit) != 0);
    }
    changes
}

/// Full product of the fields that drive verdicts and gates, with the
/// remaining fields cycled by index.
fn sweep() -> Vec<CaseInput> {
    let mut cases = Vec::new();
    let mut i = 0usize;
    for package in PackageType::all() {
        for step in ProcessStep::all() {
            for location in LocationSignature::all() {
                for morphology in Morphology::all() {
                    for evidence in Evidence::all() {
                        for severity in DefectSeverity::all() {
                            for bridging in [false, true] {
                                cases.push(CaseInput {
                                    package: *package,
                                    process_step: *step,
                                    location: *location,
                                    morphology: *morphology,
                                    dense_bias: i % 2 == 0,
                                    severity: *severity,
                                    tool_correlation: pick::<ToolCorrelation>(i),
                                    time_behavior: pick::<TimeBehavior>(i / 3),
                                    across_lot: pick::<AcrossLot>(i / 7),
                                    changes: changes_from_mask(i % 64),
                                    chem_age: pick::<ChemAge>(i / 5),
                                    evidence: *evidence,
                                    bridging_risk: bridging,
                                });
                                i += 1;
                            }
                        }
                    }
                }
            }
        }
    }
    cases
}

fn gate_from_mask(mask: usize) -> GateState {
    let mut gate = GateState::cleared();
    for (bit, key) in GateKey::ALL.iter().enumerate() {
        gate.set(*key, mask & (1 << bit) != 0);
    }
    gate
}

// =============================================================================
// Base Verdict Tests
// =============================================================================

#[test]
fn test_bridging_risk_forces_stop() {
    for input in sweep().into_iter().filter(|c| c.bridging_risk) {
        assert_eq!(score_causes(&input).base_verdict, Verdict::Stop, "{:?}", input);
    }
}

#[test]
fn test_base_verdict_never_release() {
    for input in sweep() {
        assert_ne!(score_causes(&input).base_verdict, Verdict::Release);
    }
}

// =============================================================================
// Required Gate Tests
// =============================================================================

#[test]
fn test_required_gate_membership() {
    for input in sweep() {
        let required = required_gates(&input);
        assert!(required.contains(GateKey::AoiMonitorsPass));
        assert!(required.contains(GateKey::CorrectiveActionDone));
        assert!(required.contains(GateKey::PostFixMonitorsPass));
        assert_eq!(
            required.contains(GateKey::SemEdsDone),
            input.evidence == Evidence::NotDone
        );
        assert_eq!(
            required.contains(GateKey::BridgingRiskCleared),
            input.bridging_risk || input.evidence == Evidence::MetalConfirmed
        );
    }
}

// =============================================================================
// Final Verdict Tests
// =============================================================================

/// Every one of the 32 checklist states, against every swept case.
#[test]
fn test_release_iff_required_complete() {
    for input in sweep().into_iter().step_by(7) {
        let base = score_causes(&input).base_verdict;
        let required = required_gates(&input);
        for mask in 0..32 {
            let gate = gate_from_mask(mask);
            let complete = required.iter().all(|k| gate.is_done(k));
            let verdict = final_verdict(base, &gate, &required);
            if complete {
                assert_eq!(verdict, Verdict::Release);
            } else {
                assert_eq!(verdict, base);
            }
            // Idempotent
            assert_eq!(final_verdict(base, &gate, &required), verdict);
        }
    }
}

#[test]
fn test_gate_state_only_moves_final_verdict() {
    for input in sweep().into_iter().step_by(11) {
        let open = assess(&input, &GateState::cleared());
        let done = assess(&input, &GateState::all_done());
        assert_eq!(open.base_verdict, done.base_verdict);
        assert_eq!(open.risk, done.risk);
        assert_eq!(open.ranked, done.ranked);
        assert_eq!(done.final_verdict, Verdict::Release);
        assert_eq!(open.final_verdict, open.base_verdict);
    }
}

// =============================================================================
// Share Tests
// =============================================================================

#[test]
fn test_top_three_sum_to_hundred() {
    for input in sweep() {
        let outcome = score_causes(&input);
        assert_eq!(outcome.ranked.len(), 3);

        let ranked: f64 = outcome.ranked.iter().map(|s| s.share).sum();
        assert!((ranked - 100.0).abs() < 1e-6, "ranked sum {}", ranked);

        let all: f64 = outcome.distribution.iter().map(|s| s.share).sum();
        assert!((all - 100.0).abs() < 1e-6, "distribution sum {}", all);

        for pair in outcome.ranked.windows(2) {
            assert!(pair[0].share >= pair[1].share);
        }
    }
}
