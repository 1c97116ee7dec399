//! Gate state machine
//!
//! Given a case, decides which checklist items are mandatory. Given the
//! checklist, resolves the final verdict:
//! - RELEASE when every required item is complete
//! - the unchanged base verdict otherwise
//!
//! Resolution is deterministic and side-effect free, with no memory of past
//! verdicts: every toggle or case edit is a fresh evaluation.

use serde::Serialize;

use super::keys::{GateKey, GateState};
use crate::case::{CaseInput, Evidence};
use crate::scoring::Verdict;

/// Ordered set of gate items required before release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequiredGates(Vec<GateKey>);

impl RequiredGates {
    pub fn contains(&self, key: GateKey) -> bool {
        self.0.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = GateKey> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[GateKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required items not yet complete, in requirement order.
    pub fn pending(&self, state: &GateState) -> Vec<GateKey> {
        self.iter().filter(|k| !state.is_done(*k)).collect()
    }

    /// Whether every required item is complete.
    pub fn satisfied_by(&self, state: &GateState) -> bool {
        self.iter().all(|k| state.is_done(k))
    }
}

/// Gate items that must be complete before this case can be released.
///
/// Always: AOI monitors pass, corrective action done, post-fix monitors pass.
/// Plus SEM/EDS done while evidence is still outstanding, and bridging risk
/// cleared when bridging risk is raised or metal is confirmed.
pub fn required_gates(input: &CaseInput) -> RequiredGates {
    let mut required = vec![
        GateKey::AoiMonitorsPass,
        GateKey::CorrectiveActionDone,
        GateKey::PostFixMonitorsPass,
    ];

    if input.evidence == Evidence::NotDone {
        required.push(GateKey::SemEdsDone);
    }
    if input.bridging_risk || input.evidence == Evidence::MetalConfirmed {
        required.push(GateKey::BridgingRiskCleared);
    }

    RequiredGates(required)
}

/// Resolve the final verdict from the base verdict and the checklist.
pub fn final_verdict(base: Verdict, state: &GateState, required: &RequiredGates) -> Verdict {
    if required.satisfied_by(state) {
        Verdict::Release
    } else {
        base
    }
}

/// Outcome of one gate resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateEvaluation {
    pub required: RequiredGates,
    /// Required items still open
    pub pending: Vec<GateKey>,
    pub base_verdict: Verdict,
    pub final_verdict: Verdict,
}

impl GateEvaluation {
    /// Evaluate the checklist for a case.
    pub fn evaluate(input: &CaseInput, base: Verdict, state: &GateState) -> Self {
        let required = required_gates(input);
        let pending = required.pending(state);
        let final_verdict = final_verdict(base, state, &required);
        Self {
            required,
            pending,
            base_verdict: base,
            final_verdict,
        }
    }

    pub fn is_released(&self) -> bool {
        self.final_verdict == Verdict::Release
    }

    /// One-line account of the resolution.
    pub fn explain(&self) -> String {
        if self.is_released() {
            format!(
                "RELEASE: all {} required gate items complete (base {})",
                self.required.len(),
                self.base_verdict
            )
        } else {
            let open: Vec<&str> = self.pending.iter().map(|k| k.as_str()).collect();
            format!(
                "{} held: {} of {} required gate items pending ({})",
                self.final_verdict,
                self.pending.len(),
                self.required.len(),
                open.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::DefectSeverity;

    fn case(evidence: Evidence, bridging: bool) -> CaseInput {
        CaseInput {
            evidence,
            bridging_risk: bridging,
            ..CaseInput::default()
        }
    }

    #[test]
    fn test_baseline_items_always_required() {
        for ev in [
            Evidence::NotDone,
            Evidence::MetalConfirmed,
            Evidence::Organic,
            Evidence::SaltOxide,
        ] {
            for bridging in [false, true] {
                let req = required_gates(&case(ev, bridging));
                assert!(req.contains(GateKey::AoiMonitorsPass));
                assert!(req.contains(GateKey::CorrectiveActionDone));
                assert!(req.contains(GateKey::PostFixMonitorsPass));
                assert_eq!(req.contains(GateKey::SemEdsDone), ev == Evidence::NotDone);
                assert_eq!(
                    req.contains(GateKey::BridgingRiskCleared),
                    bridging || ev == Evidence::MetalConfirmed
                );
            }
        }
    }

    #[test]
    fn test_required_order() {
        let req = required_gates(&case(Evidence::NotDone, true));
        assert_eq!(
            req.as_slice(),
            &[
                GateKey::AoiMonitorsPass,
                GateKey::CorrectiveActionDone,
                GateKey::PostFixMonitorsPass,
                GateKey::SemEdsDone,
                GateKey::BridgingRiskCleared,
            ]
        );
    }

    #[test]
    fn test_release_requires_every_required_item() {
        let input = case(Evidence::Organic, false);
        let req = required_gates(&input);
        let mut state = GateState::cleared();

        for key in req.iter() {
            assert_eq!(final_verdict(Verdict::Hold, &state, &req), Verdict::Hold);
            state.set(key, true);
        }
        assert_eq!(final_verdict(Verdict::Hold, &state, &req), Verdict::Release);
    }

    #[test]
    fn test_unrequired_items_do_not_matter() {
        let input = case(Evidence::Organic, false);
        let req = required_gates(&input);
        let state = GateState::cleared()
            .with(GateKey::AoiMonitorsPass, true)
            .with(GateKey::CorrectiveActionDone, true)
            .with(GateKey::PostFixMonitorsPass, true);
        assert!(!state.is_done(GateKey::SemEdsDone));
        assert_eq!(final_verdict(Verdict::Stop, &state, &req), Verdict::Release);
    }

    #[test]
    fn test_evaluation_explain() {
        let input = CaseInput {
            severity: DefectSeverity::High,
            ..case(Evidence::MetalConfirmed, false)
        };
        let eval = GateEvaluation::evaluate(&input, Verdict::Stop, &GateState::cleared());
        assert!(!eval.is_released());
        assert_eq!(eval.pending.len(), 4);
        assert!(eval.explain().starts_with("STOP held: 4 of 4"));

        let released = GateEvaluation::evaluate(&input, Verdict::Stop, &GateState::all_done());
        assert!(released.is_released());
        assert!(released.explain().starts_with("RELEASE"));
    }
}
