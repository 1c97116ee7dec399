//! Containment verdict and qualitative risk

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::{CaseInput, DefectSeverity, Evidence};

/// Containment verdict.
///
/// The scoring engine only ever produces `Stop` or `Hold`; `Release` is
/// reachable solely through the gate state machine once every required gate
/// item is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Stop WIP and block downstream steps
    Stop,
    /// Hold the suspect window pending investigation
    Hold,
    /// Release: all required gate items satisfied
    Release,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Stop => "STOP",
            Verdict::Hold => "HOLD",
            Verdict::Release => "RELEASE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk level, published alongside the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Risk {
    High,
    Med,
    Low,
}

impl Risk {
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::High => "HIGH",
            Risk::Med => "MED",
            Risk::Low => "LOW",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preliminary verdict before any gate item is considered.
///
/// STOP when bridging risk is raised, or when metal is confirmed on a
/// high-severity excursion. HOLD otherwise.
pub fn base_verdict(input: &CaseInput) -> Verdict {
    let stop_now = input.bridging_risk
        || (input.evidence == Evidence::MetalConfirmed && input.severity == DefectSeverity::High);

    if stop_now {
        Verdict::Stop
    } else {
        Verdict::Hold
    }
}

/// Qualitative risk for a case given its base verdict.
///
/// HIGH unless the case is not a STOP and severity is LOW:
/// - LOW severity without confirmed metal lowers risk to MED
/// - LOW severity with organic evidence and no bridging risk lowers it to LOW
pub fn assess_risk(input: &CaseInput, base: Verdict) -> Risk {
    let mut risk = Risk::High;

    if base != Verdict::Stop {
        let low_severity = input.severity == DefectSeverity::Low;
        if low_severity && input.evidence != Evidence::MetalConfirmed {
            risk = Risk::Med;
        }
        if low_severity && input.evidence == Evidence::Organic && !input.bridging_risk {
            risk = Risk::Low;
        }
    }

    risk
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(severity: DefectSeverity, evidence: Evidence, bridging: bool) -> CaseInput {
        CaseInput {
            severity,
            evidence,
            bridging_risk: bridging,
            ..CaseInput::default()
        }
    }

    #[test]
    fn test_bridging_risk_always_stops() {
        for sev in [DefectSeverity::Low, DefectSeverity::Med, DefectSeverity::High] {
            for ev in [
                Evidence::NotDone,
                Evidence::MetalConfirmed,
                Evidence::Organic,
                Evidence::SaltOxide,
            ] {
                assert_eq!(base_verdict(&case(sev, ev, true)), Verdict::Stop);
            }
        }
    }

    #[test]
    fn test_metal_high_severity_stops() {
        let input = case(DefectSeverity::High, Evidence::MetalConfirmed, false);
        assert_eq!(base_verdict(&input), Verdict::Stop);

        let input = case(DefectSeverity::Med, Evidence::MetalConfirmed, false);
        assert_eq!(base_verdict(&input), Verdict::Hold);
    }

    #[test]
    fn test_risk_levels() {
        let high = case(DefectSeverity::Med, Evidence::Organic, false);
        assert_eq!(assess_risk(&high, base_verdict(&high)), Risk::High);

        let med = case(DefectSeverity::Low, Evidence::SaltOxide, false);
        assert_eq!(assess_risk(&med, base_verdict(&med)), Risk::Med);

        let low = case(DefectSeverity::Low, Evidence::Organic, false);
        assert_eq!(assess_risk(&low, base_verdict(&low)), Risk::Low);

        let metal = case(DefectSeverity::Low, Evidence::MetalConfirmed, false);
        assert_eq!(assess_risk(&metal, base_verdict(&metal)), Risk::High);
    }

    #[test]
    fn test_stop_keeps_risk_high() {
        let input = case(DefectSeverity::Low, Evidence::Organic, true);
        assert_eq!(base_verdict(&input), Verdict::Stop);
        assert_eq!(assess_risk(&input, Verdict::Stop), Risk::High);
    }
}
