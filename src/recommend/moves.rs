//! First moves: the short list of immediate actions

use crate::case::{CaseInput, Evidence};
use crate::library::CauseId;
use crate::scoring::ScoredCause;

/// Upper bound on the action list.
pub const MAX_FIRST_MOVES: usize = 4;

const CONTAIN_HARD: &str =
    "STOP/HOLD WIP in suspect time window; block downstream steps that amplify bridging/short risk.";
const CONTAIN_SOFT: &str =
    "HOLD suspect time window; add edge-inclusive AOI + extra sampling until gate passes.";
const AOI_REINSPECT: &str =
    "Run AOI with edge-inclusive recipe + capture signature (edge vs center, dense vs sparse).";
const SEM_EDS_FIRST: &str =
    "Do SEM + EDS on worst sites: dense + sparse + edge band; classify metal vs organic vs salt/oxide.";
const SEM_EDS_CONFIRM: &str =
    "Confirm mechanism: repeat SEM/EDS on 1–2 wafers across regions (not one-off).";

/// Cause-specific fourth move, keyed on the top-ranked cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourthMove {
    RinseDrySplit,
    FilterPartsInspection,
    PrStripSplit,
    BathHealthCorrelation,
    RinseAgitationSplit,
    BpTransferCheck,
    /// No cause-specific move: isolate boundary vs contamination.
    Fallback,
}

impl FourthMove {
    /// Select the move for the top-ranked cause.
    pub fn for_top_cause(top: Option<CauseId>) -> Self {
        match top {
            Some(CauseId::RinseDryBoundary) => FourthMove::RinseDrySplit,
            Some(CauseId::ParticleShedding) | Some(CauseId::EpAnodeFilterParticles) => {
                FourthMove::FilterPartsInspection
            }
            Some(CauseId::PrStripScum) => FourthMove::PrStripSplit,
            Some(CauseId::EpBathAgingAdditives) => FourthMove::BathHealthCorrelation,
            Some(CauseId::EpMicroloadingTransport) | Some(CauseId::RedepositionTrappedChem) => {
                FourthMove::RinseAgitationSplit
            }
            Some(CauseId::BpTransferNozzle) | Some(CauseId::BpHandlerContact) => {
                FourthMove::BpTransferCheck
            }
            Some(CauseId::WettingOrganicContam) | None => FourthMove::Fallback,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FourthMove::RinseDrySplit => {
                "Monitor split: normal vs +2× DI rinse + dry tweak (spin/N2 knife/time); compare edge/ring response."
            }
            FourthMove::FilterPartsInspection => {
                "Check filters/DP + inspect parts; after cleanup run 2 clean monitors."
            }
            FourthMove::PrStripSplit => {
                "Material/strip split: PR batch + boosted strip/descum; re-inspect before restart."
            }
            FourthMove::BathHealthCorrelation => {
                "Pull EP bath health + DP; correlate to drift; refresh bath/additives then verify monitors."
            }
            FourthMove::RinseAgitationSplit => {
                "Split: standard vs enhanced rinse/clean (and/or agitation/flow within spec); compare dense vs sparse."
            }
            FourthMove::BpTransferCheck => {
                "BP check: run dummy/monitor; inspect transfer signature; clean/replace contact surfaces."
            }
            FourthMove::Fallback => {
                "Run monitor split: normal vs extended rinse/dry; isolate boundary vs contamination."
            }
        }
    }
}

/// Immediate actions for the next shift, at most [`MAX_FIRST_MOVES`].
///
/// 1. Containment: hard stop when bridging risk or metal is confirmed
/// 2. Edge-inclusive AOI re-inspection
/// 3. SEM/EDS: classify if not done, otherwise confirm across wafers
/// 4. Cause-specific move for the top-ranked cause
pub fn first_moves(input: &CaseInput, ranked: &[ScoredCause]) -> Vec<String> {
    let mut moves = Vec::with_capacity(MAX_FIRST_MOVES);

    if input.bridging_risk || input.evidence == Evidence::MetalConfirmed {
        moves.push(CONTAIN_HARD.to_string());
    } else {
        moves.push(CONTAIN_SOFT.to_string());
    }

    moves.push(AOI_REINSPECT.to_string());

    if input.evidence == Evidence::NotDone {
        moves.push(SEM_EDS_FIRST.to_string());
    } else {
        moves.push(SEM_EDS_CONFIRM.to_string());
    }

    let top = ranked.first().map(|s| s.cause);
    moves.push(FourthMove::for_top_cause(top).message().to_string());

    moves.truncate(MAX_FIRST_MOVES);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(cause: CauseId) -> Vec<ScoredCause> {
        vec![ScoredCause {
            cause,
            share: 100.0,
        }]
    }

    #[test]
    fn test_hard_containment_on_metal() {
        let input = CaseInput {
            evidence: Evidence::MetalConfirmed,
            bridging_risk: false,
            ..CaseInput::default()
        };
        let moves = first_moves(&input, &top(CauseId::RinseDryBoundary));
        assert!(moves[0].starts_with("STOP/HOLD"));
        assert!(moves[2].starts_with("Confirm mechanism"));
    }

    #[test]
    fn test_soft_containment() {
        let input = CaseInput {
            evidence: Evidence::NotDone,
            bridging_risk: false,
            ..CaseInput::default()
        };
        let moves = first_moves(&input, &top(CauseId::RinseDryBoundary));
        assert!(moves[0].starts_with("HOLD suspect"));
        assert!(moves[2].starts_with("Do SEM + EDS"));
        assert_eq!(moves[3], FourthMove::RinseDrySplit.message());
    }

    #[test]
    fn test_fourth_move_lookup() {
        let cases = [
            (CauseId::RinseDryBoundary, FourthMove::RinseDrySplit),
            (CauseId::WettingOrganicContam, FourthMove::Fallback),
            (CauseId::ParticleShedding, FourthMove::FilterPartsInspection),
            (CauseId::RedepositionTrappedChem, FourthMove::RinseAgitationSplit),
            (CauseId::PrStripScum, FourthMove::PrStripSplit),
            (CauseId::BpTransferNozzle, FourthMove::BpTransferCheck),
            (CauseId::BpHandlerContact, FourthMove::BpTransferCheck),
            (CauseId::EpBathAgingAdditives, FourthMove::BathHealthCorrelation),
            (CauseId::EpAnodeFilterParticles, FourthMove::FilterPartsInspection),
            (CauseId::EpMicroloadingTransport, FourthMove::RinseAgitationSplit),
        ];
        for (cause, expected) in cases {
            assert_eq!(FourthMove::for_top_cause(Some(cause)), expected, "{}", cause);
        }
        assert_eq!(FourthMove::for_top_cause(None), FourthMove::Fallback);
    }

    #[test]
    fn test_never_more_than_four() {
        let moves = first_moves(&CaseInput::default(), &[]);
        assert_eq!(moves.len(), MAX_FIRST_MOVES);
        assert_eq!(moves[3], FourthMove::Fallback.message());
    }
}
