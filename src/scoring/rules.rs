//! Weighted rule table
//!
//! Each rule pairs a predicate over the case record with an ordered list of
//! effects on cause scores. Rules are evaluated independently and in table
//! order; they are not mutually exclusive. Additive weights and down-weighting
//! factors are exact constants.

use crate::case::{
    AcrossLot, CaseInput, ChangeFlag, Domain, Evidence, LocationSignature, Morphology,
    ProcessStep, TimeBehavior, ToolCorrelation,
};
use crate::library::CauseId;

/// Predicate over a case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ProcessStepIs(ProcessStep),
    LocationIs(LocationSignature),
    MorphologyIs(Morphology),
    DenseBias,
    ToolCorrelationIs(ToolCorrelation),
    /// Both the time behavior and the change flag must hold.
    TimeBehaviorAfterChange(TimeBehavior, ChangeFlag),
    AcrossLotIs(AcrossLot),
    ChangeFlagSet(ChangeFlag),
    EvidenceIs(Evidence),
}

impl Condition {
    /// Evaluate against a case record.
    pub fn holds(&self, input: &CaseInput) -> bool {
        match *self {
            Condition::ProcessStepIs(step) => input.process_step == step,
            Condition::LocationIs(location) => input.location == location,
            Condition::MorphologyIs(morphology) => input.morphology == morphology,
            Condition::DenseBias => input.dense_bias,
            Condition::ToolCorrelationIs(corr) => input.tool_correlation == corr,
            Condition::TimeBehaviorAfterChange(behavior, flag) => {
                input.time_behavior == behavior && input.changed(flag)
            }
            Condition::AcrossLotIs(spread) => input.across_lot == spread,
            Condition::ChangeFlagSet(flag) => input.changed(flag),
            Condition::EvidenceIs(evidence) => input.evidence == evidence,
        }
    }

    /// Predicate in wire terms, e.g. `processStep = BP_MODULE`.
    pub fn describe(&self) -> String {
        match self {
            Condition::ProcessStepIs(step) => format!("processStep = {}", step),
            Condition::LocationIs(location) => format!("location = {}", location),
            Condition::MorphologyIs(morphology) => format!("morphology = {}", morphology),
            Condition::DenseBias => "denseBias = true".to_string(),
            Condition::ToolCorrelationIs(corr) => format!("toolCorr = {}", corr),
            Condition::TimeBehaviorAfterChange(behavior, flag) => {
                format!("timeBehavior = {} and changes.{} = true", behavior, flag)
            }
            Condition::AcrossLotIs(spread) => format!("acrossLot = {}", spread),
            Condition::ChangeFlagSet(flag) => format!("changes.{} = true", flag),
            Condition::EvidenceIs(evidence) => format!("evidence = {}", evidence),
        }
    }

    /// The observed field values this predicate reads.
    pub fn observed(&self, input: &CaseInput) -> Vec<(String, String)> {
        match self {
            Condition::ProcessStepIs(_) => {
                vec![("processStep".into(), input.process_step.as_str().into())]
            }
            Condition::LocationIs(_) => vec![("location".into(), input.location.as_str().into())],
            Condition::MorphologyIs(_) => {
                vec![("morphology".into(), input.morphology.as_str().into())]
            }
            Condition::DenseBias => vec![("denseBias".into(), input.dense_bias.to_string())],
            Condition::ToolCorrelationIs(_) => {
                vec![("toolCorr".into(), input.tool_correlation.as_str().into())]
            }
            Condition::TimeBehaviorAfterChange(_, flag) => vec![
                ("timeBehavior".into(), input.time_behavior.as_str().into()),
                (format!("changes.{}", flag), input.changed(*flag).to_string()),
            ],
            Condition::AcrossLotIs(_) => {
                vec![("acrossLot".into(), input.across_lot.as_str().into())]
            }
            Condition::ChangeFlagSet(flag) => {
                vec![(format!("changes.{}", flag), input.changed(*flag).to_string())]
            }
            Condition::EvidenceIs(_) => vec![("evidence".into(), input.evidence.as_str().into())],
        }
    }
}

/// Effect of a fired rule on one cause's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Add a fixed weight.
    Add {
        cause: CauseId,
        weight: f64,
        reason: &'static str,
    },
    /// Multiply the current score (down-weighting).
    Scale {
        cause: CauseId,
        factor: f64,
        reason: &'static str,
    },
}

impl Effect {
    pub fn cause(&self) -> CauseId {
        match self {
            Effect::Add { cause, .. } | Effect::Scale { cause, .. } => *cause,
        }
    }

    /// Apply to a raw score.
    pub fn apply(&self, score: f64) -> f64 {
        match self {
            Effect::Add { weight, .. } => score + weight,
            Effect::Scale { factor, .. } => score * factor,
        }
    }
}

/// One conditional adjustment of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct WeightRule {
    /// Stable rule identifier (e.g. "W-01").
    pub id: &'static str,
    pub condition: Condition,
    /// Applied in order when the condition holds.
    pub effects: &'static [Effect],
}

const fn add(cause: CauseId, weight: f64, reason: &'static str) -> Effect {
    Effect::Add {
        cause,
        weight,
        reason,
    }
}

const fn scale(cause: CauseId, factor: f64, reason: &'static str) -> Effect {
    Effect::Scale {
        cause,
        factor,
        reason,
    }
}

use CauseId::*;

/// The standard rule table, in evaluation order.
pub static STANDARD_RULES: [WeightRule; 13] = [
    WeightRule {
        id: "W-01",
        condition: Condition::ProcessStepIs(ProcessStep::BpModule),
        effects: &[
            add(BpTransferNozzle, 25.0, "Process step=BP module"),
            add(BpHandlerContact, 15.0, "BP module handling/contact"),
            scale(EpBathAgingAdditives, 0.55, "EP cause found at BP module"),
            scale(EpAnodeFilterParticles, 0.65, "EP cause found at BP module"),
            scale(EpMicroloadingTransport, 0.65, "EP cause found at BP module"),
        ],
    },
    WeightRule {
        id: "W-02",
        condition: Condition::LocationIs(LocationSignature::EdgeBand),
        effects: &[
            add(RinseDryBoundary, 28.0, "Location=edge band"),
            add(WettingOrganicContam, 14.0, "Edge sensitive to wetting/dry boundary"),
        ],
    },
    WeightRule {
        id: "W-03",
        condition: Condition::MorphologyIs(Morphology::RandomIslands),
        effects: &[
            add(ParticleShedding, 22.0, "Morphology=random islands"),
            add(EpAnodeFilterParticles, 10.0, "Islands can be EP particles"),
            add(BpTransferNozzle, 10.0, "Islands can be BP transfer"),
        ],
    },
    WeightRule {
        id: "W-04",
        condition: Condition::DenseBias,
        effects: &[
            add(EpMicroloadingTransport, 24.0, "Dense pattern bias"),
            add(RedepositionTrappedChem, 18.0, "Dense areas trap chemistry"),
            add(PrStripScum, 12.0, "Dense bias can be scum/strip issue"),
        ],
    },
    WeightRule {
        id: "W-05",
        condition: Condition::ToolCorrelationIs(ToolCorrelation::Single),
        effects: &[
            add(ParticleShedding, 16.0, "Single-tool correlation"),
            add(BpTransferNozzle, 10.0, "Single module correlation (BP)"),
            add(EpAnodeFilterParticles, 10.0, "Single module correlation (EP)"),
        ],
    },
    WeightRule {
        id: "W-06",
        condition: Condition::TimeBehaviorAfterChange(
            TimeBehavior::StepChange,
            ChangeFlag::PostPmOrParts,
        ),
        effects: &[
            add(ParticleShedding, 18.0, "Step-change after PM/parts"),
            add(RinseDryBoundary, 12.0, "PM can affect coverage/uniformity"),
            add(WettingOrganicContam, 10.0, "PM can introduce organics"),
        ],
    },
    WeightRule {
        id: "W-07",
        condition: Condition::AcrossLotIs(AcrossLot::MultiLot),
        effects: &[
            add(EpBathAgingAdditives, 10.0, "Multiple lots implies systemic"),
            add(RinseDryBoundary, 6.0, "Coverage issues repeat across lots"),
        ],
    },
    WeightRule {
        id: "W-08",
        condition: Condition::ChangeFlagSet(ChangeFlag::NewPrBatch),
        effects: &[add(PrStripScum, 26.0, "New PR batch")],
    },
    WeightRule {
        id: "W-09",
        condition: Condition::ChangeFlagSet(ChangeFlag::FilterDpHighOrChange),
        effects: &[
            add(ParticleShedding, 18.0, "Filter DP high/change"),
            add(EpAnodeFilterParticles, 12.0, "EP loop filtration events"),
        ],
    },
    WeightRule {
        id: "W-10",
        condition: Condition::ChangeFlagSet(ChangeFlag::HandlingChange),
        effects: &[
            add(BpHandlerContact, 18.0, "Handling change"),
            add(WettingOrganicContam, 10.0, "Handling can add organics"),
        ],
    },
    WeightRule {
        id: "W-11",
        condition: Condition::EvidenceIs(Evidence::Organic),
        effects: &[
            add(WettingOrganicContam, 35.0, "EDS=organic"),
            add(PrStripScum, 26.0, "EDS=organic/scum likely"),
            scale(EpBathAgingAdditives, 0.35, "Metal-heavy EP cause, EDS=organic"),
            scale(EpAnodeFilterParticles, 0.45, "Metal-heavy EP cause, EDS=organic"),
            scale(EpMicroloadingTransport, 0.55, "Metal-heavy EP cause, EDS=organic"),
        ],
    },
    WeightRule {
        id: "W-12",
        condition: Condition::EvidenceIs(Evidence::SaltOxide),
        effects: &[
            add(RinseDryBoundary, 16.0, "EDS=salt/oxide often rinse/dry residue"),
            add(RedepositionTrappedChem, 12.0, "Oxide/salt can be trapped chemistry"),
            scale(BpTransferNozzle, 0.7, "BP transfer less likely, EDS=salt/oxide"),
        ],
    },
    WeightRule {
        id: "W-13",
        condition: Condition::EvidenceIs(Evidence::MetalConfirmed),
        effects: &[
            add(EpAnodeFilterParticles, 18.0, "EDS=metal; particles possible"),
            add(RedepositionTrappedChem, 16.0, "EDS=metal; redeposition possible"),
            add(BpTransferNozzle, 12.0, "EDS=metal; transfer contamination possible"),
        ],
    },
];
