//! The case record: one structured observation of a defect excursion

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::CaseResult;
use super::types::{
    AcrossLot, ChangeFlag, ChangeFlags, ChemAge, DefectSeverity, Evidence, LocationSignature,
    Morphology, PackageType, ProcessStep, TimeBehavior, ToolCorrelation,
};
use super::validator::CaseValidator;

/// Observation record, immutable for the duration of a scoring run.
///
/// Wire field names follow the War Room form (`pkg`, `processStep`,
/// `toolCorr`, ...). Construct from untrusted JSON through
/// [`CaseInput::from_json`], which rejects out-of-domain values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseInput {
    #[serde(rename = "pkg")]
    pub package: PackageType,
    pub process_step: ProcessStep,

    pub location: LocationSignature,
    pub morphology: Morphology,
    pub dense_bias: bool,
    pub severity: DefectSeverity,

    #[serde(rename = "toolCorr")]
    pub tool_correlation: ToolCorrelation,
    pub time_behavior: TimeBehavior,
    pub across_lot: AcrossLot,

    pub changes: ChangeFlags,
    pub chem_age: ChemAge,

    pub evidence: Evidence,
    pub bridging_risk: bool,
}

impl Default for CaseInput {
    /// The War Room's initial form: a BP-module edge-band island excursion on a
    /// single tool right after maintenance, SEM/EDS pending, bridging risk raised.
    fn default() -> Self {
        Self {
            package: PackageType::Bp,
            process_step: ProcessStep::BpModule,
            location: LocationSignature::EdgeBand,
            morphology: Morphology::RandomIslands,
            dense_bias: false,
            severity: DefectSeverity::Med,
            tool_correlation: ToolCorrelation::Single,
            time_behavior: TimeBehavior::StepChange,
            across_lot: AcrossLot::MultiLot,
            changes: ChangeFlags::none().with(ChangeFlag::PostPmOrParts, true),
            chem_age: ChemAge::Mid,
            evidence: Evidence::NotDone,
            bridging_risk: true,
        }
    }
}

impl CaseInput {
    /// Validate and construct a case record from JSON.
    pub fn from_json(value: &Value) -> CaseResult<Self> {
        CaseValidator::validate(value)
    }

    /// Serialize to the wire representation.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Whether the given change flag is set.
    pub fn changed(&self, flag: ChangeFlag) -> bool {
        self.changes.get(flag)
    }
}
