//! Closed observation domains for a defect case
//!
//! Every enumerated field of a case record takes a value from one of the
//! domains below. The wire spelling of each value is its SCREAMING_SNAKE_CASE
//! name (e.g. "BP_MODULE", "METAL_CONFIRMED").

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed, exhaustively enumerated value domain.
///
/// Implemented by every enum a case record is built from, so the validator
/// can parse and report on any field without knowing its concrete type.
pub trait Domain: Copy + Sized + 'static {
    /// All members in declaration order.
    fn all() -> &'static [Self];

    /// Wire name of this member.
    fn as_str(&self) -> &'static str;

    /// Parse a wire name. Returns `None` for out-of-domain values.
    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.as_str() == value)
    }

    /// Human-readable list of accepted wire names, e.g. `one of BP|EP`.
    fn expected() -> String {
        let names: Vec<&str> = Self::all().iter().map(|m| m.as_str()).collect();
        format!("one of {}", names.join("|"))
    }
}

macro_rules! domain_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

/// Packaging technology context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    /// Bump process
    Bp,
    /// Electroplating
    Ep,
}

impl Domain for PackageType {
    fn all() -> &'static [Self] {
        &[Self::Bp, Self::Ep]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Bp => "BP",
            Self::Ep => "EP",
        }
    }
}

/// Process step at which the defect was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStep {
    PostEtchClean,
    PostStripDescum,
    PostEpRinseDry,
    BpModule,
    FinalInspection,
}

impl ProcessStep {
    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PostEtchClean => "Post-etch clean",
            Self::PostStripDescum => "Post-strip / descum",
            Self::PostEpRinseDry => "Post-EP rinse/dry",
            Self::BpModule => "BP module (placement/handler)",
            Self::FinalInspection => "Final inspection",
        }
    }
}

impl Domain for ProcessStep {
    fn all() -> &'static [Self] {
        &[
            Self::PostEtchClean,
            Self::PostStripDescum,
            Self::PostEpRinseDry,
            Self::BpModule,
            Self::FinalInspection,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::PostEtchClean => "POST_ETCH_CLEAN",
            Self::PostStripDescum => "POST_STRIP_DESCUM",
            Self::PostEpRinseDry => "POST_EP_RINSE_DRY",
            Self::BpModule => "BP_MODULE",
            Self::FinalInspection => "FINAL_INSPECTION",
        }
    }
}

/// Spatial pattern on the wafer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationSignature {
    EdgeBand,
    Center,
    Across,
}

impl Domain for LocationSignature {
    fn all() -> &'static [Self] {
        &[Self::EdgeBand, Self::Center, Self::Across]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::EdgeBand => "EDGE_BAND",
            Self::Center => "CENTER",
            Self::Across => "ACROSS",
        }
    }
}

/// Visual defect shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Morphology {
    HazeFilm,
    RandomIslands,
    Streaks,
    Ring,
}

impl Domain for Morphology {
    fn all() -> &'static [Self] {
        &[Self::HazeFilm, Self::RandomIslands, Self::Streaks, Self::Ring]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::HazeFilm => "HAZE_FILM",
            Self::RandomIslands => "RANDOM_ISLANDS",
            Self::Streaks => "STREAKS",
            Self::Ring => "RING",
        }
    }
}

/// Observed defect severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefectSeverity {
    Low,
    Med,
    High,
}

impl Domain for DefectSeverity {
    fn all() -> &'static [Self] {
        &[Self::Low, Self::Med, Self::High]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Med => "MED",
            Self::High => "HIGH",
        }
    }
}

/// Whether one tool or many are implicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolCorrelation {
    Single,
    Multi,
    Unknown,
}

impl Domain for ToolCorrelation {
    fn all() -> &'static [Self] {
        &[Self::Single, Self::Multi, Self::Unknown]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Multi => "MULTI",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Temporal signature of the excursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeBehavior {
    StepChange,
    Intermittent,
    Drift,
}

impl Domain for TimeBehavior {
    fn all() -> &'static [Self] {
        &[Self::StepChange, Self::Intermittent, Self::Drift]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::StepChange => "STEP_CHANGE",
            Self::Intermittent => "INTERMITTENT",
            Self::Drift => "DRIFT",
        }
    }
}

/// Scope of the excursion across lots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcrossLot {
    OneLot,
    MultiLot,
}

impl Domain for AcrossLot {
    fn all() -> &'static [Self] {
        &[Self::OneLot, Self::MultiLot]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::OneLot => "ONE_LOT",
            Self::MultiLot => "MULTI_LOT",
        }
    }
}

/// Bath / chemistry lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChemAge {
    Fresh,
    Mid,
    Late,
}

impl Domain for ChemAge {
    fn all() -> &'static [Self] {
        &[Self::Fresh, Self::Mid, Self::Late]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "FRESH",
            Self::Mid => "MID",
            Self::Late => "LATE",
        }
    }
}

/// SEM/EDS analytical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evidence {
    NotDone,
    MetalConfirmed,
    Organic,
    SaltOxide,
}

impl Domain for Evidence {
    fn all() -> &'static [Self] {
        &[
            Self::NotDone,
            Self::MetalConfirmed,
            Self::Organic,
            Self::SaltOxide,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::NotDone => "NOT_DONE",
            Self::MetalConfirmed => "METAL_CONFIRMED",
            Self::Organic => "ORGANIC",
            Self::SaltOxide => "SALT_OXIDE",
        }
    }
}

/// Recent process perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeFlag {
    PostPmOrParts,
    NewPrBatch,
    FilterDpHighOrChange,
    RecipeChange,
    HandlingChange,
    ProductMixChange,
}

impl ChangeFlag {
    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PostPmOrParts => "Post-PM / parts change",
            Self::NewPrBatch => "New PR batch",
            Self::FilterDpHighOrChange => "Filter DP high / filter change",
            Self::RecipeChange => "Recipe change",
            Self::HandlingChange => "Operator/handling change",
            Self::ProductMixChange => "Product mix change",
        }
    }
}

impl Domain for ChangeFlag {
    fn all() -> &'static [Self] {
        &[
            Self::PostPmOrParts,
            Self::NewPrBatch,
            Self::FilterDpHighOrChange,
            Self::RecipeChange,
            Self::HandlingChange,
            Self::ProductMixChange,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::PostPmOrParts => "POST_PM_OR_PARTS",
            Self::NewPrBatch => "NEW_PR_BATCH",
            Self::FilterDpHighOrChange => "FILTER_DP_HIGH_OR_CHANGE",
            Self::RecipeChange => "RECIPE_CHANGE",
            Self::HandlingChange => "HANDLING_CHANGE",
            Self::ProductMixChange => "PRODUCT_MIX_CHANGE",
        }
    }
}

domain_display!(
    PackageType,
    ProcessStep,
    LocationSignature,
    Morphology,
    DefectSeverity,
    ToolCorrelation,
    TimeBehavior,
    AcrossLot,
    ChemAge,
    Evidence,
    ChangeFlag,
);

/// Fixed mapping from every [`ChangeFlag`] to a boolean.
///
/// All six keys are always present; on the wire every key is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct ChangeFlags {
    pub post_pm_or_parts: bool,
    pub new_pr_batch: bool,
    pub filter_dp_high_or_change: bool,
    pub recipe_change: bool,
    pub handling_change: bool,
    pub product_mix_change: bool,
}

impl ChangeFlags {
    /// All flags cleared.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, flag: ChangeFlag, value: bool) -> Self {
        self.set(flag, value);
        self
    }

    pub fn get(&self, flag: ChangeFlag) -> bool {
        match flag {
            ChangeFlag::PostPmOrParts => self.post_pm_or_parts,
            ChangeFlag::NewPrBatch => self.new_pr_batch,
            ChangeFlag::FilterDpHighOrChange => self.filter_dp_high_or_change,
            ChangeFlag::RecipeChange => self.recipe_change,
            ChangeFlag::HandlingChange => self.handling_change,
            ChangeFlag::ProductMixChange => self.product_mix_change,
        }
    }

    pub fn set(&mut self, flag: ChangeFlag, value: bool) {
        let slot = match flag {
            ChangeFlag::PostPmOrParts => &mut self.post_pm_or_parts,
            ChangeFlag::NewPrBatch => &mut self.new_pr_batch,
            ChangeFlag::FilterDpHighOrChange => &mut self.filter_dp_high_or_change,
            ChangeFlag::RecipeChange => &mut self.recipe_change,
            ChangeFlag::HandlingChange => &mut self.handling_change,
            ChangeFlag::ProductMixChange => &mut self.product_mix_change,
        };
        *slot = value;
    }

    pub fn toggle(&mut self, flag: ChangeFlag) {
        self.set(flag, !self.get(flag));
    }

    /// Flags currently set, in declaration order.
    pub fn active(&self) -> Vec<ChangeFlag> {
        ChangeFlag::all()
            .iter()
            .copied()
            .filter(|f| self.get(*f))
            .collect()
    }
}
