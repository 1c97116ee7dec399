//! Candidate root-cause identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten candidate root causes.
///
/// Declaration order is the library iteration order, which is also the
/// tie-break order when two causes end up with the same share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CauseId {
    RinseDryBoundary,
    WettingOrganicContam,
    ParticleShedding,
    RedepositionTrappedChem,
    PrStripScum,
    BpTransferNozzle,
    BpHandlerContact,
    EpBathAgingAdditives,
    EpAnodeFilterParticles,
    EpMicroloadingTransport,
}

impl CauseId {
    /// Number of causes in the library.
    pub const COUNT: usize = 10;

    /// All causes in library order.
    pub const ALL: [CauseId; CauseId::COUNT] = [
        CauseId::RinseDryBoundary,
        CauseId::WettingOrganicContam,
        CauseId::ParticleShedding,
        CauseId::RedepositionTrappedChem,
        CauseId::PrStripScum,
        CauseId::BpTransferNozzle,
        CauseId::BpHandlerContact,
        CauseId::EpBathAgingAdditives,
        CauseId::EpAnodeFilterParticles,
        CauseId::EpMicroloadingTransport,
    ];

    /// Position in library order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CauseId::RinseDryBoundary => "RINSE_DRY_BOUNDARY",
            CauseId::WettingOrganicContam => "WETTING_ORGANIC_CONTAM",
            CauseId::ParticleShedding => "PARTICLE_SHEDDING",
            CauseId::RedepositionTrappedChem => "REDEPOSITION_TRAPPED_CHEM",
            CauseId::PrStripScum => "PR_STRIP_SCUM",
            CauseId::BpTransferNozzle => "BP_TRANSFER_NOZZLE",
            CauseId::BpHandlerContact => "BP_HANDLER_CONTACT",
            CauseId::EpBathAgingAdditives => "EP_BATH_AGING_ADDITIVES",
            CauseId::EpAnodeFilterParticles => "EP_ANODE_FILTER_PARTICLES",
            CauseId::EpMicroloadingTransport => "EP_MICROLOADING_TRANSPORT",
        }
    }
}

impl fmt::Display for CauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
