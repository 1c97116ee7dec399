//! Static cause catalog
//!
//! One descriptor per [`CauseId`], stored in library order. Descriptors are
//! read-only reference data and are never mutated at runtime.

use serde::Serialize;

use super::cause::CauseId;
use crate::case::PackageType;

/// A confirmation test for a suspected cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestCard {
    /// Test procedure
    pub test: &'static str,
    /// Expected signal if the cause is real
    pub signal: &'static str,
    /// What the signal means
    pub means: &'static str,
    /// Next action once confirmed
    pub next: &'static str,
}

/// Static description of one candidate root cause.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CauseDescriptor {
    pub id: CauseId,
    pub title: &'static str,
    pub short: &'static str,
    /// Per-package score multipliers. Packages not listed use 1.0.
    pub package_bias: &'static [(PackageType, f64)],
    /// Confirmation tests, most decisive first. Never empty.
    pub tests: &'static [TestCard],
}

impl CauseDescriptor {
    /// Score multiplier for the given package type.
    pub fn multiplier(&self, package: PackageType) -> f64 {
        self.package_bias
            .iter()
            .find(|(p, _)| *p == package)
            .map(|(_, m)| *m)
            .unwrap_or(1.0)
    }

    /// The first (most decisive) confirmation test.
    pub fn primary_test(&self) -> &'static TestCard {
        &self.tests[0]
    }
}

pub(super) static CAUSES: [CauseDescriptor; CauseId::COUNT] = [
    CauseDescriptor {
        id: CauseId::RinseDryBoundary,
        title: "Rinse/Dry boundary non-uniformity",
        short: "Edge/ring haze from rinse/drain/dry transient or non-uniform drying.",
        package_bias: &[],
        tests: &[TestCard {
            test: "Monitor split: normal vs +2× DI rinse + dry tweak (N2 knife / spin / time)",
            signal: "Edge/ring haze drops with boosted rinse/dry",
            means: "Boundary/dry mechanism likely",
            next: "Lock optimized rinse/dry; verify hardware; gate-release after clean monitors",
        }],
    },
    CauseDescriptor {
        id: CauseId::WettingOrganicContam,
        title: "Wetting failure / organic contamination",
        short: "Water-break/contact angle shift leaves thin film; often post-maintenance or handling.",
        package_bias: &[],
        tests: &[TestCard {
            test: "Water-break / contact angle on affected vs baseline",
            signal: "Poor wetting / patchy film formation",
            means: "Organic contamination/wetting failure",
            next: "Clean/refresh; tighten handling; gate-release after monitors pass",
        }],
    },
    CauseDescriptor {
        id: CauseId::ParticleShedding,
        title: "Particle shedding (filter/seals/nozzles/parts)",
        short: "Random islands/specks; intermittent; often single tool or post-parts change.",
        package_bias: &[],
        tests: &[TestCard {
            test: "Inspect filters/DP trend + check seals/nozzles/lines",
            signal: "DP spike / debris found / part swap correlates",
            means: "Particle source confirmed",
            next: "Replace/clean source; run monitors; quarantine window until pass",
        }],
    },
    CauseDescriptor {
        id: CauseId::RedepositionTrappedChem,
        title: "Redeposition / trapped chemistry in features",
        short: "Density dependence; trapped chem re-deposits; rinse inefficiency in features.",
        package_bias: &[(PackageType::Ep, 1.15)],
        tests: &[TestCard {
            test: "Dense vs sparse comparison + enhanced rinse/clean split",
            signal: "Dense-bias reduces with enhanced clean",
            means: "Transport/trap mechanism",
            next: "Implement enhanced clean; monitor trend; gate-release",
        }],
    },
    CauseDescriptor {
        id: CauseId::PrStripScum,
        title: "PR/strip/descum residue masquerading as metal residue",
        short: "Micro-scum looks like residue after downstream; density bias common.",
        package_bias: &[],
        tests: &[TestCard {
            test: "Split: old PR vs new PR AND standard vs boosted strip/descum",
            signal: "Defect tracks PR batch or strip strength",
            means: "PR/strip incompatibility",
            next: "Block PR lot; tune strip/descum; re-qualify before release",
        }],
    },
    CauseDescriptor {
        id: CauseId::BpTransferNozzle,
        title: "BP: placement head/nozzle transfer contamination",
        short: "Islands/transfer-like marks from head/nozzle/contact surfaces.",
        package_bias: &[(PackageType::Bp, 1.25)],
        tests: &[TestCard {
            test: "BP transfer monitor: run dummy then inspect",
            signal: "Transfer signature repeats",
            means: "Placement head/nozzle contamination",
            next: "Clean/replace nozzle/head; verify with clean monitors; gate-release",
        }],
    },
    CauseDescriptor {
        id: CauseId::BpHandlerContact,
        title: "BP: handler/contact surface contamination",
        short: "Localized islands where contact/handling occurs; intermittent across lots.",
        package_bias: &[(PackageType::Bp, 1.15)],
        tests: &[TestCard {
            test: "Map defect vs contact points; inspect trays/end-effectors",
            signal: "Defects align with contact points",
            means: "Handling contamination",
            next: "Replace/clean contact hardware; retrain handling; gate-release",
        }],
    },
    CauseDescriptor {
        id: CauseId::EpBathAgingAdditives,
        title: "EP: bath aging / additive breakdown",
        short: "Drift across days; density dependence; correlates to bath age/additive health.",
        package_bias: &[(PackageType::Ep, 1.35)],
        tests: &[TestCard {
            test: "Pull bath health + correlate to drift start",
            signal: "OOC bath parameter aligns with drift",
            means: "Bath aging/additive breakdown",
            next: "Refresh bath/additives; verify with monitors; gate-release",
        }],
    },
    CauseDescriptor {
        id: CauseId::EpAnodeFilterParticles,
        title: "EP: anode bag / filter / pump particle source",
        short: "Islands/specks; intermittent; can spike after maintenance or DP events.",
        package_bias: &[(PackageType::Ep, 1.25)],
        tests: &[TestCard {
            test: "Inspect anode bags/filters/pumps; check DP events",
            signal: "Debris found; DP spike aligns",
            means: "EP particle source confirmed",
            next: "Replace bags/filters; flush; run clean monitors; gate-release",
        }],
    },
    CauseDescriptor {
        id: CauseId::EpMicroloadingTransport,
        title: "EP: microloading / transport limitation",
        short: "Dense patterns worse; features trap chem; linked to plating/clean transport.",
        package_bias: &[(PackageType::Ep, 1.35)],
        tests: &[TestCard {
            test: "Dense vs sparse split + adjust agitation/flow (within spec)",
            signal: "Dense-bias reduces with improved transport",
            means: "Microloading/transport limitation",
            next: "Optimize transport; enhance post-plate rinse; gate-release after monitors",
        }],
    },
];
