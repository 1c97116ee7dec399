//! Gate items and checklist state

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{GateError, GateResult};

/// A release checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateKey {
    AoiMonitorsPass,
    SemEdsDone,
    CorrectiveActionDone,
    PostFixMonitorsPass,
    BridgingRiskCleared,
}

impl GateKey {
    /// All items in checklist order.
    pub const ALL: [GateKey; 5] = [
        GateKey::AoiMonitorsPass,
        GateKey::SemEdsDone,
        GateKey::CorrectiveActionDone,
        GateKey::PostFixMonitorsPass,
        GateKey::BridgingRiskCleared,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GateKey::AoiMonitorsPass => "AOI_MONITORS_PASS",
            GateKey::SemEdsDone => "SEM_EDS_DONE",
            GateKey::CorrectiveActionDone => "CORRECTIVE_ACTION_DONE",
            GateKey::PostFixMonitorsPass => "POST_FIX_MONITORS_PASS",
            GateKey::BridgingRiskCleared => "BRIDGING_RISK_CLEARED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == value)
    }

    /// Short label shown on the checklist widget.
    pub fn label(&self) -> &'static str {
        match self {
            GateKey::AoiMonitorsPass => "2 consecutive monitors pass AOI (edge-inclusive)",
            GateKey::SemEdsDone => "SEM/EDS completed",
            GateKey::CorrectiveActionDone => "Corrective action applied",
            GateKey::PostFixMonitorsPass => "Post-fix monitors pass",
            GateKey::BridgingRiskCleared => "Bridging risk cleared",
        }
    }

    /// Full wording used in the written report.
    pub fn checklist_label(&self) -> &'static str {
        match self {
            GateKey::AoiMonitorsPass => "2 consecutive monitor wafers pass AOI (edge-inclusive)",
            GateKey::SemEdsDone => "SEM/EDS classification completed",
            GateKey::CorrectiveActionDone => "Corrective action applied (tool/bath/clean/handling)",
            GateKey::PostFixMonitorsPass => "Post-fix monitors pass (no recurrence)",
            GateKey::BridgingRiskCleared => {
                "Bridging risk cleared (ppm under limit / no bridge indicators)"
            }
        }
    }
}

impl fmt::Display for GateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion flag for every gate item.
///
/// Owned by the host session; the engine only reads it. All five keys are
/// always present. The default is every item pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct GateState {
    pub aoi_monitors_pass: bool,
    pub sem_eds_done: bool,
    pub corrective_action_done: bool,
    pub post_fix_monitors_pass: bool,
    pub bridging_risk_cleared: bool,
}

impl GateState {
    /// Every item pending.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Every item complete.
    pub fn all_done() -> Self {
        let mut state = Self::default();
        for key in GateKey::ALL {
            state.set(key, true);
        }
        state
    }

    /// Builder-style setter.
    pub fn with(mut self, key: GateKey, done: bool) -> Self {
        self.set(key, done);
        self
    }

    pub fn is_done(&self, key: GateKey) -> bool {
        match key {
            GateKey::AoiMonitorsPass => self.aoi_monitors_pass,
            GateKey::SemEdsDone => self.sem_eds_done,
            GateKey::CorrectiveActionDone => self.corrective_action_done,
            GateKey::PostFixMonitorsPass => self.post_fix_monitors_pass,
            GateKey::BridgingRiskCleared => self.bridging_risk_cleared,
        }
    }

    pub fn set(&mut self, key: GateKey, done: bool) {
        let slot = match key {
            GateKey::AoiMonitorsPass => &mut self.aoi_monitors_pass,
            GateKey::SemEdsDone => &mut self.sem_eds_done,
            GateKey::CorrectiveActionDone => &mut self.corrective_action_done,
            GateKey::PostFixMonitorsPass => &mut self.post_fix_monitors_pass,
            GateKey::BridgingRiskCleared => &mut self.bridging_risk_cleared,
        };
        *slot = done;
    }

    /// Flip one item; returns its new value.
    pub fn toggle(&mut self, key: GateKey) -> bool {
        let done = !self.is_done(key);
        self.set(key, done);
        done
    }

    /// Validate and construct from JSON. All five keys are required.
    pub fn from_json(value: &Value) -> GateResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            GateError::NotAnObject(match value {
                Value::Array(_) => "array".to_string(),
                other => other.to_string(),
            })
        })?;

        if let Some(extra) = obj.keys().find(|k| GateKey::parse(k).is_none()) {
            return Err(GateError::UnknownItem(extra.clone()));
        }

        let mut state = Self::cleared();
        for key in GateKey::ALL {
            let raw = obj
                .get(key.as_str())
                .ok_or_else(|| GateError::MissingItem(key.as_str().to_string()))?;
            let done = raw.as_bool().ok_or_else(|| GateError::NotBoolean {
                key: key.as_str().to_string(),
                actual: raw.to_string(),
            })?;
            state.set(key, done);
        }
        Ok(state)
    }
}
