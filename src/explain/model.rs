//! Explanation object model
//!
//! Every explanation has the same shape:
//! - explanation_type
//! - inputs: the case record as observed
//! - rules_applied: [ { rule_id, description, evaluation, facts } ]
//! - conclusion
//!
//! Maps are ordered so that serialized explanations are byte-stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Explanation type identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExplanationType {
    /// Why the causes ranked the way they did.
    #[serde(rename = "case.assessment")]
    CaseAssessment,
    /// Why the final verdict is what it is.
    #[serde(rename = "gate.resolution")]
    GateResolution,
}

/// Rule evaluation result. Always explicit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleEvaluation {
    True,
    False,
}

impl From<bool> for RuleEvaluation {
    fn from(value: bool) -> Self {
        if value {
            RuleEvaluation::True
        } else {
            RuleEvaluation::False
        }
    }
}

/// Observed field values a rule read. Raw state, not interpretation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Facts {
    #[serde(flatten)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Facts {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Facts with a single entry.
    pub fn with(key: impl Into<String>, value: impl Serialize) -> Self {
        let mut facts = Self::empty();
        facts.add(key, value);
        facts
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Serialize) {
        self.data
            .insert(key.into(), serde_json::to_value(value).unwrap_or_default());
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

/// One rule as applied to a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleApplication {
    /// Stable rule identifier (e.g. "W-03", "G-2").
    pub rule_id: String,
    pub description: String,
    pub evaluation: RuleEvaluation,
    pub facts: Facts,
}

impl RuleApplication {
    pub fn new(
        rule_id: impl Into<String>,
        description: impl Into<String>,
        evaluation: impl Into<RuleEvaluation>,
        facts: Facts,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            description: description.into(),
            evaluation: evaluation.into(),
            facts,
        }
    }

    pub fn fired(&self) -> bool {
        self.evaluation == RuleEvaluation::True
    }
}

/// What the rules resolved to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conclusion {
    pub result: serde_json::Value,
}

impl Conclusion {
    pub fn new(result: impl Serialize) -> Self {
        Self {
            result: serde_json::to_value(result).unwrap_or_default(),
        }
    }
}

/// Complete explanation object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Explanation {
    pub explanation_type: ExplanationType,
    pub inputs: BTreeMap<String, serde_json::Value>,
    /// Rules in evaluation order, fired or not.
    pub rules_applied: Vec<RuleApplication>,
    pub conclusion: Conclusion,
}

impl Explanation {
    pub fn builder(explanation_type: ExplanationType) -> ExplanationBuilder {
        ExplanationBuilder::new(explanation_type)
    }

    /// Rules whose condition held.
    pub fn fired(&self) -> impl Iterator<Item = &RuleApplication> {
        self.rules_applied.iter().filter(|r| r.fired())
    }

    pub fn rule(&self, rule_id: &str) -> Option<&RuleApplication> {
        self.rules_applied.iter().find(|r| r.rule_id == rule_id)
    }
}

/// Builder for explanations.
pub struct ExplanationBuilder {
    explanation_type: ExplanationType,
    inputs: BTreeMap<String, serde_json::Value>,
    rules_applied: Vec<RuleApplication>,
}

impl ExplanationBuilder {
    pub fn new(explanation_type: ExplanationType) -> Self {
        Self {
            explanation_type,
            inputs: BTreeMap::new(),
            rules_applied: Vec::new(),
        }
    }

    pub fn input(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.inputs
            .insert(key.into(), serde_json::to_value(value).unwrap_or_default());
        self
    }

    /// Record every top-level field of a JSON object as an input.
    pub fn inputs_from(mut self, record: &serde_json::Value) -> Self {
        if let Some(obj) = record.as_object() {
            for (key, value) in obj {
                self.inputs.insert(key.clone(), value.clone());
            }
        }
        self
    }

    pub fn rule(mut self, rule: RuleApplication) -> Self {
        self.rules_applied.push(rule);
        self
    }

    pub fn conclude(self, result: impl Serialize) -> Explanation {
        Explanation {
            explanation_type: self.explanation_type,
            inputs: self.inputs,
            rules_applied: self.rules_applied,
            conclusion: Conclusion::new(result),
        }
    }
}
