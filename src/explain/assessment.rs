//! Case assessment explanations
//!
//! Type: case.assessment
//! Inputs: the case record
//! Rules applied:
//! - every weighted rule, fired or not, with the fields it read
//! - verdict and gate requirement rules
//! Conclusion: final verdict, risk and ranked causes
//!
//! Type: gate.resolution
//! Rules applied: gate requirement rules and release resolution only

use serde::Serialize;

use super::model::{Explanation, ExplanationBuilder, ExplanationType, Facts, RuleApplication};
use crate::case::CaseInput;
use crate::gate::{GateEvaluation, GateKey, GateState};
use crate::scoring::{
    base_verdict, score_causes, Effect, Risk, ScoredCause, ScoringEngine, Verdict, WeightRule,
};

const BASELINE_GATES: [GateKey; 3] = [
    GateKey::AoiMonitorsPass,
    GateKey::CorrectiveActionDone,
    GateKey::PostFixMonitorsPass,
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentResult<'a> {
    final_verdict: Verdict,
    base_verdict: Verdict,
    risk: Risk,
    ranked: &'a [ScoredCause],
    pending_gates: &'a [GateKey],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GateResult<'a> {
    final_verdict: Verdict,
    base_verdict: Verdict,
    pending_gates: &'a [GateKey],
}

fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::Add { cause, weight, .. } => format!("{} {:+}", cause, weight),
        Effect::Scale { cause, factor, .. } => format!("{} ×{}", cause, factor),
    }
}

fn weighted_rule(rule: &WeightRule, input: &CaseInput) -> RuleApplication {
    let effects: Vec<String> = rule.effects.iter().map(describe_effect).collect();
    let description = format!(
        "if {} then {}",
        rule.condition.describe(),
        effects.join(", ")
    );

    let mut facts = Facts::empty();
    for (field, value) in rule.condition.observed(input) {
        facts.add(field, value);
    }

    RuleApplication::new(rule.id, description, rule.condition.holds(input), facts)
}

fn verdict_rules(builder: ExplanationBuilder, input: &CaseInput) -> ExplanationBuilder {
    let mut facts = Facts::with("bridgingRisk", input.bridging_risk);
    facts.add("evidence", input.evidence);
    facts.add("severity", input.severity);
    builder.rule(RuleApplication::new(
        "V-1",
        "base verdict STOP if bridgingRisk = true or (evidence = METAL_CONFIRMED and severity = HIGH), else HOLD",
        base_verdict(input) == Verdict::Stop,
        facts,
    ))
}

fn gate_rules(
    mut builder: ExplanationBuilder,
    input: &CaseInput,
    gate: &GateState,
    evaluation: &GateEvaluation,
) -> ExplanationBuilder {
    let required = &evaluation.required;

    builder = builder.rule(RuleApplication::new(
        "G-1",
        "AOI_MONITORS_PASS, CORRECTIVE_ACTION_DONE and POST_FIX_MONITORS_PASS are always required",
        BASELINE_GATES.iter().all(|key| required.contains(*key)),
        Facts::empty(),
    ));

    builder = builder.rule(RuleApplication::new(
        "G-2",
        "SEM_EDS_DONE required if evidence = NOT_DONE",
        required.contains(GateKey::SemEdsDone),
        Facts::with("evidence", input.evidence),
    ));

    let mut facts = Facts::with("bridgingRisk", input.bridging_risk);
    facts.add("evidence", input.evidence);
    builder = builder.rule(RuleApplication::new(
        "G-3",
        "BRIDGING_RISK_CLEARED required if bridgingRisk = true or evidence = METAL_CONFIRMED",
        required.contains(GateKey::BridgingRiskCleared),
        facts,
    ));

    let mut checklist = Facts::empty();
    for key in required.iter() {
        checklist.add(key.as_str(), gate.is_done(key));
    }
    builder.rule(RuleApplication::new(
        "G-4",
        "final verdict RELEASE if every required gate item is complete, else base verdict",
        evaluation.is_released(),
        checklist,
    ))
}

/// Explain how a case was scored and why its verdict resolved as it did.
pub fn explain(input: &CaseInput, gate: &GateState) -> Explanation {
    let engine = ScoringEngine::new();
    let outcome = engine.score(input);
    let evaluation = GateEvaluation::evaluate(input, outcome.base_verdict, gate);

    let mut builder =
        Explanation::builder(ExplanationType::CaseAssessment).inputs_from(&input.to_json());

    for rule in engine.rules() {
        builder = builder.rule(weighted_rule(rule, input));
    }
    builder = verdict_rules(builder, input);
    builder = gate_rules(builder, input, gate, &evaluation);

    builder.conclude(AssessmentResult {
        final_verdict: evaluation.final_verdict,
        base_verdict: outcome.base_verdict,
        risk: outcome.risk,
        ranked: &outcome.ranked,
        pending_gates: &evaluation.pending,
    })
}

/// Explain only the gate resolution for a case and checklist.
pub fn explain_gate(input: &CaseInput, gate: &GateState) -> Explanation {
    let base = score_causes(input).base_verdict;
    let evaluation = GateEvaluation::evaluate(input, base, gate);

    let mut builder = Explanation::builder(ExplanationType::GateResolution)
        .input("evidence", input.evidence)
        .input("bridgingRisk", input.bridging_risk)
        .input("severity", input.severity)
        .input("gate", gate);
    builder = verdict_rules(builder, input);
    builder = gate_rules(builder, input, gate, &evaluation);

    builder.conclude(GateResult {
        final_verdict: evaluation.final_verdict,
        base_verdict: base,
        pending_gates: &evaluation.pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{DefectSeverity, Domain, Evidence};
    use crate::explain::RuleEvaluation;
    use crate::gate::required_gates;
    use crate::scoring::STANDARD_RULES;

    #[test]
    fn test_every_weighted_rule_is_listed() {
        let explanation = explain(&CaseInput::default(), &GateState::cleared());
        for rule in STANDARD_RULES.iter() {
            assert!(explanation.rule(rule.id).is_some(), "{} missing", rule.id);
        }
        // 13 weighted + V-1 + G-1..G-4
        assert_eq!(explanation.rules_applied.len(), STANDARD_RULES.len() + 5);
    }

    #[test]
    fn test_fired_rules_match_engine() {
        let input = CaseInput::default();
        let outcome = score_causes(&input);
        let explanation = explain(&input, &GateState::cleared());

        let fired: Vec<&str> = explanation
            .fired()
            .map(|r| r.rule_id.as_str())
            .filter(|id| id.starts_with("W-"))
            .collect();
        assert_eq!(fired, outcome.fired_rules);
    }

    #[test]
    fn test_facts_are_raw_fields() {
        let explanation = explain(&CaseInput::default(), &GateState::cleared());
        let w01 = explanation.rule("W-01").unwrap();
        assert_eq!(w01.evaluation, RuleEvaluation::True);
        assert_eq!(w01.facts.get("processStep"), Some(&serde_json::json!("BP_MODULE")));
        assert!(w01.description.starts_with("if processStep = BP_MODULE then"));
    }

    #[test]
    fn test_conclusion_carries_final_verdict() {
        let explanation = explain(&CaseInput::default(), &GateState::all_done());
        let result = &explanation.conclusion.result;
        assert_eq!(result["finalVerdict"], "RELEASE");
        assert_eq!(result["baseVerdict"], "STOP");
        assert_eq!(result["ranked"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_gate_explanation() {
        let input = CaseInput {
            evidence: Evidence::Organic,
            bridging_risk: false,
            ..CaseInput::default()
        };
        let explanation = explain_gate(&input, &GateState::cleared());
        assert_eq!(explanation.explanation_type, ExplanationType::GateResolution);
        assert_eq!(explanation.rule("G-2").unwrap().evaluation, RuleEvaluation::False);
        assert_eq!(explanation.rule("G-3").unwrap().evaluation, RuleEvaluation::False);
        assert_eq!(explanation.rule("G-4").unwrap().evaluation, RuleEvaluation::False);

        let checklist = &explanation.rule("G-4").unwrap().facts;
        assert_eq!(checklist.data.len(), 3);
        assert_eq!(checklist.get("AOI_MONITORS_PASS"), Some(&serde_json::json!(false)));
    }

    /// Verdict and gate rule evaluations agree with the engine for every
    /// combination of the fields they read.
    #[test]
    fn test_verdict_and_gate_rules_agree_with_engine() {
        for evidence in Evidence::all() {
            for severity in DefectSeverity::all() {
                for bridging_risk in [false, true] {
                    let input = CaseInput {
                        evidence: *evidence,
                        severity: *severity,
                        bridging_risk,
                        ..CaseInput::default()
                    };
                    let required = required_gates(&input);
                    let explanation = explain_gate(&input, &GateState::cleared());
                    let holds = |id: &str| explanation.rule(id).unwrap().fired();

                    assert_eq!(holds("V-1"), base_verdict(&input) == Verdict::Stop);
                    assert!(holds("G-1"));
                    assert_eq!(holds("G-2"), required.contains(GateKey::SemEdsDone));
                    assert_eq!(holds("G-3"), required.contains(GateKey::BridgingRiskCleared));
                    assert!(!holds("G-4"));
                }
            }
        }
    }
}
