//! Plain-text War Room report
//!
//! Sections, in order:
//! 0. Decision now
//! 1. Snapshot of the case
//! 2. Top causes with shares
//! 3. First moves
//! 4. Confirmation matrix
//! 5. Release gate checklist (required items only)

use crate::case::{CaseInput, Domain};
use crate::gate::GateState;
use crate::library::{CauseLibrary, TestCard};
use crate::pipeline::Assessment;
use crate::scoring::ScoredCause;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Y"
    } else {
        "N"
    }
}

/// Whole-percent share; halves round up.
fn percent(share: f64) -> String {
    format!("{:.0}", share.round())
}

fn snapshot(input: &CaseInput) -> Vec<String> {
    let changes: Vec<&str> = input
        .changes
        .active()
        .iter()
        .map(|flag| flag.as_str())
        .collect();
    let changes = if changes.is_empty() {
        "None selected".to_string()
    } else {
        changes.join(", ")
    };

    vec![
        format!(
            "Package: {} | Step found: {}",
            input.package, input.process_step
        ),
        format!(
            "Signature: {} + {} + denseBias={} + severity={}",
            input.location,
            input.morphology,
            yes_no(input.dense_bias),
            input.severity
        ),
        format!(
            "Correlation: tool={}, time={}, acrossLot={}",
            input.tool_correlation, input.time_behavior, input.across_lot
        ),
        format!(
            "Chem age: {} | Evidence: {} | Bridging risk: {}",
            input.chem_age,
            input.evidence,
            yes_no(input.bridging_risk)
        ),
        format!("Changes: {}", changes),
    ]
}

fn causes(ranked: &[ScoredCause]) -> String {
    ranked
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}) {} — {}%",
                i + 1,
                CauseLibrary::get(s.cause).title,
                percent(s.share)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn matrix(rows: &[TestCard]) -> String {
    rows.iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}) Test: {}\n   Signal: {}\n   Means: {}\n   Next: {}",
                i + 1,
                r.test,
                r.signal,
                r.means,
                r.next
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bullets<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|l| format!("- {}", l.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the report for an assessment and the checklist it was resolved with.
pub fn render(input: &CaseInput, assessment: &Assessment, gate: &GateState) -> String {
    let gate_lines: Vec<String> = assessment
        .required_gates
        .iter()
        .map(|key| {
            let mark = if gate.is_done(key) { "x" } else { " " };
            format!("- [{}] {}", mark, key.checklist_label())
        })
        .collect();

    let mut out = String::new();
    out.push_str("0) Decision Now (1 line)\n");
    out.push_str(&format!(
        "   **{}** (base={}, metal residue risk={})\n\n",
        assessment.final_verdict, assessment.base_verdict, assessment.risk
    ));
    out.push_str("1) Snapshot (max 5 bullets)\n");
    out.push_str(&bullets(&snapshot(input)));
    out.push_str("\n\n2) Top 3 Causes (ranked + %, sum 100)\n");
    out.push_str(&causes(&assessment.ranked));
    out.push_str("\n\n3) First 4 Moves (next 8 hours)\n");
    out.push_str(&bullets(&assessment.first_moves));
    out.push_str("\n\n4) Confirmation Matrix\n");
    out.push_str(&matrix(&assessment.confirmation_matrix));
    out.push_str("\n\n5) Release Gate Checklist (required items)\n");
    out.push_str(&gate_lines.join("\n"));
    out
}
