//! CLI command implementations
//!
//! Each command is split into a pure step that turns JSON records into an
//! [`Output`] and a thin step that writes it. The pure steps run the engine
//! through a [`WarRoomSession`], the same way an interactive host would.

use std::path::Path;

use serde_json::{json, Value};

use crate::case::{CaseError, CaseInput, Domain};
use crate::config::{Config, OutputFormat};
use crate::explain::{explain, explain_gate};
use crate::gate::{GateEvaluation, GateState};
use crate::library::CauseLibrary;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::scoring::base_verdict;
use crate::session::WarRoomSession;

use super::args::{Cli, Command, TemplateKind};
use super::errors::{CliError, CliResult};
use super::io::{read_json, write_error, write_pretty, write_response, write_text};

/// What a command writes to stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    /// Wrapped in the `{"status":"ok"}` envelope
    Json(Value),
    /// Written as-is, pretty-printed
    Raw(Value),
}

impl Output {
    fn emit(self) -> CliResult<()> {
        match self {
            Output::Text(text) => write_text(&text),
            Output::Json(data) => write_response(data),
            Output::Raw(value) => write_pretty(&value),
        }
    }
}

/// Parse arguments, run the command and report failures.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let json_errors = cli.format == Some(OutputFormat::Json);

    let result = run_command(cli);
    if let Err(ref e) = result {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        if json_errors {
            write_error(e.code_str(), e.message())?;
        }
    }
    result
}

pub fn run_command(cli: Cli) -> CliResult<()> {
    let why_limit = match &cli.command {
        Command::Assess { why_limit, .. } => *why_limit,
        _ => None,
    };
    let config = Config::load_or_default(cli.config.as_deref())?.with_overrides(cli.format, why_limit)?;
    Logger::set_enabled(config.logging);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("output_format", format_name(config.output_format)),
            ("why_limit", &config.why_limit.to_string()),
        ],
    );

    let output = match cli.command {
        Command::Assess {
            case, gates, why, ..
        } => {
            let (case, gates) = read_records(&case, gates.as_deref())?;
            assess(&case, gates.as_ref(), &config, why)?
        }
        Command::Gates { case, gates } => {
            let (case, gates) = read_records(&case, gates.as_deref())?;
            gates_command(&case, gates.as_ref(), &config)?
        }
        Command::Explain {
            case,
            gates,
            gate_only,
        } => {
            let (case, gates) = read_records(&case, gates.as_deref())?;
            explain_command(&case, gates.as_ref(), gate_only)?
        }
        Command::Library => library(&config),
        Command::Template { kind } => template(kind),
    };

    output.emit()
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    }
}

fn read_records(case: &Path, gates: Option<&Path>) -> CliResult<(Value, Option<Value>)> {
    let case = read_json(case)?;
    let gates = gates.map(read_json).transpose()?;
    Ok((case, gates))
}

fn parse_case(record: &Value) -> Result<CaseInput, CaseError> {
    let result = CaseInput::from_json(record);
    match &result {
        Ok(_) => log_event_with_fields(Event::CaseAccepted, &[]),
        Err(e) => log_event_with_fields(
            Event::CaseRejected,
            &[("code", e.code()), ("message", &e.to_string())],
        ),
    }
    result
}

fn parse_gates(record: Option<&Value>) -> CliResult<GateState> {
    match record {
        None => Ok(GateState::cleared()),
        Some(value) => GateState::from_json(value).map_err(|e| {
            log_event_with_fields(
                Event::GateRejected,
                &[("code", e.code()), ("message", &e.to_string())],
            );
            CliError::from(e)
        }),
    }
}

/// Score a case and resolve its verdict against a checklist.
pub fn assess(
    case: &Value,
    gates: Option<&Value>,
    config: &Config,
    why: bool,
) -> CliResult<Output> {
    let input = parse_case(case)?;
    let gate = parse_gates(gates)?;

    let mut session = WarRoomSession::with_input(input);
    session.analyze();
    session.set_gates(gate);

    let assessment = session
        .assessment()
        .ok_or_else(|| CliError::io_error("No assessment produced"))?;
    let why_text = why.then(|| session.why(config.why_limit)).flatten();

    match config.output_format {
        OutputFormat::Text => {
            let mut text = session.report().unwrap_or_default();
            if let Some(trace) = why_text {
                text.push_str("\n\nWhy (triggers)\n");
                text.push_str(&trace);
            }
            Ok(Output::Text(text))
        }
        OutputFormat::Json => {
            let mut data = json!({
                "session": session.id().to_string(),
                "assessment": assessment,
            });
            if why {
                let lines: Vec<String> = assessment
                    .triggers
                    .iter()
                    .take(config.why_limit)
                    .map(|t| t.to_string())
                    .collect();
                data["why"] = json!(lines);
            }
            Ok(Output::Json(data))
        }
    }
}

/// Step and change context above a checklist, in operator wording.
fn case_header(input: &CaseInput) -> Vec<String> {
    let changes: Vec<&str> = input.changes.active().iter().map(|f| f.label()).collect();
    let changes = if changes.is_empty() {
        "None selected".to_string()
    } else {
        changes.join(", ")
    };
    vec![
        format!("Step found: {}", input.process_step.label()),
        format!("Changes: {}", changes),
    ]
}

/// Required gate items for a case, resolved against a checklist.
pub fn gates_command(case: &Value, gates: Option<&Value>, config: &Config) -> CliResult<Output> {
    let input = parse_case(case)?;
    let gate = parse_gates(gates)?;
    let evaluation = GateEvaluation::evaluate(&input, base_verdict(&input), &gate);

    match config.output_format {
        OutputFormat::Text => {
            let mut lines = case_header(&input);
            lines.push(String::new());
            lines.extend(evaluation.required.iter().map(|key| {
                let mark = if gate.is_done(key) { "x" } else { " " };
                format!("- [{}] {} ({})", mark, key.label(), key)
            }));
            lines.push(String::new());
            lines.push(evaluation.explain());
            Ok(Output::Text(lines.join("\n")))
        }
        OutputFormat::Json => Ok(Output::Json(json!({
            "required": evaluation.required,
            "pending": evaluation.pending,
            "baseVerdict": evaluation.base_verdict,
            "finalVerdict": evaluation.final_verdict,
            "explain": evaluation.explain(),
        }))),
    }
}

pub fn explain_command(case: &Value, gates: Option<&Value>, gate_only: bool) -> CliResult<Output> {
    let input = parse_case(case)?;
    let gate = parse_gates(gates)?;

    let explanation = if gate_only {
        explain_gate(&input, &gate)
    } else {
        explain(&input, &gate)
    };
    log_event_with_fields(
        Event::ExplainComplete,
        &[("rules", &explanation.rules_applied.len().to_string())],
    );
    Ok(Output::Json(serde_json::to_value(&explanation)?))
}

/// The cause catalog.
pub fn library(config: &Config) -> Output {
    match config.output_format {
        OutputFormat::Json => {
            let causes: Vec<_> = CauseLibrary::iter().collect();
            Output::Json(json!({ "causes": causes }))
        }
        OutputFormat::Text => {
            let mut blocks = Vec::with_capacity(CauseLibrary::len());
            for desc in CauseLibrary::iter() {
                let mut block = format!("{} ({})\n  {}", desc.title, desc.id, desc.short);
                for (package, factor) in desc.package_bias {
                    block.push_str(&format!("\n  {} bias: ×{}", package.as_str(), factor));
                }
                for card in desc.tests {
                    block.push_str(&format!("\n  Test: {}\n    Signal: {}", card.test, card.signal));
                }
                blocks.push(block);
            }
            Output::Text(blocks.join("\n\n"))
        }
    }
}

/// A starting record to edit.
pub fn template(kind: TemplateKind) -> Output {
    match kind {
        TemplateKind::Case => Output::Raw(CaseInput::default().to_json()),
        TemplateKind::Gates => {
            Output::Raw(serde_json::to_value(GateState::cleared()).unwrap_or(Value::Null))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(format: OutputFormat) -> Config {
        Logger::set_enabled(false);
        Config {
            output_format: format,
            ..Config::default()
        }
    }

    fn default_case() -> Value {
        CaseInput::default().to_json()
    }

    #[test]
    fn test_assess_text() {
        let out = assess(&default_case(), None, &quiet(OutputFormat::Text), true).unwrap();
        let Output::Text(text) = out else {
            panic!("expected text");
        };
        assert!(text.starts_with("0) Decision Now"));
        assert!(text.contains("**STOP**"));
        assert!(text.contains("Why (triggers)"));
    }

    #[test]
    fn test_assess_json_with_gates() {
        let gates = serde_json::to_value(GateState::all_done()).unwrap();
        let out = assess(&default_case(), Some(&gates), &quiet(OutputFormat::Json), false).unwrap();
        let Output::Json(data) = out else {
            panic!("expected json");
        };
        assert_eq!(data["assessment"]["finalVerdict"], "RELEASE");
        assert_eq!(data["assessment"]["baseVerdict"], "STOP");
        assert!(data.get("why").is_none());
    }

    #[test]
    fn test_assess_json_why_limit() {
        let config = Config {
            why_limit: 2,
            ..quiet(OutputFormat::Json)
        };
        let Output::Json(data) = assess(&default_case(), None, &config, true).unwrap() else {
            panic!("expected json");
        };
        assert_eq!(data["why"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_assess_rejects_bad_case() {
        let mut case = default_case();
        case["pkg"] = json!("CSP");
        let err = assess(&case, None, &quiet(OutputFormat::Text), false).unwrap_err();
        assert_eq!(err.code_str(), "BUMP_CLI_INVALID_CASE");
        assert!(err.message().contains("pkg"));
    }

    #[test]
    fn test_assess_rejects_bad_gates() {
        let gates = json!({ "AOI_MONITORS_PASS": true });
        let err = assess(&default_case(), Some(&gates), &quiet(OutputFormat::Text), false)
            .unwrap_err();
        assert_eq!(err.code_str(), "BUMP_CLI_INVALID_GATES");
    }

    #[test]
    fn test_gates_command() {
        let Output::Json(data) = gates_command(&default_case(), None, &quiet(OutputFormat::Json))
            .unwrap()
        else {
            panic!("expected json");
        };
        assert_eq!(
            data["required"],
            json!([
                "AOI_MONITORS_PASS",
                "CORRECTIVE_ACTION_DONE",
                "POST_FIX_MONITORS_PASS",
                "SEM_EDS_DONE",
                "BRIDGING_RISK_CLEARED"
            ])
        );
        assert_eq!(data["finalVerdict"], "STOP");

        let Output::Text(text) =
            gates_command(&default_case(), None, &quiet(OutputFormat::Text)).unwrap()
        else {
            panic!("expected text");
        };
        assert!(text.contains("- [ ] SEM/EDS completed (SEM_EDS_DONE)"));
        assert!(text.ends_with("pending (AOI_MONITORS_PASS, CORRECTIVE_ACTION_DONE, POST_FIX_MONITORS_PASS, SEM_EDS_DONE, BRIDGING_RISK_CLEARED)"));
    }

    #[test]
    fn test_gates_text_header_uses_operator_labels() {
        let Output::Text(text) =
            gates_command(&default_case(), None, &quiet(OutputFormat::Text)).unwrap()
        else {
            panic!("expected text");
        };
        assert!(text.starts_with(
            "Step found: BP module (placement/handler)\nChanges: Post-PM / parts change\n\n- [ ]"
        ));

        let mut quiet_case = default_case();
        quiet_case["processStep"] = json!("FINAL_INSPECTION");
        quiet_case["changes"]["POST_PM_OR_PARTS"] = json!(false);
        let Output::Text(text) =
            gates_command(&quiet_case, None, &quiet(OutputFormat::Text)).unwrap()
        else {
            panic!("expected text");
        };
        assert!(text.starts_with("Step found: Final inspection\nChanges: None selected\n"));
    }

    #[test]
    fn test_explain_command() {
        Logger::set_enabled(false);
        let Output::Json(data) = explain_command(&default_case(), None, false).unwrap() else {
            panic!("expected json");
        };
        assert_eq!(data["explanation_type"], "case.assessment");
        assert_eq!(data["conclusion"]["result"]["finalVerdict"], "STOP");

        let Output::Json(gate) = explain_command(&default_case(), None, true).unwrap() else {
            panic!("expected json");
        };
        assert_eq!(gate["explanation_type"], "gate.resolution");
    }

    #[test]
    fn test_library() {
        let Output::Json(data) = library(&quiet(OutputFormat::Json)) else {
            panic!("expected json");
        };
        assert_eq!(data["causes"].as_array().unwrap().len(), 10);
        assert_eq!(data["causes"][0]["id"], "RINSE_DRY_BOUNDARY");

        let Output::Text(text) = library(&quiet(OutputFormat::Text)) else {
            panic!("expected text");
        };
        assert!(text.contains("EP bias: ×1.35"));
    }

    #[test]
    fn test_templates_round_trip_through_validation() {
        let Output::Raw(case) = template(TemplateKind::Case) else {
            panic!("expected raw");
        };
        assert_eq!(CaseInput::from_json(&case).unwrap(), CaseInput::default());

        let Output::Raw(gates) = template(TemplateKind::Gates) else {
            panic!("expected raw");
        };
        assert_eq!(GateState::from_json(&gates).unwrap(), GateState::cleared());
    }
}
