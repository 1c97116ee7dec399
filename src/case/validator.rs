//! Case record validation
//!
//! Validation semantics:
//! - The record is a JSON object
//! - All 13 fields are present, none is null
//! - No undeclared fields exist
//! - Enumerated fields hold a wire name from their closed domain
//! - Boolean fields are JSON booleans (no coercion)
//! - `changes` holds exactly the six change-flag keys, all booleans
//!
//! The validator never defaults a missing or malformed value.

use serde_json::{Map, Value};

use super::errors::{CaseError, CaseResult, ValidationDetails};
use super::input::CaseInput;
use super::types::{ChangeFlag, ChangeFlags, Domain};

/// Declared top-level fields, in form order.
pub const CASE_FIELDS: [&str; 13] = [
    "pkg",
    "processStep",
    "location",
    "morphology",
    "denseBias",
    "severity",
    "toolCorr",
    "timeBehavior",
    "acrossLot",
    "changes",
    "chemAge",
    "evidence",
    "bridgingRisk",
];

/// Stateless validator turning untrusted JSON into a [`CaseInput`].
pub struct CaseValidator;

impl CaseValidator {
    /// Validate a case record and construct the typed input.
    ///
    /// # Errors
    ///
    /// - `BUMP_CASE_NOT_AN_OBJECT` if the record is not a JSON object
    /// - `BUMP_CASE_INVALID_INPUT` for the first offending field
    pub fn validate(record: &Value) -> CaseResult<CaseInput> {
        let obj = record
            .as_object()
            .ok_or_else(|| CaseError::NotAnObject(json_type_name(record).to_string()))?;

        if let Some(extra) = obj.keys().find(|k| !CASE_FIELDS.contains(&k.as_str())) {
            return Err(CaseError::InvalidInput(ValidationDetails::extra_field(
                extra.as_str(),
            )));
        }

        Ok(CaseInput {
            package: domain_field(obj, "pkg")?,
            process_step: domain_field(obj, "processStep")?,
            location: domain_field(obj, "location")?,
            morphology: domain_field(obj, "morphology")?,
            dense_bias: bool_field(obj, "denseBias", "denseBias")?,
            severity: domain_field(obj, "severity")?,
            tool_correlation: domain_field(obj, "toolCorr")?,
            time_behavior: domain_field(obj, "timeBehavior")?,
            across_lot: domain_field(obj, "acrossLot")?,
            changes: change_flags(obj)?,
            chem_age: domain_field(obj, "chemAge")?,
            evidence: domain_field(obj, "evidence")?,
            bridging_risk: bool_field(obj, "bridgingRisk", "bridgingRisk")?,
        })
    }
}

fn required<'a>(obj: &'a Map<String, Value>, key: &str, path: &str) -> CaseResult<&'a Value> {
    match obj.get(key) {
        None => Err(CaseError::InvalidInput(ValidationDetails::missing_field(path))),
        Some(Value::Null) => Err(CaseError::InvalidInput(ValidationDetails::null_value(path))),
        Some(value) => Ok(value),
    }
}

fn domain_field<T: Domain>(obj: &Map<String, Value>, key: &str) -> CaseResult<T> {
    let value = required(obj, key, key)?;
    value
        .as_str()
        .and_then(T::parse)
        .ok_or_else(|| {
            CaseError::InvalidInput(ValidationDetails::new(key, T::expected(), describe(value)))
        })
}

fn bool_field(obj: &Map<String, Value>, key: &str, path: &str) -> CaseResult<bool> {
    let value = required(obj, key, path)?;
    value.as_bool().ok_or_else(|| {
        CaseError::InvalidInput(ValidationDetails::new(path, "boolean", describe(value)))
    })
}

fn change_flags(obj: &Map<String, Value>) -> CaseResult<ChangeFlags> {
    let value = required(obj, "changes", "changes")?;
    let flags_obj = value.as_object().ok_or_else(|| {
        CaseError::InvalidInput(ValidationDetails::new(
            "changes",
            "object with all six change flags",
            describe(value),
        ))
    })?;

    if let Some(extra) = flags_obj
        .keys()
        .find(|k| ChangeFlag::parse(k.as_str()).is_none())
    {
        return Err(CaseError::InvalidInput(ValidationDetails::extra_field(
            format!("changes.{}", extra),
        )));
    }

    let mut flags = ChangeFlags::none();
    for flag in ChangeFlag::all() {
        let path = format!("changes.{}", flag.as_str());
        flags.set(*flag, bool_field(flags_obj, flag.as_str(), &path)?);
    }
    Ok(flags)
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(_) | Value::Object(_) => json_type_name(value).to_string(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
