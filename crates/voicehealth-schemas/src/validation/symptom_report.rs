//! Symptom report validation
//!
//! A symptom report is a JSON object with three required members:
//! `symptoms` (array), `severity` (number in `[0, 10]`) and
//! `potential_triggers` (array). Other members are ignored.
//!
//! Checks run in a fixed order and stop at the first failure, so a document
//! with several problems always reports the same one.
//!
//! Copyright (c) 2025 VoiceHealth Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::SchemaValidator;
use crate::validation::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Name of the symptoms array member
pub const SYMPTOMS_FIELD: &str = "symptoms";
/// Name of the severity member
pub const SEVERITY_FIELD: &str = "severity";
/// Name of the potential triggers array member
pub const TRIGGERS_FIELD: &str = "potential_triggers";

/// Lowest accepted severity (inclusive)
pub const SEVERITY_MIN: f64 = 0.0;
/// Highest accepted severity (inclusive)
pub const SEVERITY_MAX: f64 = 10.0;

/// Validate raw input that may be absent.
///
/// `None` is reported as [`ValidationError::InputNull`]; empty text is not
/// JSON and is reported as [`ValidationError::MalformedJson`].
///
/// # Examples
///
/// ```rust
/// use voicehealth_schemas::{validate, ValidationError};
///
/// assert!(validate(Some(r#"{"symptoms":[],"severity":0,"potential_triggers":[]}"#)).is_ok());
/// assert_eq!(validate(None), Err(ValidationError::InputNull));
/// assert_eq!(validate(Some("")), Err(ValidationError::MalformedJson));
/// ```
pub fn validate(input: Option<&str>) -> ValidationResult<()> {
    let input = input.ok_or(ValidationError::InputNull)?;
    validate_str(input)
}

/// Validate a text document
pub fn validate_str(input: &str) -> ValidationResult<()> {
    let root = parse(input)?;
    validate_value(&root)
}

/// Validate a byte document. Bytes that are not UTF-8 fail to parse.
pub fn validate_bytes(input: &[u8]) -> ValidationResult<()> {
    let root: Value = serde_json::from_slice(input).map_err(|_| ValidationError::MalformedJson)?;
    validate_value(&root)
}

/// Run the structural and field checks on an already parsed value
pub fn validate_value(root: &Value) -> ValidationResult<()> {
    let report = root.as_object().ok_or(ValidationError::RootNotObject)?;

    if !report.get(SYMPTOMS_FIELD).is_some_and(Value::is_array) {
        return Err(ValidationError::SymptomsInvalid);
    }

    let severity = report
        .get(SEVERITY_FIELD)
        .and_then(number_value)
        .ok_or(ValidationError::SeverityInvalid)?;

    if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&severity) {
        return Err(ValidationError::SeverityOutOfRange);
    }

    if !report.get(TRIGGERS_FIELD).is_some_and(Value::is_array) {
        return Err(ValidationError::TriggersInvalid);
    }

    Ok(())
}

/// Read a JSON number as f64. Booleans are not numbers.
///
/// Literals beyond the f64 range read as infinities rather than failing,
/// so `1e400` is a number that is out of range.
fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().or_else(|| n.to_string().parse().ok()),
        _ => None,
    }
}

/// Validate a document and return its typed view
pub fn parse_symptom_report(input: &str) -> ValidationResult<SymptomReport> {
    let root = parse(input)?;
    validate_value(&root)?;
    serde_json::from_value(root).map_err(|_| ValidationError::MalformedJson)
}

fn parse(input: &str) -> ValidationResult<Value> {
    serde_json::from_str(input).map_err(|_| ValidationError::MalformedJson)
}

/// Typed view of a validated symptom report.
///
/// Array elements are kept as raw JSON since the schema does not constrain them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomReport {
    /// Reported symptoms
    pub symptoms: Vec<Value>,
    /// Severity in `[0, 10]`, not necessarily integral
    pub severity: f64,
    /// Suspected triggers
    pub potential_triggers: Vec<Value>,
}

impl FromStr for SymptomReport {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symptom_report(s)
    }
}

/// Validator for symptom report text
#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomReportValidator;

impl SymptomReportValidator {
    /// Create a validator
    pub fn new() -> Self {
        Self
    }

    /// Validate input that may be absent
    pub fn validate_optional(&self, input: Option<&str>) -> ValidationResult<()> {
        validate(input)
    }

    /// Validate a byte document
    pub fn validate_bytes(&self, input: &[u8]) -> ValidationResult<()> {
        validate_bytes(input)
    }

    /// Validate an already parsed value
    pub fn validate_value(&self, root: &Value) -> ValidationResult<()> {
        validate_value(root)
    }
}

impl SchemaValidator for SymptomReportValidator {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        validate_str(input)
    }
}
