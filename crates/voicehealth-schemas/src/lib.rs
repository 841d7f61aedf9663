//! VoiceHealth Schemas - symptom report validation
//!
//! This crate checks that a blob of text is a well-formed JSON symptom
//! report before it is persisted:
//! - **symptoms**: required array
//! - **severity**: required number in `[0, 10]` (inclusive, fractions allowed)
//! - **potential_triggers**: required array
//!
//! Additional members are allowed and ignored.
//!
//! ## Quick Start
//!
//! ```rust
//! use voicehealth_schemas::{validate_str, ValidationError};
//!
//! let report = r#"{"symptoms":["headache"],"severity":7,"potential_triggers":["caffeine"]}"#;
//! assert!(validate_str(report).is_ok());
//!
//! match validate_str(r#"{"symptoms":["pain"],"severity":11,"potential_triggers":[]}"#) {
//!     Ok(()) => println!("Valid report"),
//!     Err(e) => assert_eq!(e.to_string(), "Severity must be between 0 and 10"),
//! }
//! ```
//!
//! ## Error Reporting
//!
//! Checks run in a fixed order and only the first failure is reported:
//! null input, JSON syntax, root type, `symptoms`, `severity` type,
//! `severity` range, `potential_triggers`. Each failure is a
//! [`ValidationError`] whose `Display` output is a fixed diagnostic string.
//!
//! Copyright (c) 2025 VoiceHealth Team
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    parse_symptom_report, symptom_report_schema, validate, validate_batch, validate_bytes,
    validate_str, validate_value, BatchConfig, BatchReport, DocumentError, SchemaValidator,
    SymptomReport, SymptomReportValidator, ValidationError, ValidationErrors, ValidationResult,
    SCHEMA_ID, SEVERITY_FIELD, SEVERITY_MAX, SEVERITY_MIN, SYMPTOMS_FIELD, TRIGGERS_FIELD,
};
