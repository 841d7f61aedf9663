//! Validation module for symptom report documents
//!
//! Single documents go through [`validate`] and friends; several documents
//! at once go through [`validate_batch`], which applies a [`BatchConfig`]
//! to decide when to stop collecting failures.
//!
//! Copyright (c) 2025 VoiceHealth Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod schema;
pub mod symptom_report;

// Re-export commonly used types
pub use base::SchemaValidator;
pub use error::{DocumentError, ValidationError, ValidationErrors, ValidationResult};
pub use schema::{symptom_report_schema, SCHEMA_ID};
pub use symptom_report::{
    parse_symptom_report, validate, validate_bytes, validate_str, validate_value, SymptomReport,
    SymptomReportValidator, SEVERITY_FIELD, SEVERITY_MAX, SEVERITY_MIN, SYMPTOMS_FIELD,
    TRIGGERS_FIELD,
};

/// Validation configuration for batch operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Whether to stop on first error or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl BatchConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Outcome of validating a batch of documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of documents examined before the batch finished or stopped
    pub checked: usize,
    /// Total number of documents submitted
    pub total: usize,
    /// Failures among the examined documents
    pub errors: ValidationErrors,
}

impl BatchReport {
    /// True when every submitted document was examined and passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.checked == self.total
    }

    /// True when the batch stopped before examining every document
    pub fn stopped_early(&self) -> bool {
        self.checked < self.total
    }

    /// Result for one document, `None` if it was never examined
    pub fn outcome(&self, index: usize) -> Option<ValidationResult<()>> {
        if index >= self.checked {
            return None;
        }
        Some(match self.errors.get(index) {
            Some(error) => Err(error),
            None => Ok(()),
        })
    }

    /// Convert to result - Ok if no document failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }
}

/// Batch validation for multiple symptom report documents
///
/// Documents may be text or raw bytes; bytes that are not UTF-8 fail as
/// malformed JSON.
pub fn validate_batch<S: AsRef<[u8]>>(documents: &[S], config: &BatchConfig) -> BatchReport {
    let mut errors = ValidationErrors::new();
    let mut checked = 0;

    for (i, document) in documents.iter().enumerate() {
        checked += 1;
        if let Err(error) = validate_bytes(document.as_ref()) {
            errors.add(i, error);

            if config.fail_fast {
                break;
            }

            if config.max_errors > 0 && errors.len() >= config.max_errors {
                break;
            }
        }
    }

    BatchReport {
        checked,
        total: documents.len(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"symptoms":["cough"],"severity":4,"potential_triggers":["dust"]}"#;
    const BAD_JSON: &str = "{ invalid json }";
    const NO_TRIGGERS: &str = r#"{"symptoms":[],"severity":4}"#;

    #[test]
    fn test_batch_config_builders() {
        let config = BatchConfig::default();
        assert!(!config.fail_fast);
        assert_eq!(config.max_errors, 0);

        let config = BatchConfig::default().with_fail_fast().with_max_errors(5);
        assert!(config.fail_fast);
        assert_eq!(config.max_errors, 5);
    }

    #[test]
    fn test_batch_collects_all_errors() {
        let docs = [VALID, BAD_JSON, VALID, NO_TRIGGERS];
        let report = validate_batch(&docs, &BatchConfig::default());

        assert_eq!(report.checked, 4);
        assert!(!report.stopped_early());
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.outcome(0), Some(Ok(())));
        assert_eq!(report.outcome(1), Some(Err(ValidationError::MalformedJson)));
        assert_eq!(report.outcome(3), Some(Err(ValidationError::TriggersInvalid)));
        assert_eq!(report.outcome(4), None);
    }

    #[test]
    fn test_batch_fail_fast() {
        let docs = [VALID, BAD_JSON, NO_TRIGGERS];
        let report = validate_batch(&docs, &BatchConfig::default().with_fail_fast());

        assert_eq!(report.checked, 2);
        assert!(report.stopped_early());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.outcome(2), None);
    }

    #[test]
    fn test_batch_max_errors() {
        let docs = [BAD_JSON, NO_TRIGGERS, BAD_JSON, VALID];
        let report = validate_batch(&docs, &BatchConfig::default().with_max_errors(2));

        assert_eq!(report.checked, 2);
        assert_eq!(report.errors.len(), 2);
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_batch_of_byte_lines() {
        let input = b"{\"symptoms\":[],\"severity\":1,\"potential_triggers\":[]}\n[]";
        let lines: Vec<&[u8]> = input.split(|&b| b == b'\n').collect();
        let report = validate_batch(&lines, &BatchConfig::default());
        assert_eq!(report.outcome(0), Some(Ok(())));
        assert_eq!(report.outcome(1), Some(Err(ValidationError::RootNotObject)));
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let docs: [&str; 0] = [];
        let report = validate_batch(&docs, &BatchConfig::default());
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }
}
