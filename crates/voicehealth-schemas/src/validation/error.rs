//! Validation error types for symptom report documents
//!
//! Copyright (c) 2025 VoiceHealth Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The first schema constraint a document failed.
///
/// The `Display` output of every variant is a fixed diagnostic string that
/// existing callers match on verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// No input was supplied at all (distinct from empty text)
    InputNull,
    /// The input is not a single well-formed JSON value
    MalformedJson,
    /// The root value parsed but is not an object
    RootNotObject,
    /// `symptoms` is missing or not an array
    SymptomsInvalid,
    /// `severity` is missing or not a number
    SeverityInvalid,
    /// `severity` is a number outside `[0, 10]`
    SeverityOutOfRange,
    /// `potential_triggers` is missing or not an array
    TriggersInvalid,
}

impl ValidationError {
    /// Every failure kind, in the order the checks run
    pub const ALL: [ValidationError; 7] = [
        ValidationError::InputNull,
        ValidationError::MalformedJson,
        ValidationError::RootNotObject,
        ValidationError::SymptomsInvalid,
        ValidationError::SeverityInvalid,
        ValidationError::SeverityOutOfRange,
        ValidationError::TriggersInvalid,
    ];

    /// The human-readable diagnostic for this failure
    pub fn message(&self) -> &'static str {
        match self {
            Self::InputNull => "Input string is null",
            Self::MalformedJson => "Malformed JSON",
            Self::RootNotObject => "Root must be a JSON object",
            Self::SymptomsInvalid => "Missing or invalid 'symptoms' (must be array)",
            Self::SeverityInvalid => "Missing or invalid 'severity' (must be number)",
            Self::SeverityOutOfRange => "Severity must be between 0 and 10",
            Self::TriggersInvalid => "Missing or invalid 'potential_triggers' (must be array)",
        }
    }

    /// Stable machine-readable identifier, identical to the serde form
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputNull => "input_null",
            Self::MalformedJson => "malformed_json",
            Self::RootNotObject => "root_not_object",
            Self::SymptomsInvalid => "symptoms_invalid",
            Self::SeverityInvalid => "severity_invalid",
            Self::SeverityOutOfRange => "severity_out_of_range",
            Self::TriggersInvalid => "triggers_invalid",
        }
    }

    /// JSON path of the offending value, if the input got far enough to have one
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::InputNull => None,
            Self::MalformedJson | Self::RootNotObject => Some("$"),
            Self::SymptomsInvalid => Some("$.symptoms"),
            Self::SeverityInvalid | Self::SeverityOutOfRange => Some("$.severity"),
            Self::TriggersInvalid => Some("$.potential_triggers"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation failure tied to the position of its document in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentError {
    /// Zero-based index of the document
    pub index: usize,
    /// First constraint the document failed
    pub error: ValidationError,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "document {}: {}", self.index, self.error)
    }
}

/// Multiple validation errors that can occur during batch validation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// Failures in the order their documents appeared
    pub errors: Vec<DocumentError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record the failure of the document at `index`
    pub fn add(&mut self, index: usize, error: ValidationError) {
        self.errors.push(DocumentError { index, error });
    }

    /// Look up the failure recorded for a document, if any
    pub fn get(&self, index: usize) -> Option<ValidationError> {
        self.errors
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.error)
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over recorded failures
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentError> {
        self.errors.iter()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DocumentError> for ValidationErrors {
    fn from(error: DocumentError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
