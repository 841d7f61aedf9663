//! FFI-safe type definitions
//!
//! All types in this module are designed to be safely passed across
//! the FFI boundary with C ABI compatibility.

use std::ffi::CStr;
use std::os::raw::c_int;
use voicehealth_schemas::{ValidationError, ValidationResult};

/// Result codes for FFI validation calls
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceHealthResult {
    /// The document is a valid symptom report
    Valid = 0,
    /// The input pointer was null
    InputNull = -1,
    /// The input is not well-formed JSON
    MalformedJson = -2,
    /// The root JSON value is not an object
    RootNotObject = -3,
    /// `symptoms` is missing or not an array
    SymptomsInvalid = -4,
    /// `severity` is missing or not a number
    SeverityInvalid = -5,
    /// `severity` is outside `[0, 10]`
    SeverityOutOfRange = -6,
    /// `potential_triggers` is missing or not an array
    TriggersInvalid = -7,
    /// A panic was caught at the boundary
    InternalError = -9,
}

impl From<ValidationError> for VoiceHealthResult {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::InputNull => Self::InputNull,
            ValidationError::MalformedJson => Self::MalformedJson,
            ValidationError::RootNotObject => Self::RootNotObject,
            ValidationError::SymptomsInvalid => Self::SymptomsInvalid,
            ValidationError::SeverityInvalid => Self::SeverityInvalid,
            ValidationError::SeverityOutOfRange => Self::SeverityOutOfRange,
            ValidationError::TriggersInvalid => Self::TriggersInvalid,
        }
    }
}

impl VoiceHealthResult {
    /// Convert from a validation outcome
    pub fn from_validation(result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => error.into(),
        }
    }

    /// Look up a raw code received from C; unknown values give `None`
    pub fn from_code(code: c_int) -> Option<Self> {
        match code {
            0 => Some(Self::Valid),
            -1 => Some(Self::InputNull),
            -2 => Some(Self::MalformedJson),
            -3 => Some(Self::RootNotObject),
            -4 => Some(Self::SymptomsInvalid),
            -5 => Some(Self::SeverityInvalid),
            -6 => Some(Self::SeverityOutOfRange),
            -7 => Some(Self::TriggersInvalid),
            -9 => Some(Self::InternalError),
            _ => None,
        }
    }

    /// Check if the result indicates a valid document
    pub fn is_success(self) -> bool {
        self == VoiceHealthResult::Valid
    }

    /// Get the diagnostic for this code as a NUL-terminated static string
    pub fn message(self) -> &'static CStr {
        match self {
            Self::Valid => c"Valid",
            Self::InputNull => c"Input string is null",
            Self::MalformedJson => c"Malformed JSON",
            Self::RootNotObject => c"Root must be a JSON object",
            Self::SymptomsInvalid => c"Missing or invalid 'symptoms' (must be array)",
            Self::SeverityInvalid => c"Missing or invalid 'severity' (must be number)",
            Self::SeverityOutOfRange => c"Severity must be between 0 and 10",
            Self::TriggersInvalid => c"Missing or invalid 'potential_triggers' (must be array)",
            Self::InternalError => c"Internal error",
        }
    }
}
