//! Validation over C strings
//!
//! The input is handed to the parser as raw bytes, so text that is not
//! UTF-8 is reported as malformed JSON rather than as a separate error.

use std::os::raw::c_char;
use voicehealth_schemas::{validate_bytes, ValidationError, ValidationResult};

use crate::memory::c_str_bytes;

/// Validate a NUL-terminated document
///
/// # Safety
/// When non-null, `json_string` must be a valid null-terminated C string
pub unsafe fn validate_c_str(json_string: *const c_char) -> ValidationResult<()> {
    let bytes = c_str_bytes(json_string).ok_or(ValidationError::InputNull)?;
    validate_bytes(bytes)
}
