//! FFI API function definitions
//!
//! This module contains the extern "C" functions that form
//! the public API of the VoiceHealth FFI layer.

use std::os::raw::{c_char, c_int};

use crate::error::catch_panic;
use crate::ffi_boundary;
use crate::memory::{clear_last_error, set_last_error, write_bounded};
use crate::types::VoiceHealthResult;
use crate::validate::validate_c_str;

/// Validate a symptom report, writing the diagnostic into a caller buffer
///
/// # Parameters
/// - `json_string`: NUL-terminated document; NULL is reported as
///   "Input string is null"
/// - `error_msg`: optional buffer for the diagnostic
/// - `error_size`: capacity of `error_msg` in bytes, terminator included
///
/// # Returns
/// 1 if the document is valid, 0 otherwise. On failure the diagnostic is
/// copied into `error_msg` (truncated and NUL-terminated) when the buffer is
/// non-NULL and `error_size > 0`. On success the buffer is left untouched.
///
/// # Safety
/// - `json_string` must be NULL or a valid null-terminated C string
/// - `error_msg` must be NULL or valid for writes of `error_size` bytes
#[no_mangle]
pub unsafe extern "C" fn validate_voicehealth_json(
    json_string: *const c_char,
    error_msg: *mut c_char,
    error_size: usize,
) -> c_int {
    let code = match catch_panic(move || validate_c_str(json_string)) {
        Ok(result) => VoiceHealthResult::from_validation(result),
        Err(code) => code,
    };

    if code.is_success() {
        return 1;
    }

    if let Ok(message) = code.message().to_str() {
        write_bounded(message, error_msg, error_size);
    }
    0
}

/// Validate a symptom report and return a result code
///
/// On failure the diagnostic is also available from
/// `voicehealth_get_last_error` on the calling thread.
///
/// # Safety
/// `json_string` must be NULL or a valid null-terminated C string
#[no_mangle]
pub unsafe extern "C" fn voicehealth_validate(json_string: *const c_char) -> VoiceHealthResult {
    clear_last_error();

    let result = ffi_boundary!(validate_c_str(json_string));

    match result {
        Ok(()) => VoiceHealthResult::Valid,
        Err(error) => {
            set_last_error(error.message());
            error.into()
        }
    }
}

/// Get the static diagnostic for a result code
///
/// Values that are not a `VoiceHealthResult` give "Internal error".
///
/// # Safety
/// The returned string should NOT be freed
#[no_mangle]
pub unsafe extern "C" fn voicehealth_result_message(code: c_int) -> *const c_char {
    VoiceHealthResult::from_code(code)
        .unwrap_or(VoiceHealthResult::InternalError)
        .message()
        .as_ptr()
}

/// Get version information
///
/// # Returns
/// A static string containing version information
///
/// # Safety
/// The returned string should NOT be freed
#[no_mangle]
pub unsafe extern "C" fn voicehealth_version() -> *const c_char {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
