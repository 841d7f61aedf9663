//! Error handling for FFI boundary
//!
//! This module provides utilities for safely propagating errors
//! across the FFI boundary without panics or undefined behavior.

use std::any::Any;
use std::panic;

use crate::memory::set_last_error;
use crate::types::VoiceHealthResult;

/// Safely execute a closure that might panic
///
/// Any panic is recorded as the last error and reported as
/// [`VoiceHealthResult::InternalError`], preventing unwinding into C.
pub fn catch_panic<F, R>(f: F) -> Result<R, VoiceHealthResult>
where
    F: FnOnce() -> R + panic::UnwindSafe,
{
    panic::catch_unwind(f).map_err(|panic_info| {
        let msg = get_panic_message(&panic_info);
        set_last_error(format!("Panic occurred: {}", msg));
        VoiceHealthResult::InternalError
    })
}

/// Extract a message from panic info
fn get_panic_message(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Macro for safely executing FFI functions that return a result code
#[macro_export]
macro_rules! ffi_boundary {
    ($body:expr) => {{
        match $crate::error::catch_panic(|| $body) {
            Ok(result) => result,
            Err(code) => return code,
        }
    }};
}
