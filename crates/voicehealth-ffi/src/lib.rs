//! VoiceHealth FFI - C ABI for the symptom report validator
//!
//! This crate exposes the validator to C and to anything that can call C:
//! - `validate_voicehealth_json`: 1/0 result with the diagnostic copied into
//!   a caller-owned, fixed-size buffer
//! - `voicehealth_validate`: a result code per outcome, with the diagnostic
//!   kept in a thread-local last-error slot
//!
//! A C header is generated into `include/voicehealth.h` at build time.
//!
//! # Safety
//!
//! All FFI functions are marked `unsafe` as they deal with raw pointers
//! and cross-language boundaries. Users must ensure:
//! - Input strings are NULL or valid and null-terminated
//! - Message buffers are valid for the capacity they pass
//! - Strings returned by the library are never freed

#![warn(missing_docs)]

#[macro_use]
mod error;
mod api;
mod memory;
mod types;
mod validate;

// Re-export public API
pub use api::*;
pub use memory::{voicehealth_clear_error, voicehealth_get_last_error};
pub use types::VoiceHealthResult;
