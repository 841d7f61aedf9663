//! Base validation trait
//!
//! Copyright (c) 2025 VoiceHealth Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::ValidationResult;

/// Base trait for schema validators
pub trait SchemaValidator {
    /// The type being validated
    type Input: ?Sized;

    /// Validate the input, stopping at the first failed constraint
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;

    /// Whether the input satisfies every constraint
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// The diagnostic for the first failed constraint, if any
    fn diagnostic(&self, input: &Self::Input) -> Option<&'static str> {
        self.validate(input).err().map(|e| e.message())
    }
}
