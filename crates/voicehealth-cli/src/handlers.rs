//! Command handlers
//!
//! This module contains the logic behind each thing the CLI can do.

mod utils;
mod validate;

pub use validate::{handle_validate, ValidateOptions, Verdict};

use crate::error::Result;
use crate::output::OutputWriter;
use tracing::debug;
use voicehealth_schemas::symptom_report_schema;

/// Handle `--print-schema`
pub fn handle_print_schema(output: &mut OutputWriter) -> Result<()> {
    debug!("Printing symptom report schema");
    output.document(&symptom_report_schema())
}
