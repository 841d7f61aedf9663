//! Validation command handler

use super::utils::{document_lines, read_input};
use crate::cli::InputSource;
use crate::error::{Error, Result, EXIT_INVALID, EXIT_VALID};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use tracing::{debug, info, instrument};
use voicehealth_schemas::{validate_batch, validate_bytes, BatchConfig};

/// Options for a validation run, after merging flags and configuration
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub source: InputSource,
    pub lines: bool,
    pub fail_fast: bool,
    pub max_bytes: u64,
}

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Valid => EXIT_VALID,
            Self::Invalid => EXIT_INVALID,
        }
    }
}

/// Handle a validation run
#[instrument(skip(options, output), fields(source = %options.source.describe(), lines = options.lines))]
pub fn handle_validate(options: &ValidateOptions, output: &mut OutputWriter) -> Result<Verdict> {
    let _timer = Timer::with_details("validate", &options.source.describe());

    let input = read_input(&options.source, options.max_bytes)?;
    debug!(bytes = input.len(), "Input read");

    // Only zero bytes is empty; whitespace is a malformed document
    if input.is_empty() {
        return Err(empty_input(&options.source));
    }

    if options.lines {
        let lines = document_lines(&input);
        if lines.is_empty() {
            return Err(empty_input(&options.source));
        }
        validate_lines(&lines, options.fail_fast, output)
    } else {
        validate_document(&input, output)
    }
}

fn empty_input(source: &InputSource) -> Error {
    Error::EmptyInput {
        origin: source.describe(),
    }
}

fn validate_document(input: &[u8], output: &mut OutputWriter) -> Result<Verdict> {
    let outcome = validate_bytes(input);
    match &outcome {
        Ok(()) => info!("Document is valid"),
        Err(e) => info!(code = e.code(), "Document is invalid"),
    }

    output.verdict(None, &outcome)?;
    Ok(if outcome.is_ok() {
        Verdict::Valid
    } else {
        Verdict::Invalid
    })
}

fn validate_lines(
    lines: &[(usize, &[u8])],
    fail_fast: bool,
    output: &mut OutputWriter,
) -> Result<Verdict> {
    let documents: Vec<&[u8]> = lines.iter().map(|(_, doc)| *doc).collect();

    let config = BatchConfig {
        fail_fast,
        ..BatchConfig::default()
    };
    let report = validate_batch(&documents, &config);

    for (i, (line, _)) in lines.iter().enumerate().take(report.checked) {
        if let Some(outcome) = report.outcome(i) {
            output.verdict(Some(*line), &outcome)?;
        }
    }

    info!(
        checked = report.checked,
        total = report.total,
        invalid = report.errors.len(),
        "Batch validated"
    );

    if report.stopped_early() {
        if let Some((line, _)) = report.checked.checked_sub(1).and_then(|i| lines.get(i)) {
            output.warning(&format!(
                "stopped after line {}; {} document(s) not checked",
                line,
                report.total - report.checked
            ))?;
        }
    }

    Ok(if report.is_valid() {
        Verdict::Valid
    } else {
        Verdict::Invalid
    })
}
