//! Output formatting and writing utilities
//!
//! Verdicts go to stdout, diagnostics and notices to stderr. In JSON mode
//! each verdict is a single object on stdout that carries its own
//! diagnostic, so stderr stays free for logs.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use voicehealth_schemas::ValidationResult;

/// Machine-readable verdict for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRecord {
    /// 1-based line number in `--lines` mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub valid: bool,
    pub error: Option<&'static str>,
    pub code: Option<&'static str>,
    pub path: Option<&'static str>,
}

impl ValidationRecord {
    /// Build a record from a validation outcome
    pub fn new(line: Option<usize>, outcome: &ValidationResult<()>) -> Self {
        match outcome {
            Ok(()) => Self {
                line,
                valid: true,
                error: None,
                code: None,
                path: None,
            },
            Err(error) => Self {
                line,
                valid: false,
                error: Some(error.message()),
                code: Some(error.code()),
                path: error.path(),
            },
        }
    }
}

/// Output writer that handles the verdict formats
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a writer on stdout and stderr
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            format,
            use_color,
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }

    /// Create an output writer with custom writers
    pub fn with_writers(format: OutputFormat, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color: false,
            out,
            err,
        }
    }

    /// Write a line to stdout
    fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.out, "{}", content)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a line to stderr
    fn ewriteln(&mut self, content: &str) -> Result<()> {
        writeln!(self.err, "{}", content)?;
        self.err.flush()?;
        Ok(())
    }

    /// Report the verdict for one document
    ///
    /// `line` is set in `--lines` mode and prefixes plain diagnostics.
    pub fn verdict(&mut self, line: Option<usize>, outcome: &ValidationResult<()>) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                self.writeln(if outcome.is_ok() { "1" } else { "0" })?;
                if let Err(error) = outcome {
                    let diagnostic = match line {
                        Some(n) => format!("line {}: {}", n, error),
                        None => error.to_string(),
                    };
                    self.ewriteln(&diagnostic)?;
                }
                Ok(())
            }
            OutputFormat::Json => {
                let record = ValidationRecord::new(line, outcome);
                let formatted = serde_json::to_string(&record)?;
                self.writeln(&formatted)
            }
        }
    }

    /// Write a warning message to stderr
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.ewriteln(&message.yellow().to_string())
        } else {
            self.ewriteln(&format!("WARNING: {}", message))
        }
    }

    /// Print a JSON document (the schema) in pretty form
    pub fn document(&mut self, value: &Value) -> Result<()> {
        let formatted = serde_json::to_string_pretty(value)?;
        self.writeln(&formatted)
    }
}
