//! Logging for the VoiceHealth CLI
//!
//! Standard output carries the validation verdict, so every log line goes
//! to stderr. Only sizes, sources and outcome codes are logged, never the
//! document itself.

use crate::config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use tracing::{field, Span};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Request ID shared by every log line of this process
static REQUEST_ID: OnceLock<String> = OnceLock::new();

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `voicehealth_cli=debug`
    pub level: String,
    pub format: LogFormat,
    /// When false no subscriber is installed
    pub console: bool,
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Log span close events with their timing
    pub span_events: bool,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Full,
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "full" => Some(Self::Full),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_verbosity(0)
    }
}

impl LoggingConfig {
    /// Settings for a `-v` count
    ///
    /// 0 is warn, 1 info, 2 debug with source locations, 3 and above
    /// trace with thread ids and span timing in the full format.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let very_verbose = verbosity >= 3;

        Self {
            level: level.to_string(),
            format: if very_verbose {
                LogFormat::Full
            } else {
                LogFormat::Compact
            },
            console: true,
            thread_ids: very_verbose,
            source_location: verbosity >= 2,
            span_events: very_verbose,
        }
    }

    /// Apply the `logging` section of the configuration file
    ///
    /// The file level is only used when no `-v` flag was given, and the
    /// format only when the file sets one.
    pub fn apply_file_settings(&mut self, settings: &config::LoggingConfig, verbosity: u8) {
        if verbosity == 0 {
            self.level = settings.level.clone();
        }
        if let Some(format) = &settings.format {
            self.set_format(format);
        }
    }

    /// Apply `RUST_LOG`, `VOICEHEALTH_LOG_FORMAT` and `VOICEHEALTH_LOG_CONSOLE`
    pub fn merge_with_env(&mut self) {
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        if let Ok(format) = std::env::var("VOICEHEALTH_LOG_FORMAT") {
            self.set_format(&format);
        }

        if let Ok(console) = std::env::var("VOICEHEALTH_LOG_CONSOLE") {
            self.console = console.eq_ignore_ascii_case("true") || console == "1";
        }
    }

    fn set_format(&mut self, name: &str) {
        match LogFormat::parse(name) {
            Some(format) => self.format = format,
            // Logging is not up yet
            None => eprintln!("Warning: Invalid log format: {}, using default", name),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber and assign the request ID
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    if !config.console {
        return Ok(());
    }

    let ansi = io::stderr().is_terminal();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(&config)?)
        .with_writer(io::stderr)
        .with_thread_ids(config.thread_ids)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_span_events(config.span_events());

    let installed = match config.format {
        LogFormat::Compact => builder.with_ansi(ansi).compact().try_init(),
        LogFormat::Full => builder.with_ansi(ansi).try_init(),
        LogFormat::Json => builder.with_ansi(false).json().try_init(),
    };
    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;

    let request_id = REQUEST_ID.get_or_init(generate_request_id);
    tracing::debug!(request_id = %request_id, config = ?config, "Logging initialized");

    Ok(())
}

fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// A fresh `req_<uuid>` identifier
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// The request ID, once logging is initialized
pub fn current_request_id() -> Option<&'static str> {
    REQUEST_ID.get().map(String::as_str)
}

/// Span for one operation, tagged with the request ID
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        request_id = current_request_id().unwrap_or("unknown"),
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// Records the duration of an operation when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: &'static str,
    }

    impl Timer {
        pub fn new(operation: &'static str) -> Self {
            Self::start(operation, None)
        }

        pub fn with_details(operation: &'static str, details: &str) -> Self {
            Self::start(operation, Some(details))
        }

        fn start(operation: &'static str, details: Option<&str>) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, details),
                operation,
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration_ms = self.start.elapsed().as_millis() as u64;
            self.span.record("duration_ms", duration_ms);
            tracing::debug!(operation = self.operation, duration_ms, "Operation completed");
        }
    }
}
