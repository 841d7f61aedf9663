//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// VoiceHealth validator - check a symptom report before it is stored
///
/// Reads a JSON document from standard input (or FILE), prints `1` if it is
/// a valid symptom report and `0` otherwise. The reason for a rejection is
/// written to standard error.
///
/// Exit codes: 0 = valid, 1 = invalid, 2 = usage or runtime error.
#[derive(Parser, Debug)]
#[command(
    name = "voicehealth-validate",
    version,
    author,
    about,
    long_about = None
)]
pub struct Cli {
    /// Document to validate; standard input is read when omitted or "-"
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Validate every non-blank line as a separate document
    #[arg(short, long)]
    pub lines: bool,

    /// Stop at the first invalid line
    #[arg(long, requires = "lines")]
    pub fail_fast: bool,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "VOICEHEALTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Reject inputs larger than this many bytes (0 disables the limit)
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Print the symptom report JSON Schema and exit
    #[arg(long, conflicts_with_all = ["input", "lines"])]
    pub print_schema: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `1` or `0` per document, diagnostics on stderr
    #[default]
    Plain,
    /// One JSON object per document
    Json,
}

/// Where the document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interpret the positional argument; absent or `-` means stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Short description for messages
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }

    /// Where to read the document from
    pub fn input_source(&self) -> InputSource {
        InputSource::from_arg(self.input.as_deref())
    }
}
