//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//!
//! Command-line flags override whatever is loaded here.

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cap on input size: 1 MiB
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input limits
    pub limits: LimitsConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Input limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted input in bytes (0 = unlimited)
    pub max_input_bytes: u64,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored error output when attached to a terminal
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json); unset keeps the verbosity default
    pub format: Option<String>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "configuration file {} does not exist",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        // Logging is configured from this file, so it is not up yet.
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".voicehealth.yaml"),
            PathBuf::from(".voicehealth.json"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("voicehealth");
            paths.push(app_dir.join("config.yaml"));
            paths.push(app_dir.join("config.json"));
        }

        paths
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.limits.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(config.output.color);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_yaml_partial() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "limits:\n  max_input_bytes: 2048\noutput:\n  format: json").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.limits.max_input_bytes, 2048);
        assert_eq!(config.output.format, OutputFormat::Json);
        // Unspecified sections keep their defaults
        assert!(config.output.color);
        assert_eq!(config.logging.format, None);
    }

    #[test]
    fn test_load_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"logging": {{"level": "debug"}}, "output": {{"color": false}}}}"#).unwrap();

        let config = Config::load_with_file(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.output.color);
        assert_eq!(config.limits.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::from_file(Path::new("/nonexistent/voicehealth.yaml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
