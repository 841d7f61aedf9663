//! VoiceHealth validator CLI
//!
//! Reads a symptom report from stdin or a file, prints `1` when it is valid
//! and `0` when it is not. See `voicehealth-validate --help`.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use config::Config;
use error::{Result, EXIT_RUNTIME, EXIT_VALID};
use handlers::ValidateOptions;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Logging is configured from the file, so load it first
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error::format_error(&e, cli.use_color()));
            process::exit(EXIT_RUNTIME);
        }
    };

    // Set up colored output
    control::set_override(cli.use_color() && config.output.color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(&cli, &config) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic, returns the process exit code
#[instrument(skip_all)]
fn run(cli: &Cli, config: &Config) -> Result<i32> {
    let _timer = Timer::new("cli_execution");

    let format = cli.output.unwrap_or(config.output.format);
    let mut output = OutputWriter::new(format, control::SHOULD_COLORIZE.should_colorize());

    if cli.print_schema {
        handlers::handle_print_schema(&mut output)?;
        return Ok(EXIT_VALID);
    }

    let options = ValidateOptions {
        source: cli.input_source(),
        lines: cli.lines,
        fail_fast: cli.fail_fast,
        max_bytes: cli.max_bytes.unwrap_or(config.limits.max_input_bytes),
    };

    tracing::info!(
        source = %options.source.describe(),
        format = ?format,
        max_bytes = options.max_bytes,
        "Validating"
    );

    let verdict = handlers::handle_validate(&options, &mut output)?;
    Ok(verdict.exit_code())
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();

    // Create logging configuration from CLI args, the config file and environment
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);
    logging_config.apply_file_settings(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
