//! Logging setup for AI4DM front ends.
//!
//! Logs go to stderr so that reports printed to stdout stay machine
//! readable. The `AI4DM_LOG` environment variable accepts a full
//! `tracing-subscriber` filter directive (`ai4dm_core=trace,warn`) and is
//! used when no verbosity flag was given.

use tracing_subscriber::EnvFilter;

use crate::Result;
use crate::error::QualityError;

/// Environment variable holding a filter directive.
pub const LOG_ENV_VAR: &str = "AI4DM_LOG";

/// Maps CLI verbosity flags to a tracing level.
///
/// `quiet` wins over any verbosity count.
pub fn level_for(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::INFO,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    }
}

/// Chooses the filter directive: explicit flags, then the environment,
/// then INFO.
fn directive_for(verbose: u8, quiet: bool, env_directive: Option<&str>) -> String {
    match env_directive.map(str::trim) {
        Some(directive) if !directive.is_empty() && verbose == 0 && !quiet => {
            directive.to_string()
        }
        _ => level_for(verbose, quiet).as_str().to_lowercase(),
    }
}

/// Initializes structured logging.
///
/// # Arguments
/// * `verbose` - Verbosity level (0=INFO, 1=DEBUG, 2+=TRACE)
/// * `quiet` - If true, only show ERROR level logs
///
/// # Errors
/// Returns [`QualityError::Configuration`] if the filter directive is
/// malformed or a global subscriber is already installed.
///
/// # Example
/// ```rust,no_run
/// use ai4dm_core::logging::init_logging;
///
/// // Initialize at DEBUG level
/// init_logging(1, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let env_directive = std::env::var(LOG_ENV_VAR).ok();
    let directive = directive_for(verbose, quiet, env_directive.as_deref());

    let filter = EnvFilter::try_new(&directive).map_err(|e| {
        QualityError::configuration(format!("Invalid log filter '{}': {}", directive, e))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| {
            QualityError::configuration(format!("Failed to initialize logging: {}", e))
        })?;

    Ok(())
}
