//! Log subscriber setup.
//!
//! The terminal UI draws on stdout, so log lines only go to a file. When no
//! file is configured no subscriber is installed and events are discarded.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use todo_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// Returns `true` if a subscriber was installed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the level directive
/// does not parse, or a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level {:?}", config.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

    Ok(true)
}
