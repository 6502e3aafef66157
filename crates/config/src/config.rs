//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the todo-board application.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::transitions::TransitionConfig;

/// The main configuration struct for the todo-board application.
///
/// Every field has a default, so an empty file (`{}`) is a valid config.
///
/// # Examples
///
/// ```
/// use todo_config::{Config, TransitionConfig};
///
/// let config = Config::default();
/// assert!(config.seed_sample_tasks);
///
/// let config = Config {
///     seed_sample_tasks: false,
///     transitions: TransitionConfig::instant(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether a fresh board starts with one example task per column.
    #[serde(default = "default_seed_sample_tasks")]
    pub seed_sample_tasks: bool,

    /// Form modal open/close delays.
    #[serde(default)]
    pub transitions: TransitionConfig,

    /// Log file and level.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_seed_sample_tasks() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_tasks: default_seed_sample_tasks(),
            transitions: TransitionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Uses the first file found by
    /// [`find_config_file`](crate::persistence::find_config_file), or the
    /// defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use todo_config::Config;
    ///
    /// # async fn example() -> todo_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("exit delay: {:?}", config.transitions.exit());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// values it holds are invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_config::{Config, TransitionConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.transitions = TransitionConfig { enter_ms: 20, exit_ms: 60_000 };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.transitions.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
