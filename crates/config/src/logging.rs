//! Log output settings.
//!
//! The terminal UI owns stdout, so logs are only written when a file is
//! configured.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Level used when none is configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Where and how verbosely to log.
///
/// `level` is an [`EnvFilter`] directive list: a bare level (`"debug"`),
/// a target (`"todo_tui"`) or a list such as `"warn,todo_protocol=debug"`.
///
/// # Examples
///
/// ```
/// use todo_config::LoggingConfig;
///
/// let logging = LoggingConfig::default();
/// assert!(logging.file.is_none());
/// assert_eq!(logging.level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// File that receives log lines. Logging is off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Filter directive for the subscriber.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Returns `true` when a log file is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Checks that `level` parses as an [`EnvFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`](crate::ConfigError::InvalidLogLevel)
    /// with the parser's reason when it does not.
    pub fn validate(&self) -> crate::Result<()> {
        EnvFilter::try_new(&self.level)
            .map(drop)
            .map_err(|source| crate::ConfigError::InvalidLogLevel {
                level: self.level.clone(),
                source,
            })
    }
}
