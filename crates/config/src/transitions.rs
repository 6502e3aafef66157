//! Modal transition timing.
//!
//! The task form fades in and out. [`TransitionConfig`] holds the two
//! delays: how long the form stays in its opening phase before it accepts
//! input, and how long it keeps rendering after a close request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default entry delay in milliseconds.
pub const DEFAULT_ENTER_MS: u64 = 20;

/// Default exit delay in milliseconds.
pub const DEFAULT_EXIT_MS: u64 = 180;

/// Upper bound for either delay, in milliseconds.
pub const MAX_TRANSITION_MS: u64 = 2000;

/// Delays driving the form modal's open and close phases.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use todo_config::TransitionConfig;
///
/// let transitions = TransitionConfig::default();
/// assert_eq!(transitions.enter(), Duration::from_millis(20));
/// assert_eq!(transitions.exit(), Duration::from_millis(180));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Time between a form being opened and it becoming interactive.
    #[serde(default = "default_enter_ms")]
    pub enter_ms: u64,

    /// Time a closing form keeps rendering before it is unmounted.
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
}

fn default_enter_ms() -> u64 {
    DEFAULT_ENTER_MS
}

fn default_exit_ms() -> u64 {
    DEFAULT_EXIT_MS
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter_ms: DEFAULT_ENTER_MS,
            exit_ms: DEFAULT_EXIT_MS,
        }
    }
}

impl TransitionConfig {
    /// Disables both delays; the form opens and closes on the next tick.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            enter_ms: 0,
            exit_ms: 0,
        }
    }

    /// Returns the entry delay.
    #[must_use]
    pub const fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    /// Returns the exit delay.
    #[must_use]
    pub const fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Checks both delays against [`MAX_TRANSITION_MS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTransition`](crate::ConfigError::InvalidTransition)
    /// naming the first delay that is too long.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_config::TransitionConfig;
    ///
    /// let ok = TransitionConfig { enter_ms: 0, exit_ms: 2000 };
    /// assert!(ok.validate().is_ok());
    ///
    /// let too_slow = TransitionConfig { enter_ms: 5000, exit_ms: 180 };
    /// assert!(too_slow.validate().is_err());
    /// ```
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [("enter", self.enter_ms), ("exit", self.exit_ms)] {
            if value > MAX_TRANSITION_MS {
                return Err(crate::ConfigError::InvalidTransition {
                    name,
                    reason: format!("{value} ms exceeds maximum of {MAX_TRANSITION_MS} ms"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = TransitionConfig::default();
        assert_eq!(config.enter_ms, DEFAULT_ENTER_MS);
        assert_eq!(config.exit_ms, DEFAULT_EXIT_MS);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: TransitionConfig = serde_json::from_str(r#"{"exit_ms": 50}"#).unwrap();
        assert_eq!(config.enter_ms, DEFAULT_ENTER_MS);
        assert_eq!(config.exit_ms, 50);
    }

    #[test]
    fn instant_is_zero() {
        let config = TransitionConfig::instant();
        assert_eq!(config.enter(), Duration::ZERO);
        assert_eq!(config.exit(), Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_at_boundary() {
        let config = TransitionConfig {
            enter_ms: MAX_TRANSITION_MS,
            exit_ms: MAX_TRANSITION_MS,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_names_offending_delay() {
        let config = TransitionConfig {
            enter_ms: 20,
            exit_ms: MAX_TRANSITION_MS + 1,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid exit transition delay: 2001 ms exceeds maximum of 2000 ms"
        );
    }
}
