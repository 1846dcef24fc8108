//! Runtime configuration
//!
//! Settings come from defaults overridden by environment variables; the
//! command line may override the log level afterwards.
//!
//! | variable                          | effect                                  |
//! |-----------------------------------|-----------------------------------------|
//! | `RXVC_LOG_LEVEL`                  | log level (`error` .. `trace`, `off`)   |
//! | `RXVC_DISCOVERY_RETRY`            | `0`/`false` gives up after one attempt  |
//! | `RXVC_DISCOVERY_RETRY_DELAY_SECS` | pause between discovery attempts        |
//! | `RXVC_DISCOVERY_ATTEMPTS`         | discovery attempts before giving up     |
//! | `NO_COLOR`                        | disables coloured error output          |

use std::time::Duration;

use crate::session::RetryPolicy;

/// Log levels accepted by `--log-level` and `RXVC_LOG_LEVEL`
pub const VALID_LOG_LEVELS: [&str; 6] = ["error", "warn", "info", "debug", "trace", "off"];

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid log level '{value}'. Valid values are: {}", VALID_LOG_LEVELS.join(", "))]
    InvalidLogLevel { value: String },

    #[error("Invalid value '{value}' for {variable}")]
    InvalidValue { variable: String, value: String },
}

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Validated, lower-cased log level. `None` defers to `RUST_LOG`.
    pub log_level: Option<String>,
    /// How hard to look for a receiver before giving up
    pub retry: RetryPolicy,
    /// Colour error-styled output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            retry: RetryPolicy::default(),
            color: true,
        }
    }
}

impl Config {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = lookup("RXVC_LOG_LEVEL") {
            config.log_level = Some(validate_log_level(&level)?);
        }

        let retry_enabled = match lookup("RXVC_DISCOVERY_RETRY") {
            Some(value) => parse_flag("RXVC_DISCOVERY_RETRY", &value)?,
            None => true,
        };
        if let Some(value) = lookup("RXVC_DISCOVERY_ATTEMPTS") {
            config.retry.max_attempts = parse_number("RXVC_DISCOVERY_ATTEMPTS", &value)?.max(1);
        }
        if let Some(value) = lookup("RXVC_DISCOVERY_RETRY_DELAY_SECS") {
            config.retry.delay = Duration::from_secs(parse_number("RXVC_DISCOVERY_RETRY_DELAY_SECS", &value)?.into());
        }
        if !retry_enabled {
            config.retry = RetryPolicy::none();
        }

        config.color = lookup("NO_COLOR").map_or(true, |v| v.is_empty());

        Ok(config)
    }

    /// Replace the log level, validating it first
    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = Some(validate_log_level(level)?);
        Ok(self)
    }
}

/// Check a log level name, case-insensitively, and return it lower-cased
pub fn validate_log_level(level: &str) -> Result<String, ConfigError> {
    let level = level.trim().to_lowercase();
    if VALID_LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ConfigError::InvalidLogLevel { value: level })
    }
}

fn parse_flag(variable: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(variable, value)),
    }
}

fn parse_number(variable: &str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| invalid(variable, value))
}

fn invalid(variable: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        variable: variable.to_string(),
        value: value.to_string(),
    }
}
