//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve log level and log directory for frontends (CLI, FFI).
//! - Keep defaults in one place.
//!
//! # Invariants
//! - Empty or whitespace-only variables fall back to defaults.
//! - An unknown level is an error, never silently replaced.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "todo-logs";

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a case-insensitive level name; `warning` is accepted for `warn`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `debug` for debug builds, `info` for release builds.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel { variable: &'static str, value: String },
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel { variable, value } => write!(
                f,
                "{variable}=`{value}` is not a log level; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => {
                write!(f, "log directory must be absolute, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by every frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::build_default(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl AppConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(LOG_LEVEL_ENV)) {
            config.log_level =
                LogLevel::parse(&raw).ok_or_else(|| ConfigError::InvalidLogLevel {
                    variable: LOG_LEVEL_ENV,
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = non_empty(lookup(LOG_DIR_ENV)) {
            let path = PathBuf::from(raw);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(path));
            }
            config.log_dir = path;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, LogLevel, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_and_blank_values_use_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "  ")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (LOG_LEVEL_ENV, "Warning"),
            (LOG_DIR_ENV, "/var/log/todo"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/todo"));
    }

    #[test]
    fn invalid_level_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "loud")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidLogLevel {
                variable: LOG_LEVEL_ENV,
                value: "loud".to_string(),
            }
        );
    }

    #[test]
    fn relative_log_dir_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[(LOG_DIR_ENV, "logs")])).unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir(PathBuf::from("logs")));
    }
}
