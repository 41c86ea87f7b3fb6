//! Host configuration read from the environment.
//!
//! # Invariants
//! - Blank values fall back to defaults.
//! - A configured log directory is always absolute.

use crate::logging::{default_log_level, normalize_level, LoggingConfig};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "DRAGBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "DRAGBOARD_LOG_DIR";
pub const ENV_HOST_ID: &str = "DRAGBOARD_HOST_ID";
pub const DEFAULT_HOST_ID: &str = "app";

/// Settings the application assembly needs before mounting the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// Element id of the container the board mounts into.
    pub host_id: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            host_id: DEFAULT_HOST_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{ENV_LOG_DIR} must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

impl BoardConfig {
    /// Reads `DRAGBOARD_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_pairs(std::env::vars())
    }

    /// Builds a config from key/value pairs; unrelated keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                ENV_LOG_LEVEL => {
                    config.log_level = normalize_level(value)
                        .map_err(ConfigError::InvalidLogLevel)?
                        .to_string();
                }
                ENV_LOG_DIR => {
                    let dir = PathBuf::from(value);
                    if !dir.is_absolute() {
                        return Err(ConfigError::RelativeLogDir(dir));
                    }
                    config.log_dir = Some(dir);
                }
                ENV_HOST_ID => config.host_id = value.to_string(),
                _ => {}
            }
        }
        Ok(config)
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, DEFAULT_HOST_ID};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn empty_environment_yields_defaults() {
        let config = BoardConfig::from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.host_id, DEFAULT_HOST_ID);
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn known_keys_override_and_blanks_are_skipped() {
        let config = BoardConfig::from_pairs([
            ("DRAGBOARD_LOG_LEVEL", "Warning"),
            ("DRAGBOARD_LOG_DIR", "/var/log/dragboard"),
            ("DRAGBOARD_HOST_ID", "  "),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/dragboard")));
        assert_eq!(config.host_id, DEFAULT_HOST_ID);
        assert_eq!(config.logging().log_dir, config.log_dir);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            BoardConfig::from_pairs([("DRAGBOARD_LOG_LEVEL", "loud")]),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert_eq!(
            BoardConfig::from_pairs([("DRAGBOARD_LOG_DIR", "logs")]),
            Err(ConfigError::RelativeLogDir(PathBuf::from("logs")))
        );
    }
}
