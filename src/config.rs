//! Runner configuration.
//!
//! The runner carries a deliberately small configuration surface: a
//! `[logging]` section controlling the host process's own diagnostics. It is
//! loaded from a TOML file in the XDG config directory
//! (`~/.config/agentassistant/runner.toml` on typical setups); the
//! `AGENTASSISTANT_RUNNER_CONFIG` environment variable overrides the path.
//!
//! A missing file is not an error: defaults apply. An unreadable or invalid
//! file is reported as a [`ConfigError`], and the caller decides whether to
//! fall back to defaults (the bootstrap does, with a warning).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use serde::Deserialize;

use crate::error::{ConfigError, RunnerError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "AgentAssistant";
const APPLICATION: &str = "agentassistant";

const CONFIG_FILE_NAME: &str = "runner.toml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "AGENTASSISTANT_RUNNER_CONFIG";

/// Configuration for the runner's own diagnostics channel.
///
/// This is independent of the GLib log filter, which only wraps toolkit
/// traffic.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: one of "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "text" or "json".
    pub format: String,
    /// Optional log file. When set, a non-blocking file layer is added in
    /// addition to console output.
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
            file_path: None,
        }
    }
}

/// Root configuration for the runner.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    /// The `[logging]` section.
    pub logging: LoggingConfig,
}

impl RunnerConfig {
    /// Loads the configuration from its default location.
    ///
    /// Resolution order: the [`CONFIG_PATH_ENV`] override if set and
    /// non-empty, otherwise `runner.toml` in the application's XDG config
    /// directory. A missing file yields the default configuration.
    pub fn load() -> Result<Self, RunnerError> {
        let path = match env::var_os(CONFIG_PATH_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => default_config_path()?,
        };
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] for I/O failures other than
    /// file-not-found, [`ConfigError::ParseError`] for invalid TOML, and
    /// [`ConfigError::ValidationError`] for out-of-range values.
    pub fn load_from(path: &Path) -> Result<Self, RunnerError> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => toml::from_str::<RunnerConfig>(&content)
                .map_err(|e| RunnerError::Config(ConfigError::ParseError(e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RunnerConfig::default(),
            Err(e) => {
                return Err(RunnerError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Normalizes and validates the loaded values.
    ///
    /// Level and format strings are lowercased; unknown values are
    /// rejected rather than silently defaulted.
    fn validate(&mut self) -> Result<(), ConfigError> {
        self.logging.level = self.logging.level.to_lowercase();
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            invalid => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {}",
                    invalid
                )));
            }
        }

        self.logging.format = self.logging.format.to_lowercase();
        match self.logging.format.as_str() {
            "text" | "json" => {}
            invalid => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {}",
                    invalid
                )));
            }
        }

        Ok(())
    }
}

/// Returns the default configuration file path inside the application's XDG
/// config directory.
fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .ok_or_else(|| ConfigError::DirectoryUnavailable {
            dir_type: "Config Base".to_string(),
        })
}
