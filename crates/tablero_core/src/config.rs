//! Application configuration.
//!
//! # Responsibility
//! - Load `config.json` from the data directory or an explicit path.
//! - Resolve storage/log locations and date display settings.
//!
//! # Invariants
//! - A missing file yields `AppConfig::default()`; missing fields take
//!   their defaults.
//! - A config that passes `validate` can always build a `DateDisplay`.

use crate::view::date::{
    check_pattern, DateDisplay, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT,
};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "tablero.sqlite3";
const APP_DIR_NAME: &str = "tablero";
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
    /// No platform data directory and no explicit path was configured.
    NoDataDir,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
            Self::NoDataDir => write!(f, "could not determine a data directory"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) | Self::NoDataDir => None,
        }
    }
}

/// How `created_at` is shown in rendered views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// `chrono` strftime pattern for repertoire dates.
    pub date_format: String,
    /// `chrono` strftime pattern for message timestamps.
    pub datetime_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding the storage area. Defaults to the data dir.
    pub db_path: Option<PathBuf>,
    /// `trace|debug|info|warn|error`; build-mode default when unset.
    pub log_level: Option<String>,
    /// Absolute log directory. Defaults to `<data dir>/logs`.
    pub log_dir: Option<PathBuf>,
    /// Session identity used as message sender.
    pub current_user: Option<String>,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Platform data directory for the app, e.g. `~/.local/share/tablero`.
    pub fn data_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Default config location inside the data directory.
    pub fn default_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Loads and validates `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates a JSON document.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let offset = self.display.utc_offset_minutes;
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset) {
            return Err(ConfigError::Invalid(format!(
                "display.utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {offset}"
            )));
        }
        validate_pattern("display.date_format", &self.display.date_format)?;
        validate_pattern("display.datetime_format", &self.display.datetime_format)?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    pub fn resolved_db_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Self::data_dir()
                .map(|dir| dir.join(DB_FILE_NAME))
                .ok_or(ConfigError::NoDataDir),
        }
    }

    pub fn resolved_log_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir()
                .map(|dir| dir.join("logs"))
                .ok_or(ConfigError::NoDataDir),
        }
    }

    pub fn date_display(&self) -> Result<DateDisplay, ConfigError> {
        let offset = FixedOffset::east_opt(self.display.utc_offset_minutes * 60).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "unsupported utc offset {} minutes",
                self.display.utc_offset_minutes
            ))
        })?;
        DateDisplay::new(
            offset,
            self.display.date_format.clone(),
            self.display.datetime_format.clone(),
        )
        .map_err(|err| ConfigError::Invalid(format!("display: {err}")))
    }
}

fn validate_pattern(field: &str, pattern: &str) -> Result<(), ConfigError> {
    if pattern.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} cannot be empty")));
    }
    check_pattern(pattern).map_err(|err| ConfigError::Invalid(format!("{field} is {err}")))
}
