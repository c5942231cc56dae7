use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_WIDTH: usize = 80;

const fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default)]
    pub bytes: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            bytes: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// `<config dir>/truncator/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("truncator").join("config.toml"))
    }

    /// Load the config from the default location, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_optional_at(Self::default_path())
    }

    fn load_optional_at(path: Result<PathBuf, ConfigError>) -> Result<Self, ConfigError> {
        match path {
            Ok(path) => Self::load_optional(&path),
            Err(ConfigError::NoConfigDir) => {
                tracing::debug!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Like [`Config::load_from`], but a missing file yields the defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        match Self::load_from(path) {
            Err(ConfigError::ReadFailed(_, err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::ReadFailed(path.to_path_buf(), err))?;
        toml::from_str(&content).map_err(|err| ConfigError::ParseFailed(path.to_path_buf(), err))
    }
}
