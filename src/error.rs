//! Error types used throughout the truncator crate.
//!
//! Each concern has its own error enum so callers get precise, typed failure
//! information. All errors implement [`Display`](std::fmt::Display) so they
//! can be logged or printed without additional mapping.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while turning a caller-supplied value into a width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// The value is below zero. Widths are never clamped.
    Negative(i64),
    /// The text is not an integer at all.
    NotANumber(String),
}

impl std::fmt::Display for WidthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative(value) => {
                write!(f, "Invalid width {value}: width must not be negative")
            }
            Self::NotANumber(text) => write!(f, "Invalid width {text:?}: not an integer"),
        }
    }
}

impl std::error::Error for WidthError {}

/// Errors that can occur while loading `config.toml`.
#[derive(Debug)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    NoConfigDir,
    /// The config file exists but could not be read (e.g. permission denied).
    ReadFailed(PathBuf, io::Error),
    /// The config file was read but is not valid TOML or has unknown fields.
    ParseFailed(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "Could not determine config directory"),
            Self::ReadFailed(path, err) => {
                write!(f, "Failed to read config file {}: {err}", path.display())
            }
            Self::ParseFailed(path, err) => {
                write!(f, "Failed to parse config file {}: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur while running the `cut` command.
#[derive(Debug)]
pub enum RunError {
    /// Reading stdin or writing stdout failed.
    Io(io::Error),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
