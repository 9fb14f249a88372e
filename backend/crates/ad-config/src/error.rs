use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use ad_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Seed data rejected: {source}")]
    Seed {
        #[source]
        source: CoreError,
    },
}

impl ConfigError {
    /// Create a catalog error
    #[track_caller]
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Catalog",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a user defaults error
    #[track_caller]
    pub fn users<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Users",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ConfigError {
    fn from(source: CoreError) -> Self {
        ConfigError::Seed { source }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
