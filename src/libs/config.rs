//! Configuration for the roster application.
//!
//! The only setting is where the database lives. It is resolved in this
//! order, first match wins:
//!
//! 1. the `--database` command-line flag
//! 2. the `ROSTER_DATABASE` environment variable (a `.env` file is honoured)
//! 3. the `database` key of `config.json` in the data directory
//! 4. `roster.db` in the data directory
//!
//! ```rust,no_run
//! use roster::libs::config::Config;
//!
//! let location = Config::locate_database(None)?;
//! # Ok::<(), roster::libs::config::ConfigError>(())
//! ```

use super::data_storage::DataStorage;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "roster.db";
pub const DATABASE_ENV: &str = "ROSTER_DATABASE";

/// Path value that selects a transient in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the database should be opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

impl DatabaseLocation {
    fn from_value(value: &str) -> Self {
        if value == IN_MEMORY {
            DatabaseLocation::InMemory
        } else {
            DatabaseLocation::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseLocation::File(path) => write!(f, "{}", path.display()),
            DatabaseLocation::InMemory => write!(f, "{}", IN_MEMORY),
        }
    }
}

/// Contents of `config.json`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: Option<String>,
}

impl Config {
    /// Resolves the database location for a run. `config.json` is only read
    /// when neither the flag nor the environment names a database.
    pub fn locate_database(cli_override: Option<&Path>) -> Result<DatabaseLocation, ConfigError> {
        match Self::explicit_location(cli_override) {
            Some(location) => Ok(location),
            None => Self::read()?.database_location(None),
        }
    }

    /// Reads `config.json` from the data directory, or returns the default
    /// configuration when the file does not exist.
    pub fn read() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::read_from(&path)
    }

    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the database location, giving `cli_override` the highest
    /// precedence.
    pub fn database_location(&self, cli_override: Option<&Path>) -> Result<DatabaseLocation, ConfigError> {
        if let Some(location) = Self::explicit_location(cli_override) {
            return Ok(location);
        }
        if let Some(value) = &self.database {
            return Ok(DatabaseLocation::from_value(value));
        }
        let storage = DataStorage::new();
        let path = storage.get_path(DB_FILE_NAME).map_err(|source| ConfigError::Io {
            path: storage.base_path().to_path_buf(),
            source,
        })?;
        Ok(DatabaseLocation::File(path))
    }

    /// Location named by the flag or `ROSTER_DATABASE`, if any.
    fn explicit_location(cli_override: Option<&Path>) -> Option<DatabaseLocation> {
        if let Some(path) = cli_override {
            return Some(DatabaseLocation::from_value(&path.to_string_lossy()));
        }
        let value = std::env::var(DATABASE_ENV).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| DatabaseLocation::from_value(value))
    }

    /// Path of `config.json`. Creates the data directory on first use.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let storage = DataStorage::new();
        storage.get_path(CONFIG_FILE_NAME).map_err(|source| ConfigError::Io {
            path: storage.base_path().to_path_buf(),
            source,
        })
    }
}
