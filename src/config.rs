use crate::geometry::{Map, MapError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file: `<config dir>/hexgrid/config.toml`.
///
/// `None` when the platform has no notion of a per-user configuration directory.
pub fn path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("hexgrid").join("config.toml"))
}

/// Persisted map settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of rows in each column.
    pub rows: i32,
    /// Number of columns.
    pub cols: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config { rows: 5, cols: 5 }
    }
}

impl Config {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::ser::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Build the map these settings describe.
    pub fn map(&self) -> Result<Map, Error> {
        Map::new(self.rows, self.cols).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("no configuration directory for this user")]
    NoConfigDir,
    #[error("configured map is invalid")]
    InvalidMap(#[from] MapError),
}
