// Configuration module
// TOML settings for the command-line tool

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::hash::HashUtilityError;

/// Name of the per-user configuration directory and file
const APP_DIR: &str = "hash_replicable";
const CONFIG_FILE: &str = "config.toml";

/// Smallest file accepted by default (1 MiB)
pub const DEFAULT_MIN_FILE_SIZE: u64 = 1024 * 1024;

/// Settings for the command-line tool
///
/// Every field is optional in the file and falls back to its default, so an
/// empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory that receives the hash reports
    pub output_dir: PathBuf,
    /// Files smaller than this are refused
    pub min_file_size: u64,
    /// Draw a progress bar while hashing
    pub show_progress: bool,
    /// Write a report file per hashed file
    pub save_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated_hashes"),
            min_file_size: DEFAULT_MIN_FILE_SIZE,
            show_progress: true,
            save_report: true,
        }
    }
}

impl Config {
    /// Load the configuration
    ///
    /// An explicit path must exist. Without one, the per-user file is used when
    /// present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, HashUtilityError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            Some(path) => {
                log::debug!("no configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::warn!("cannot determine the configuration directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one configuration file
    pub fn from_file(path: &Path) -> Result<Self, HashUtilityError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HashUtilityError::from_io_error(e, "reading configuration", Some(path.to_path_buf()))
        })?;
        let config = Self::parse(&content).map_err(|reason| HashUtilityError::ConfigParseError {
            path: path.to_path_buf(),
            reason,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

/// Per-user configuration file location, if the platform has one
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
