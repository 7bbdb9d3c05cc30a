//! Unified path management for tandem files.
//!
//! All configuration, storage and log locations are resolved here so the
//! binary and the tests agree on one layout.

use std::path::PathBuf;

/// Application directory name under the platform config/data dirs.
const APP_DIR: &str = "tandem";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for tandem_core::TandemError {
    fn from(e: PathError) -> Self {
        tandem_core::TandemError::config(e.to_string())
    }
}

/// Unified path management for tandem.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/tandem/            # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/tandem/       # Data directory
/// ├── storage.json             # Key-value store (sessions, messages, user)
/// └── logs/                    # Application logs
///     └── tandem.log.YYYY-MM-DD
/// ```
pub struct TandemPaths;

impl TandemPaths {
    /// Returns the tandem configuration directory (e.g. `~/.config/tandem/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the tandem data directory (e.g. `~/.local/share/tandem/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default key-value storage file.
    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage.json"))
    }

    /// Returns the default log directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("logs"))
    }
}
