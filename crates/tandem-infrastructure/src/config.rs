//! Application configuration.
//!
//! Loads `config.toml` (by default `~/.config/tandem/config.toml`) through
//! [`AtomicFile`], writing the defaults the first time so users have a file
//! to edit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tandem_core::error::Result;

use crate::paths::TandemPaths;
use crate::storage::{AtomicFile, FileFormat};

/// Delay used to mimic a network round trip on login and scheduling.
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Key-value store file. Defaults to `<data dir>/storage.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Log directory. Defaults to `<data dir>/logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    pub simulated_latency_ms: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
    }
}

/// Root of `config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub network: NetworkSettings,
}

impl AppConfig {
    /// Loads the configuration at `path`, or at the default location.
    ///
    /// A missing or empty file yields the defaults, which are written back
    /// so the file exists afterwards.
    pub fn load_or_create(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => TandemPaths::config_file()?,
        };
        let file = AtomicFile::<AppConfig>::new(path, FileFormat::Toml);

        match file.load()? {
            Some(config) => {
                tracing::debug!(path = ?file.path(), "Loaded configuration");
                Ok(config)
            }
            None => {
                let config = AppConfig::default();
                file.save(&config)?;
                tracing::info!(path = ?file.path(), "Wrote default configuration");
                Ok(config)
            }
        }
    }

    /// Resolved key-value store file.
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(TandemPaths::storage_file()?),
        }
    }

    /// Resolved log directory.
    pub fn log_directory(&self) -> Result<PathBuf> {
        match &self.logging.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(TandemPaths::logs_dir()?),
        }
    }
}
