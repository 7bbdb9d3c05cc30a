//! Wiring between configuration, storage and the stores.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tandem_core::KeyValueStore;
use tandem_core::account::AccountStore;
use tandem_core::message::MessageStore;
use tandem_core::partner::PartnerDirectory;
use tandem_core::profile::ProfileStore;
use tandem_core::session::SessionStore;
use tandem_infrastructure::{AppConfig, InMemoryStore, JsonFileStore};

/// Everything a command needs. Stores are opened on demand and share one
/// storage handle.
pub struct App {
    pub config: AppConfig,
    storage: Arc<dyn KeyValueStore>,
    partners: PartnerDirectory,
}

impl App {
    /// Builds the app over the configured storage file, or over an
    /// in-memory store when `ephemeral` is set.
    pub fn new(config: AppConfig, ephemeral: bool) -> Result<Self> {
        let storage: Arc<dyn KeyValueStore> = if ephemeral {
            tracing::info!("Using in-memory storage");
            Arc::new(InMemoryStore::new())
        } else {
            let path = config.storage_path()?;
            tracing::info!(path = ?path, "Using file storage");
            Arc::new(JsonFileStore::new(path))
        };

        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: AppConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            storage,
            partners: PartnerDirectory::seeded(),
        }
    }

    pub fn partners(&self) -> &PartnerDirectory {
        &self.partners
    }

    pub fn account(&self) -> AccountStore {
        AccountStore::new(self.storage.clone())
    }

    pub fn profile(&self) -> ProfileStore {
        ProfileStore::new(self.storage.clone())
    }

    pub fn sessions(&self) -> Result<SessionStore> {
        SessionStore::open(self.storage.clone()).context("Failed to load sessions")
    }

    pub fn messages(&self) -> Result<MessageStore> {
        MessageStore::open(self.storage.clone()).context("Failed to load conversations")
    }

    /// Waits the configured fake network delay.
    pub async fn simulate_round_trip(&self) {
        let latency = self.config.network.simulated_latency_ms;
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
    }
}
