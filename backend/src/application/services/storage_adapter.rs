/// Routes every storage call to the development or production backend
use super::notifications::ContentNotifier;
use crate::application::repositories::{KeyValueStore, RemoteStore, StoreError, StoreResult};
use crate::config::{ContentConfig, Environment};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Single entry point to the physical key-value store.
///
/// The environment is fixed at construction: development talks to the local
/// store, production to the worker. Failures never escape the `get`/`set`/
/// `remove` family; they are logged and reported as absence or `false`.
pub struct StorageAdapter {
    config: ContentConfig,
    local: Arc<dyn KeyValueStore>,
    remote: Arc<dyn RemoteStore>,
    notifier: ContentNotifier,
}

impl StorageAdapter {
    pub fn new(
        config: ContentConfig,
        local: Arc<dyn KeyValueStore>,
        remote: Arc<dyn RemoteStore>,
        notifier: ContentNotifier,
    ) -> Self {
        debug!("Storage adapter routing to {:?}", config.environment);
        StorageAdapter {
            config,
            local,
            remote,
            notifier,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn is_production(&self) -> bool {
        self.config.environment.is_production()
    }

    pub fn notifier(&self) -> &ContentNotifier {
        &self.notifier
    }

    /// Raw serialized value under `key`
    pub async fn get_raw(&self, key: &str) -> Option<String> {
        match self.fetch_raw(key).await {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    /// Typed value under `key`. Malformed JSON reads as absent.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    /// Typed read that keeps a failed read apart from an absent key.
    /// Malformed JSON still reads as absent.
    pub(crate) async fn try_get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.fetch_raw(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Stored value for {} is malformed, treating as not found: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Serialize and write `value`.
    ///
    /// In development a successful write is re-broadcast as a storage change so
    /// listeners in the same tab observe it.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize value for {}: {}", key, e);
                return false;
            }
        };

        match self.put_raw(key, raw.clone()).await {
            Ok(()) => {
                if !self.is_production() {
                    self.notifier.storage_changed(key, Some(raw));
                }
                true
            }
            Err(e) => {
                error!("Failed to write {}: {}", key, e);
                false
            }
        }
    }

    pub async fn remove(&self, key: &str) -> bool {
        match self.delete_raw(key).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to remove {}: {}", key, e);
                false
            }
        }
    }

    /// Key names starting with `prefix`
    pub async fn list_keys(&self, prefix: Option<&str>) -> Vec<String> {
        let listed = match self.config.environment {
            Environment::Development => self.local.list(prefix).await,
            Environment::Production => self.bounded(self.remote.list(prefix)).await,
        };
        match listed {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| entry.name)
                .filter(|name| prefix.map_or(true, |p| name.starts_with(p)))
                .collect(),
            Err(e) => {
                error!("Failed to list keys with prefix {:?}: {}", prefix, e);
                Vec::new()
            }
        }
    }

    /// Ask the worker to seed its defaults; development has nothing to ask
    pub async fn initialize_remote(&self) -> bool {
        if !self.is_production() {
            return false;
        }
        match self.bounded(self.remote.initialize()).await {
            Ok(message) => {
                debug!("Worker initialization: {}", message);
                true
            }
            Err(e) => {
                error!("Worker initialization failed: {}", e);
                false
            }
        }
    }

    /// Read without swallowing the error
    pub(crate) async fn fetch_raw(&self, key: &str) -> StoreResult<Option<String>> {
        match self.config.environment {
            Environment::Development => self.local.get(key).await,
            Environment::Production => self.bounded(self.remote.get(key)).await,
        }
    }

    /// Write without notifying anyone
    pub(crate) async fn put_raw(&self, key: &str, value: String) -> StoreResult<()> {
        match self.config.environment {
            Environment::Development => self.local.put(key, value).await,
            Environment::Production => self.bounded(self.remote.put(key, value)).await,
        }
    }

    /// Remove without notifying anyone
    pub(crate) async fn delete_raw(&self, key: &str) -> StoreResult<()> {
        match self.config.environment {
            Environment::Development => self.local.delete(key).await,
            Environment::Production => self.bounded(self.remote.delete(key)).await,
        }
    }

    /// Cap a worker call at `request_timeout`
    async fn bounded<T>(&self, call: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        let limit = self.config.request_timeout;
        tokio::time::timeout(limit, call)
            .await
            .map_err(|_| StoreError::Timeout(limit))?
    }
}
