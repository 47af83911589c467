use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised by a key-value backend.
///
/// Callers above the storage adapter never see these: the adapter logs them
/// and turns them into "not found" / `false`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One entry of a key listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub name: String,
}

/// Contract of the opaque key -> serialized-JSON store behind the site.
///
/// Values are stored and returned verbatim. There is no atomicity across
/// keys and no versioning: the last write to a key wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Creates or overwrites the value under `key`.
    async fn put(&self, key: &str, value: String) -> StoreResult<()>;

    /// Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Keys starting with `prefix` (every key when `None`), sorted by name.
    async fn list(&self, prefix: Option<&str>) -> StoreResult<Vec<KeyEntry>>;
}

/// A store living behind the worker, which can also seed its own defaults.
#[async_trait]
pub trait RemoteStore: KeyValueStore {
    /// Ask the far side to write every missing default key. Returns its message.
    async fn initialize(&self) -> StoreResult<String>;
}
