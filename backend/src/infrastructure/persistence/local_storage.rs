use crate::application::repositories::{KeyEntry, KeyValueStore, StoreResult};
use crate::application::services::ContentNotifier;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

const CHANGE_CAPACITY: usize = 256;

/// A write or removal made through one tab
#[derive(Debug, Clone, PartialEq)]
pub struct StorageChange {
    pub origin: Uuid,
    pub key: String,
    pub new_value: Option<String>,
}

/// One local store shared by every tab of a browser profile.
pub struct SharedLocalStorage {
    store: Arc<dyn KeyValueStore>,
    changes: broadcast::Sender<StorageChange>,
}

impl SharedLocalStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        SharedLocalStorage { store, changes }
    }

    /// Open a new tab onto this storage
    pub fn open_tab(&self) -> TabStorage {
        let tab = TabStorage {
            id: Uuid::new_v4(),
            store: self.store.clone(),
            changes: self.changes.clone(),
        };
        debug!("Opened tab {}", tab.id);
        tab
    }

    /// Every change made through any tab
    pub fn changes(&self) -> broadcast::Receiver<StorageChange> {
        self.changes.subscribe()
    }
}

/// Handle of one tab onto the shared local storage.
///
/// Writes go straight to the shared store and are announced to the other
/// tabs. The writing tab itself is not told, the same way a browser does not
/// fire a storage event in the tab that made the change.
#[derive(Clone)]
pub struct TabStorage {
    id: Uuid,
    store: Arc<dyn KeyValueStore>,
    changes: broadcast::Sender<StorageChange>,
}

impl TabStorage {
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn announce(&self, key: &str, new_value: Option<String>) {
        let change = StorageChange {
            origin: self.id,
            key: key.to_string(),
            new_value,
        };
        if self.changes.send(change).is_err() {
            debug!("No other tab listening for {}", key);
        }
    }

    /// Deliver changes made by other tabs to `notifier` as storage events.
    ///
    /// Runs until every handle onto the shared storage is dropped.
    pub fn forward_foreign_changes(&self, notifier: ContentNotifier) -> JoinHandle<()> {
        let own_id = self.id;
        let mut changes = self.changes.subscribe();
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(change) if change.origin != own_id => {
                        notifier.storage_changed(&change.key, change.new_value);
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Tab {} missed {} storage changes", own_id, skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

#[async_trait]
impl KeyValueStore for TabStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.store.get(key).await
    }

    async fn put(&self, key: &str, value: String) -> StoreResult<()> {
        self.store.put(key, value.clone()).await?;
        self.announce(key, Some(value));
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.store.delete(key).await?;
        self.announce(key, None);
        Ok(())
    }

    async fn list(&self, prefix: Option<&str>) -> StoreResult<Vec<KeyEntry>> {
        self.store.list(prefix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::ContentEvent;
    use crate::infrastructure::persistence::SqliteKeyValueStore;
    use std::time::Duration;

    fn shared() -> SharedLocalStorage {
        SharedLocalStorage::new(Arc::new(SqliteKeyValueStore::new_in_memory().unwrap()))
    }

    #[tokio::test]
    async fn test_tabs_share_one_store() {
        let storage = shared();
        let first = storage.open_tab();
        let second = storage.open_tab();
        assert_ne!(first.id(), second.id());

        first.put("language", "\"ar\"".to_string()).await.unwrap();

        assert_eq!(second.get("language").await.unwrap().as_deref(), Some("\"ar\""));
    }

    #[tokio::test]
    async fn test_changes_carry_origin() {
        let storage = shared();
        let tab = storage.open_tab();
        let mut changes = storage.changes();

        tab.put("page_home", "{}".to_string()).await.unwrap();
        tab.delete("page_home").await.unwrap();

        let written = changes.recv().await.unwrap();
        assert_eq!(written.origin, tab.id());
        assert_eq!(written.new_value.as_deref(), Some("{}"));
        assert!(changes.recv().await.unwrap().new_value.is_none());
    }

    #[tokio::test]
    async fn test_only_foreign_changes_are_forwarded() {
        let storage = shared();
        let editor = storage.open_tab();
        let visitor = storage.open_tab();

        let notifier = ContentNotifier::new();
        let mut events = notifier.subscribe();
        let _forwarder = visitor.forward_foreign_changes(notifier);

        visitor.put("language", "\"fr\"".to_string()).await.unwrap();
        editor.put("page_about", "{}".to_string()).await.unwrap();

        let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .unwrap()
            .unwrap();
        match event {
            ContentEvent::Storage(change) => assert_eq!(change.key, "page_about"),
            other => panic!("unexpected event {:?}", other),
        }
    }
}
