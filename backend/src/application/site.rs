use super::repositories::{KeyValueStore, RemoteStore, StoreResult};
use super::services::{ContentNotifier, ContentRepository, ContentSeeder, StorageAdapter, SyncService};
use crate::config::ContentConfig;
use crate::infrastructure::http::WorkerClient;
use crate::infrastructure::persistence::TabStorage;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Everything one page of the site needs, wired onto a single notifier.
pub struct ContentSite {
    adapter: Arc<StorageAdapter>,
    repository: Arc<ContentRepository>,
    sync: Arc<SyncService>,
    seeder: ContentSeeder,
    forwarder: Option<JoinHandle<()>>,
}

impl ContentSite {
    pub fn new(
        config: ContentConfig,
        local: Arc<dyn KeyValueStore>,
        remote: Arc<dyn RemoteStore>,
    ) -> Self {
        let adapter = Arc::new(StorageAdapter::new(config, local, remote, ContentNotifier::new()));
        let repository = Arc::new(ContentRepository::new(adapter.clone()));
        let sync = Arc::new(SyncService::new(adapter.clone()));
        let seeder = ContentSeeder::new(adapter.clone(), repository.clone());

        ContentSite {
            adapter,
            repository,
            sync,
            seeder,
            forwarder: None,
        }
    }

    /// Site running in one browser tab: local storage through `tab`, the
    /// worker at `config.api_base_url`. Writes made by other tabs arrive on
    /// this site's notifier.
    pub fn connect(config: ContentConfig, tab: TabStorage) -> StoreResult<Self> {
        let remote = Arc::new(WorkerClient::new(&config)?);
        info!("Connecting tab {} in {:?} mode", tab.id(), config.environment);

        let mut site = Self::new(config, Arc::new(tab.clone()), remote);
        site.forwarder = Some(tab.forward_foreign_changes(site.notifier().clone()));
        Ok(site)
    }

    pub fn config(&self) -> &ContentConfig {
        self.adapter.config()
    }

    pub fn adapter(&self) -> &Arc<StorageAdapter> {
        &self.adapter
    }

    pub fn notifier(&self) -> &ContentNotifier {
        self.adapter.notifier()
    }

    pub fn repository(&self) -> &Arc<ContentRepository> {
        &self.repository
    }

    pub fn sync(&self) -> &Arc<SyncService> {
        &self.sync
    }

    pub fn seeder(&self) -> &ContentSeeder {
        &self.seeder
    }
}

impl Drop for ContentSite {
    fn drop(&mut self) {
        if let Some(forwarder) = self.forwarder.take() {
            forwarder.abort();
        }
    }
}
