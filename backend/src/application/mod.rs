pub mod repositories;
pub mod services;
pub mod site;

pub use repositories::{KeyEntry, KeyValueStore, RemoteStore, StoreError, StoreResult};
pub use services::{
    BackfillReport, ContentNotifier, ContentRepository, ContentSeeder, PageSubscription,
    StorageAdapter, SyncError, SyncResult, SyncService, VariantStatus,
};
pub use site::ContentSite;
