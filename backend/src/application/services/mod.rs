pub mod content_repository;
pub mod notifications;
pub mod seeding;
pub mod storage_adapter;
pub mod sync_service;

pub use content_repository::ContentRepository;
pub use notifications::{ContentNotifier, PageSubscription};
pub use seeding::{BackfillReport, ContentSeeder};
pub use storage_adapter::StorageAdapter;
pub use sync_service::{SyncError, SyncResult, SyncService, VariantStatus};
