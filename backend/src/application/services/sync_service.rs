/// Sync service for the published/draft page variants
use super::notifications::{ContentNotifier, PageSubscription};
use super::storage_adapter::StorageAdapter;
use crate::application::repositories::StoreError;
use crate::domain::aggregates::PageContent;
use crate::domain::base::DomainError;
use crate::domain::events::ContentEvent;
use crate::domain::value_objects::{PageId, StorageKey};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid content: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SyncResult<T> = Result<T, SyncError>;

/// How the two stored copies of one page relate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStatus {
    /// Neither variant is stored
    Empty,
    PublishedOnly,
    DraftOnly,
    /// Both stored and equal
    InSync,
    /// Both stored and different; only `apply` reconciles them
    Diverged,
}

/// Owns the save/apply protocol and the notifications that follow it.
///
/// A save writes both variants to the same payload, then dispatches the
/// payload-free `ContentUpdated` signal followed by one storage change per key.
pub struct SyncService {
    adapter: Arc<StorageAdapter>,
    notifier: ContentNotifier,
}

impl SyncService {
    pub fn new(adapter: Arc<StorageAdapter>) -> Self {
        let notifier = adapter.notifier().clone();
        SyncService { adapter, notifier }
    }

    pub fn notifier(&self) -> &ContentNotifier {
        &self.notifier
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.notifier.subscribe()
    }

    pub fn subscribe_page(&self, page_id: PageId) -> PageSubscription {
        self.notifier.subscribe_page(page_id)
    }

    /// Write `content` as both the published and the draft variant
    pub async fn save(&self, content: &PageContent) -> bool {
        match self.try_save(content).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save page {}: {}", content.id, e);
                false
            }
        }
    }

    pub async fn try_save(&self, content: &PageContent) -> SyncResult<()> {
        let mut content = content.clone();
        content.normalize();
        content.validate()?;
        let payload = serde_json::to_string(&content)?;

        let page_key = StorageKey::published(&content.id);
        let editor_key = StorageKey::draft(&content.id);

        // Development clears both keys first so no reader sees old and new side by side
        if !self.adapter.is_production() {
            self.adapter.delete_raw(page_key.as_str()).await?;
            self.adapter.delete_raw(editor_key.as_str()).await?;
            tokio::time::sleep(self.adapter.config().save_pause).await;
        }

        self.adapter.put_raw(page_key.as_str(), payload.clone()).await?;
        self.adapter.put_raw(editor_key.as_str(), payload.clone()).await?;
        info!("Saved page {} ({} sections)", content.id, content.sections.len());

        self.notifier.content_updated();
        self.notifier.storage_changed(page_key.as_str(), Some(payload.clone()));
        self.notifier.storage_changed(editor_key.as_str(), Some(payload));
        Ok(())
    }

    /// Write the draft variant only
    pub async fn save_draft(&self, content: &PageContent) -> bool {
        match self.try_save_draft(content).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save draft of page {}: {}", content.id, e);
                false
            }
        }
    }

    pub async fn try_save_draft(&self, content: &PageContent) -> SyncResult<()> {
        let mut content = content.clone();
        content.normalize();
        content.validate()?;
        let payload = serde_json::to_string(&content)?;

        let editor_key = StorageKey::draft(&content.id);
        self.adapter.put_raw(editor_key.as_str(), payload.clone()).await?;

        self.notifier.storage_changed(editor_key.as_str(), Some(payload));
        Ok(())
    }

    /// Copy the draft variant verbatim over the published one.
    /// Returns false when there is no draft to apply.
    pub async fn apply(&self, page_id: &PageId) -> bool {
        match self.try_apply(page_id).await {
            Ok(applied) => applied,
            Err(e) => {
                error!("Failed to apply page {}: {}", page_id, e);
                false
            }
        }
    }

    pub async fn try_apply(&self, page_id: &PageId) -> SyncResult<bool> {
        let editor_key = StorageKey::draft(page_id);
        let Some(draft) = self.adapter.fetch_raw(editor_key.as_str()).await? else {
            info!("Nothing to apply for {}", page_id);
            return Ok(false);
        };

        if let Err(e) = serde_json::from_str::<PageContent>(&draft) {
            warn!("Draft {} is malformed, not applying: {}", editor_key, e);
            return Ok(false);
        }

        let page_key = StorageKey::published(page_id);
        self.adapter.put_raw(page_key.as_str(), draft.clone()).await?;
        info!("Applied draft of {}", page_id);

        self.notifier.content_updated();
        self.notifier.storage_changed(page_key.as_str(), Some(draft));
        Ok(true)
    }

    /// Compare the two stored variants of a page. Never writes.
    pub async fn variant_status(&self, page_id: &PageId) -> VariantStatus {
        let published = self.read_json(&StorageKey::published(page_id)).await;
        let draft = self.read_json(&StorageKey::draft(page_id)).await;

        match (published, draft) {
            (None, None) => VariantStatus::Empty,
            (Some(_), None) => VariantStatus::PublishedOnly,
            (None, Some(_)) => VariantStatus::DraftOnly,
            (Some(published), Some(draft)) if published == draft => VariantStatus::InSync,
            (Some(_), Some(_)) => {
                warn!("Published and draft variants of {} have diverged", page_id);
                VariantStatus::Diverged
            }
        }
    }

    async fn read_json(&self, key: &StorageKey) -> Option<Value> {
        self.adapter.get::<Value>(key.as_str()).await
    }
}
