/// Explicit first-run seeding and section backfill
use super::content_repository::ContentRepository;
use super::storage_adapter::StorageAdapter;
use crate::domain::aggregates::PageContent;
use crate::domain::entities::PageSection;
use crate::domain::defaults::{default_page_content, required_sections, seed_entries, KNOWN_PAGE_IDS};
use crate::domain::value_objects::{keys, PageId, StorageKey};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Summary of one backfill pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Variants written because they were absent
    pub created: usize,
    /// Variants written because required sections were missing
    pub patched: usize,
    /// Total sections appended across all variants
    pub sections_added: usize,
    pub failures: usize,
}

impl BackfillReport {
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.patched == 0 && self.failures == 0
    }
}

/// Runs the seeding steps that used to happen implicitly on load
pub struct ContentSeeder {
    adapter: Arc<StorageAdapter>,
    repository: Arc<ContentRepository>,
}

impl ContentSeeder {
    pub fn new(adapter: Arc<StorageAdapter>, repository: Arc<ContentRepository>) -> Self {
        ContentSeeder { adapter, repository }
    }

    /// Seed defaults once, then backfill every known page.
    ///
    /// Production delegates the seeding to the worker. Development writes the
    /// initial pages and collections unless `dbInitialized` is already set.
    pub async fn initialize(&self) -> bool {
        let seeded = if self.adapter.is_production() {
            info!("Initializing content through the worker");
            self.adapter.initialize_remote().await
        } else {
            self.initialize_local().await
        };

        let report = self.update_all_pages_with_all_sections().await;
        seeded && report.failures == 0
    }

    async fn initialize_local(&self) -> bool {
        if self.adapter.get_raw(keys::DB_INITIALIZED).await.is_some() {
            debug!("Local content already initialized");
            return true;
        }

        info!("Initializing local content");
        let mut ok = true;
        for (key, value) in seed_entries() {
            if !self.adapter.set(&key, &value).await {
                error!("Failed to seed {}", key);
                ok = false;
            }
        }

        if ok {
            ok = self.adapter.set(keys::DB_INITIALIZED, &true).await;
        }
        ok
    }

    /// Append missing required sections to both variants of every known page.
    ///
    /// Each variant is patched from its own stored content. A missing published
    /// variant starts from the page template; a missing draft starts from the
    /// patched published variant. Nothing is written when nothing is missing.
    pub async fn update_all_pages_with_all_sections(&self) -> BackfillReport {
        let mut report = BackfillReport::default();
        for id in KNOWN_PAGE_IDS {
            self.backfill_page(&PageId::literal(id), &mut report).await;
        }

        if report.is_noop() {
            debug!("Backfill found nothing to do");
        } else {
            info!("Backfill finished: {:?}", report);
        }
        report
    }

    async fn backfill_page(&self, page_id: &PageId, report: &mut BackfillReport) {
        let templates = required_sections(page_id.as_str());

        let page_key = StorageKey::published(page_id);
        let (published, is_new) = match self.adapter.try_get::<PageContent>(page_key.as_str()).await {
            Ok(Some(content)) => (content, false),
            Ok(None) => match default_page_content(page_id) {
                Some(content) => (content, true),
                None => return,
            },
            Err(e) => {
                warn!("Skipping backfill of {}, read failed: {}", page_id, e);
                report.failures += 1;
                return;
            }
        };
        let published = self
            .patch_variant(&page_key, published, is_new, &templates, report)
            .await;

        let editor_key = StorageKey::draft(page_id);
        match self.adapter.try_get::<PageContent>(editor_key.as_str()).await {
            Ok(Some(draft)) => {
                self.patch_variant(&editor_key, draft, false, &templates, report)
                    .await;
            }
            Ok(None) => {
                self.patch_variant(&editor_key, published, true, &templates, report)
                    .await;
            }
            Err(e) => {
                warn!("Skipping backfill of {}, read failed: {}", editor_key, e);
                report.failures += 1;
            }
        }
    }

    async fn patch_variant(
        &self,
        key: &StorageKey,
        mut content: PageContent,
        is_new: bool,
        templates: &[PageSection],
        report: &mut BackfillReport,
    ) -> PageContent {
        let added = content.ensure_sections(templates);
        if added == 0 && !is_new {
            return content;
        }

        if self.adapter.set(key.as_str(), &content).await {
            if is_new {
                report.created += 1;
            } else {
                report.patched += 1;
            }
            report.sections_added += added;
            debug!("Backfilled {} with {} sections", key, added);
        } else {
            warn!("Backfill of {} could not be written", key);
            report.failures += 1;
        }
        content
    }

    /// Copy every published page over its draft. Returns the number copied.
    pub async fn sync_content_to_editor(&self) -> usize {
        let mut copied = 0;
        for page_id in self.repository.get_all_page_ids().await {
            let page_key = StorageKey::published(&page_id);
            let Some(value) = self.adapter.get::<Value>(page_key.as_str()).await else {
                continue;
            };
            if self.adapter.set(StorageKey::draft(&page_id).as_str(), &value).await {
                copied += 1;
            }
        }
        info!("Copied {} published pages to the editor", copied);
        copied
    }

    /// Remove every local key except the preserved ones (`adminAuth`, `language`).
    /// Refuses to run against the worker.
    pub async fn reset_local_storage(&self) -> bool {
        if self.adapter.is_production() {
            warn!("Refusing to reset storage in production");
            return false;
        }

        let mut ok = true;
        for key in self.adapter.list_keys(None).await {
            if keys::PRESERVED_ON_RESET.contains(&key.as_str()) {
                continue;
            }
            ok &= self.adapter.remove(&key).await;
        }
        info!("Local storage reset");
        ok
    }
}
