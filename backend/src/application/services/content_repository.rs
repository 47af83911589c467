/// Typed accessors for every content family stored in the key-value store
use super::storage_adapter::StorageAdapter;
use crate::domain::aggregates::PageContent;
use crate::domain::base::Entity;
use crate::domain::defaults::{
    default_page_content, default_value_for_key, fallback_page_content, required_sections,
};
use crate::domain::entities::{
    GlobalContent, MediaItem, NewsItem, Publication, Resource, WebsiteStructure,
};
use crate::domain::value_objects::{keys, PageId, StorageKey, Variant};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Translates domain reads and writes into key-value operations.
///
/// Reads of well-known keys that come back empty materialize the built-in
/// default and persist it, so the next read finds it stored. All failures
/// surface as `None`, an empty list or `false`.
pub struct ContentRepository {
    adapter: Arc<StorageAdapter>,
}

impl ContentRepository {
    pub fn new(adapter: Arc<StorageAdapter>) -> Self {
        ContentRepository { adapter }
    }

    pub fn adapter(&self) -> &Arc<StorageAdapter> {
        &self.adapter
    }

    // ---- pages ----

    /// Published variant of a page, created from its template on first read.
    ///
    /// When the read itself fails the template is returned but not written, so
    /// an unreachable worker never gets its live page replaced.
    pub async fn get_page_content(&self, page_id: &PageId) -> Option<PageContent> {
        let key = StorageKey::published(page_id);
        match self.adapter.try_get::<PageContent>(key.as_str()).await {
            Ok(Some(mut content)) => {
                content.normalize();
                Some(content)
            }
            Ok(None) => {
                let content = default_page_content(page_id)?;
                info!("Seeding default content for {}", key);
                if !self.adapter.set(key.as_str(), &content).await {
                    warn!("Default content for {} could not be persisted", key);
                }
                Some(content)
            }
            Err(e) => {
                warn!("Could not read {}, serving its template unsaved: {}", key, e);
                default_page_content(page_id)
            }
        }
    }

    /// Draft variant of a page, without any defaulting
    pub async fn get_draft_page_content(&self, page_id: &PageId) -> Option<PageContent> {
        let key = StorageKey::draft(page_id);
        let mut content = self.adapter.get::<PageContent>(key.as_str()).await?;
        content.normalize();
        Some(content)
    }

    /// Write the published variant only
    pub async fn set_page_content(&self, content: &PageContent) -> bool {
        let mut content = content.clone();
        content.normalize();
        if let Err(e) = content.validate() {
            warn!("Rejected page {}: {}", content.id, e);
            return false;
        }
        self.adapter
            .set(StorageKey::published(&content.id).as_str(), &content)
            .await
    }

    /// What the admin editor should show for a page.
    ///
    /// Prefers the draft variant. Without one, the published variant (or its
    /// template) seeds the draft key. Unknown pages with nothing stored get a
    /// minimal page that is not persisted. Required sections missing from the
    /// result are appended in memory.
    pub async fn get_exact_page_content(&self, page_id: &PageId) -> PageContent {
        let templates = required_sections(page_id.as_str());
        let key = StorageKey::draft(page_id);

        let draft_readable = match self.adapter.try_get::<PageContent>(key.as_str()).await {
            Ok(Some(mut draft)) => {
                draft.normalize();
                draft.ensure_sections(&templates);
                return draft;
            }
            Ok(None) => true,
            Err(e) => {
                warn!("Could not read {}, it will not be seeded: {}", key, e);
                false
            }
        };

        let Some(mut content) = self.get_page_content(page_id).await else {
            debug!("No content for unknown page {}, using fallback", page_id);
            return fallback_page_content(page_id);
        };

        content.ensure_sections(&templates);
        if draft_readable && !self.adapter.set(key.as_str(), &content).await {
            warn!("Could not seed {}", key);
        }
        content
    }

    /// Ids of every page with a published variant
    pub async fn get_all_page_ids(&self) -> Vec<PageId> {
        let prefix = Variant::Published.key_prefix();
        self.adapter
            .list_keys(Some(prefix))
            .await
            .into_iter()
            .filter_map(|key| StorageKey::new(key).ok()?.page_target())
            .filter(|(variant, _)| *variant == Variant::Published)
            .map(|(_, page_id)| page_id)
            .collect()
    }

    /// Every stored published page
    pub async fn get_all_pages(&self) -> Vec<PageContent> {
        let mut pages = Vec::new();
        for page_id in self.get_all_page_ids().await {
            let key = StorageKey::published(&page_id);
            if let Some(mut content) = self.adapter.get::<PageContent>(key.as_str()).await {
                content.normalize();
                pages.push(content);
            }
        }
        pages
    }

    // ---- news ----

    pub async fn get_news_items(&self) -> Vec<NewsItem> {
        self.get_list(keys::NEWS_ITEMS).await
    }

    pub async fn set_news_items(&self, items: &[NewsItem]) -> bool {
        self.set_list(keys::NEWS_ITEMS, items).await
    }

    pub async fn get_news_item(&self, id: u64) -> Option<NewsItem> {
        self.get_list_item(keys::NEWS_ITEMS, &id).await
    }

    pub async fn update_news_item(&self, item: NewsItem) -> bool {
        self.upsert_list_item(keys::NEWS_ITEMS, item).await
    }

    pub async fn delete_news_item(&self, id: u64) -> bool {
        self.delete_list_item::<NewsItem>(keys::NEWS_ITEMS, &id).await
    }

    // ---- resources ----

    pub async fn get_resources(&self) -> Vec<Resource> {
        self.get_list(keys::RESOURCES).await
    }

    pub async fn set_resources(&self, items: &[Resource]) -> bool {
        self.set_list(keys::RESOURCES, items).await
    }

    pub async fn get_resource(&self, id: u64) -> Option<Resource> {
        self.get_list_item(keys::RESOURCES, &id).await
    }

    pub async fn update_resource(&self, item: Resource) -> bool {
        self.upsert_list_item(keys::RESOURCES, item).await
    }

    pub async fn delete_resource(&self, id: u64) -> bool {
        self.delete_list_item::<Resource>(keys::RESOURCES, &id).await
    }

    // ---- publications ----

    pub async fn get_publications(&self) -> Vec<Publication> {
        self.get_list(keys::PUBLICATIONS).await
    }

    pub async fn set_publications(&self, items: &[Publication]) -> bool {
        self.set_list(keys::PUBLICATIONS, items).await
    }

    pub async fn get_publication(&self, id: u64) -> Option<Publication> {
        self.get_list_item(keys::PUBLICATIONS, &id).await
    }

    pub async fn update_publication(&self, item: Publication) -> bool {
        self.upsert_list_item(keys::PUBLICATIONS, item).await
    }

    pub async fn delete_publication(&self, id: u64) -> bool {
        self.delete_list_item::<Publication>(keys::PUBLICATIONS, &id).await
    }

    // ---- media ----

    pub async fn get_media_library(&self) -> Vec<MediaItem> {
        self.get_list(keys::MEDIA_LIBRARY).await
    }

    pub async fn set_media_library(&self, items: &[MediaItem]) -> bool {
        self.set_list(keys::MEDIA_LIBRARY, items).await
    }

    pub async fn get_media_item(&self, id: &str) -> Option<MediaItem> {
        self.get_list_item(keys::MEDIA_LIBRARY, &id.to_string()).await
    }

    pub async fn update_media_item(&self, item: MediaItem) -> bool {
        self.upsert_list_item(keys::MEDIA_LIBRARY, item).await
    }

    pub async fn delete_media_item(&self, id: &str) -> bool {
        self.delete_list_item::<MediaItem>(keys::MEDIA_LIBRARY, &id.to_string())
            .await
    }

    // ---- global content ----

    pub async fn get_global_content(&self) -> Vec<GlobalContent> {
        self.get_list(keys::GLOBAL_CONTENT).await
    }

    pub async fn set_global_content(&self, items: &[GlobalContent]) -> bool {
        self.set_list(keys::GLOBAL_CONTENT, items).await
    }

    /// The string registered under `category` / `key`
    pub async fn get_global_content_item(&self, category: &str, key: &str) -> Option<GlobalContent> {
        self.get_global_content()
            .await
            .into_iter()
            .find(|item| item.category == category && item.key == key)
    }

    pub async fn get_category_content(&self, category: &str) -> Vec<GlobalContent> {
        self.get_global_content()
            .await
            .into_iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub async fn update_global_content_item(&self, item: GlobalContent) -> bool {
        self.upsert_list_item(keys::GLOBAL_CONTENT, item).await
    }

    pub async fn delete_global_content_item(&self, id: &str) -> bool {
        self.delete_list_item::<GlobalContent>(keys::GLOBAL_CONTENT, &id.to_string())
            .await
    }

    // ---- structure ----

    pub async fn get_structure(&self) -> Option<WebsiteStructure> {
        self.get_with_default(keys::STRUCTURE).await
    }

    pub async fn set_structure(&self, structure: &WebsiteStructure) -> bool {
        self.adapter.set(keys::STRUCTURE, structure).await
    }

    // ---- shared list plumbing ----

    /// Stored value under `key`, or its built-in default persisted on the way
    /// out. A failed read gets the default without the write.
    async fn get_with_default<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let readable = match self.adapter.try_get::<T>(key).await {
            Ok(Some(value)) => return Some(value),
            Ok(None) => true,
            Err(e) => {
                warn!("Could not read {}, serving its default unsaved: {}", key, e);
                false
            }
        };

        let default = default_value_for_key(key)?;
        let typed = match serde_json::from_value::<T>(default.clone()) {
            Ok(typed) => typed,
            Err(e) => {
                error!("Built-in default for {} does not match its type: {}", key, e);
                return None;
            }
        };
        if readable {
            info!("Seeding default value for {}", key);
            if !self.adapter.set(key, &default).await {
                warn!("Default value for {} could not be persisted", key);
            }
        }
        Some(typed)
    }

    async fn get_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.get_with_default::<Vec<T>>(key).await.unwrap_or_default()
    }

    async fn set_list<T: Serialize>(&self, key: &str, items: &[T]) -> bool {
        self.adapter.set(key, items).await
    }

    async fn get_list_item<T>(&self, key: &str, id: &T::Id) -> Option<T>
    where
        T: Entity + DeserializeOwned,
    {
        self.get_list::<T>(key)
            .await
            .into_iter()
            .find(|item| item.id() == id)
    }

    /// Replace the item with the same id in place, or append it
    async fn upsert_list_item<T>(&self, key: &str, item: T) -> bool
    where
        T: Entity + Serialize + DeserializeOwned,
    {
        let mut items = self.get_list::<T>(key).await;
        match items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        self.set_list(key, &items).await
    }

    /// Rewrite the list without the item
    async fn delete_list_item<T>(&self, key: &str, id: &T::Id) -> bool
    where
        T: Entity + Serialize + DeserializeOwned,
    {
        let mut items = self.get_list::<T>(key).await;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            debug!("Delete of {:?} from {} matched nothing", id, key);
        }
        self.set_list(key, &items).await
    }
}
