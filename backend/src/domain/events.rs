/// Domain events
use super::aggregates::PageContent;
use super::base::DomainEvent;
use super::value_objects::{PageId, StorageKey, Variant};

/// Name of the process-wide signal emitted after a page save
pub const CONTENT_UPDATED_EVENT: &str = "content_updated";

/// Storage-style change: a key now holds `new_value` (or nothing, after a removal)
#[derive(Debug, Clone, PartialEq)]
pub struct StorageChanged {
    pub key: String,
    pub new_value: Option<String>,
}

impl StorageChanged {
    pub fn new(key: impl Into<String>, new_value: Option<String>) -> Self {
        StorageChanged {
            key: key.into(),
            new_value,
        }
    }

    /// The page variant this change targets, if the key is a page key
    pub fn page_target(&self) -> Option<(Variant, PageId)> {
        StorageKey::new(self.key.clone()).ok()?.page_target()
    }
}

impl DomainEvent for StorageChanged {
    fn event_type(&self) -> &'static str {
        "storage"
    }

    fn aggregate_id(&self) -> String {
        self.key.clone()
    }
}

/// Everything the notification channel carries
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEvent {
    /// Something was saved; carries no payload, listeners must re-read
    ContentUpdated,
    /// A key changed, with the new serialized value
    Storage(StorageChanged),
}

impl DomainEvent for ContentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ContentEvent::ContentUpdated => CONTENT_UPDATED_EVENT,
            ContentEvent::Storage(change) => change.event_type(),
        }
    }

    fn aggregate_id(&self) -> String {
        match self {
            ContentEvent::ContentUpdated => String::new(),
            ContentEvent::Storage(change) => change.aggregate_id(),
        }
    }
}

/// A decoded change to one variant of one page, delivered to page subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct PageChange {
    pub page_id: PageId,
    pub variant: Variant,
    /// `None` when the key was removed
    pub content: Option<PageContent>,
}

impl DomainEvent for PageChange {
    fn event_type(&self) -> &'static str {
        match self.variant {
            Variant::Published => "PagePublished",
            Variant::Draft => "DraftChanged",
        }
    }

    fn aggregate_id(&self) -> String {
        self.page_id.as_str().to_string()
    }
}
