/// Publish/subscribe channel for content changes
use crate::domain::aggregates::PageContent;
use crate::domain::events::{ContentEvent, PageChange, StorageChanged};
use crate::domain::value_objects::PageId;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

const DEFAULT_CAPACITY: usize = 256;

/// Broadcasts content events to every live subscriber.
///
/// Cloning yields another handle onto the same channel. Delivery is best
/// effort: a send with no subscribers is dropped, and a subscriber that falls
/// behind skips what it missed.
#[derive(Debug, Clone)]
pub struct ContentNotifier {
    sender: broadcast::Sender<ContentEvent>,
}

impl Default for ContentNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentNotifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        ContentNotifier { sender }
    }

    /// Every event, in dispatch order
    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.sender.subscribe()
    }

    /// Decoded changes to either variant of one page
    pub fn subscribe_page(&self, page_id: PageId) -> PageSubscription {
        PageSubscription {
            page_id,
            receiver: self.sender.subscribe(),
        }
    }

    /// Payload-free signal that something was saved
    pub fn content_updated(&self) {
        self.dispatch(ContentEvent::ContentUpdated);
    }

    /// A key now holds `new_value`, or nothing after a removal
    pub fn storage_changed(&self, key: &str, new_value: Option<String>) {
        self.dispatch(ContentEvent::Storage(StorageChanged::new(key, new_value)));
    }

    pub fn dispatch(&self, event: ContentEvent) {
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            debug!("No subscribers for {:?}", event);
        }
    }
}

/// Receiver filtered down to one page id
pub struct PageSubscription {
    page_id: PageId,
    receiver: broadcast::Receiver<ContentEvent>,
}

impl PageSubscription {
    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }

    /// Wait for the next change to this page. `None` once the channel closes.
    pub async fn recv(&mut self) -> Option<PageChange> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if let Some(change) = self.decode(event) {
                        return Some(change);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Page subscription for {} skipped {} events", self.page_id, skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next already-delivered change, without waiting
    pub fn try_recv(&mut self) -> Option<PageChange> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if let Some(change) = self.decode(event) {
                        return Some(change);
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Page subscription for {} skipped {} events", self.page_id, skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    fn decode(&self, event: ContentEvent) -> Option<PageChange> {
        let ContentEvent::Storage(change) = event else {
            return None;
        };
        let (variant, page_id) = change.page_target()?;
        if page_id != self.page_id {
            return None;
        }

        let content = match change.new_value.as_deref() {
            None => None,
            Some(raw) => match serde_json::from_str::<PageContent>(raw) {
                Ok(content) => Some(content),
                Err(e) => {
                    warn!("Ignoring malformed content for {}: {}", change.key, e);
                    return None;
                }
            },
        };

        Some(PageChange {
            page_id,
            variant,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{TranslatedText, Variant};

    fn page_json(id: &str) -> String {
        let page = PageContent::new(PageId::new(id).unwrap(), TranslatedText::new("T", "ت"));
        serde_json::to_string(&page).unwrap()
    }

    #[tokio::test]
    async fn test_subscribe_receives_in_order() {
        let notifier = ContentNotifier::new();
        let mut events = notifier.subscribe();

        notifier.content_updated();
        notifier.storage_changed("page_home", Some("{}".to_string()));

        assert_eq!(events.recv().await.unwrap(), ContentEvent::ContentUpdated);
        assert_eq!(
            events.recv().await.unwrap(),
            ContentEvent::Storage(StorageChanged::new("page_home", Some("{}".to_string())))
        );
    }

    #[test]
    fn test_dispatch_without_subscribers_is_ignored() {
        let notifier = ContentNotifier::new();
        notifier.content_updated();
    }

    #[tokio::test]
    async fn test_page_subscription_filters_other_pages() {
        let notifier = ContentNotifier::new();
        let mut home = notifier.subscribe_page(PageId::new("home").unwrap());

        notifier.content_updated();
        notifier.storage_changed("page_about", Some(page_json("about")));
        notifier.storage_changed("newsItems", Some("[]".to_string()));
        notifier.storage_changed("editor_home", Some(page_json("home")));

        let change = home.recv().await.unwrap();
        assert_eq!(change.variant, Variant::Draft);
        assert_eq!(change.content.unwrap().id.as_str(), "home");
        assert!(home.try_recv().is_none());
    }

    #[test]
    fn test_page_subscription_reports_removal() {
        let notifier = ContentNotifier::new();
        let mut home = notifier.subscribe_page(PageId::new("home").unwrap());

        notifier.storage_changed("page_home", None);

        let change = home.try_recv().unwrap();
        assert_eq!(change.variant, Variant::Published);
        assert!(change.content.is_none());
    }

    #[test]
    fn test_page_subscription_skips_malformed_payload() {
        let notifier = ContentNotifier::new();
        let mut home = notifier.subscribe_page(PageId::new("home").unwrap());

        notifier.storage_changed("page_home", Some("not json".to_string()));
        notifier.storage_changed("page_home", Some(page_json("home")));

        assert!(home.try_recv().unwrap().content.is_some());
        assert!(home.try_recv().is_none());
    }

    #[test]
    fn test_lagged_subscriber_keeps_receiving() {
        let notifier = ContentNotifier::with_capacity(2);
        let mut home = notifier.subscribe_page(PageId::new("home").unwrap());

        for _ in 0..5 {
            notifier.storage_changed("page_home", None);
        }

        assert!(home.try_recv().is_some());
    }
}
