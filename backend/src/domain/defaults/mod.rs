//! Built-in default content.
//!
//! Everything here is data: page templates, the per-page required-section
//! catalogue and the default records for the list keys. Nothing in this module
//! touches storage.

mod collections;
mod pages;

pub use collections::*;
pub use pages::*;

use super::value_objects::{keys, StorageKey, Variant};
use serde_json::Value;

/// Default value materialized when a well-known key is read and found empty.
///
/// Covers the list keys, the structure record and `page_<id>` for known page
/// ids. Draft keys and unknown keys have no default.
pub fn default_value_for_key(key: &str) -> Option<Value> {
    let value = match key {
        keys::NEWS_ITEMS => serde_json::to_value(default_news_items()),
        keys::RESOURCES => serde_json::to_value(default_resources()),
        keys::STRUCTURE => serde_json::to_value(default_structure()),
        keys::MEDIA_LIBRARY => serde_json::to_value(default_media_library()),
        keys::GLOBAL_CONTENT => serde_json::to_value(default_global_content()),
        _ => {
            let (variant, page_id) = StorageKey::new(key).ok()?.page_target()?;
            if variant != Variant::Published {
                return None;
            }
            serde_json::to_value(default_page_content(&page_id)?)
        }
    };
    value.ok()
}

/// Key/value pairs written by a first-run initialization, in write order
pub fn seed_entries() -> Vec<(String, Value)> {
    let mut entries: Vec<(String, Value)> = initial_pages()
        .into_iter()
        .filter_map(|page| {
            let key = StorageKey::published(&page.id).to_string();
            serde_json::to_value(&page).ok().map(|value| (key, value))
        })
        .collect();

    for key in [
        keys::NEWS_ITEMS,
        keys::RESOURCES,
        keys::STRUCTURE,
        keys::MEDIA_LIBRARY,
        keys::GLOBAL_CONTENT,
    ] {
        if let Some(value) = default_value_for_key(key) {
            entries.push((key.to_string(), value));
        }
    }
    entries
}
