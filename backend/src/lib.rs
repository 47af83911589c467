//! Content storage and synchronization for a bilingual (fr/ar) NGO website.
//!
//! Pages are kept in two variants, published (`page_<id>`) and draft
//! (`editor_<id>`), in a key-value store that is local in development and
//! served by a worker in production.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{ContentRepository, ContentSeeder, ContentSite, StorageAdapter, SyncService};
pub use config::{ContentConfig, Environment};
