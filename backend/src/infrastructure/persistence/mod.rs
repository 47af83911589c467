mod local_storage;
mod schema;
mod sqlite_store;

pub use local_storage::{SharedLocalStorage, StorageChange, TabStorage};
pub use schema::initialize_database;
pub use sqlite_store::SqliteKeyValueStore;
