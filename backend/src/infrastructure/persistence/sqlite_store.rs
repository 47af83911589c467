use crate::application::repositories::{KeyEntry, KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed implementation of the KeyValueStore trait.
///
/// Plays the browser's local storage in development and the managed store
/// behind the worker in production.
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    /// Create a new store with the given connection
    pub fn new(conn: Connection) -> SqliteResult<Self> {
        super::schema::initialize_database(&conn)?;
        Ok(SqliteKeyValueStore {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new in-memory store (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Create a new file-based store
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        Self::new(Connection::open(path)?)
    }

    fn connection(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("SQLite connection lock poisoned".to_string()))
    }
}

fn database_error(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(format!("Database error: {}", e))
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.connection()?;
        conn.query_row(
            "SELECT value FROM kv_entries WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(database_error)
    }

    async fn put(&self, key: &str, value: String) -> StoreResult<()> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(database_error)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let conn = self.connection()?;
        conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
            .map_err(database_error)?;
        Ok(())
    }

    async fn list(&self, prefix: Option<&str>) -> StoreResult<Vec<KeyEntry>> {
        let conn = self.connection()?;
        let mut stmt = conn
            .prepare(
                "SELECT key FROM kv_entries
                 WHERE substr(key, 1, length(?1)) = ?1
                 ORDER BY key",
            )
            .map_err(database_error)?;

        let names = stmt
            .query_map(params![prefix.unwrap_or("")], |row| row.get::<_, String>(0))
            .map_err(database_error)?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(database_error)?;

        Ok(names.into_iter().map(|name| KeyEntry { name }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = SqliteKeyValueStore::new_in_memory().unwrap();

        store.put("page_home", r#"{"id":"home"}"#.to_string()).await.unwrap();

        assert_eq!(
            store.get("page_home").await.unwrap().as_deref(),
            Some(r#"{"id":"home"}"#)
        );
        assert!(store.get("page_about").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = SqliteKeyValueStore::new_in_memory().unwrap();

        store.put("language", "\"fr\"".to_string()).await.unwrap();
        store.put("language", "\"ar\"".to_string()).await.unwrap();

        assert_eq!(store.get("language").await.unwrap().as_deref(), Some("\"ar\""));
        assert_eq!(store.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = SqliteKeyValueStore::new_in_memory().unwrap();

        store.put("resources", "[]".to_string()).await.unwrap();
        store.delete("resources").await.unwrap();
        store.delete("resources").await.unwrap();

        assert!(store.get("resources").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_with_prefix() {
        let store = SqliteKeyValueStore::new_in_memory().unwrap();
        for key in ["page_home", "editor_home", "page_about", "newsItems"] {
            store.put(key, "{}".to_string()).await.unwrap();
        }

        let pages: Vec<String> = store
            .list(Some("page_"))
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(pages, vec!["page_about", "page_home"]);

        assert_eq!(store.list(None).await.unwrap().len(), 4);
        // LIKE wildcards in the prefix are matched literally
        assert!(store.list(Some("page%")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.db");

        {
            let store = SqliteKeyValueStore::new_with_path(&path).unwrap();
            store.put("dbInitialized", "true".to_string()).await.unwrap();
        }

        let reopened = SqliteKeyValueStore::new_with_path(&path).unwrap();
        assert_eq!(
            reopened.get("dbInitialized").await.unwrap().as_deref(),
            Some("true")
        );
    }
}
