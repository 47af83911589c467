use rusqlite::{Connection, Result};

/// Initialize the SQLite database with the key-value schema.
/// This function is idempotent and can be safely called multiple times.
pub fn initialize_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_entries (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_tables(conn: &Connection) -> Vec<String> {
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>>>()
            .unwrap()
    }

    #[test]
    fn test_initialize_database() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_database(&conn).unwrap();

        assert_eq!(user_tables(&conn), vec!["kv_entries".to_string()]);
    }

    #[test]
    fn test_initialize_database_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES ('language', '\"fr\"', 'now')",
            [],
        )
        .unwrap();
        initialize_database(&conn).unwrap();

        // Existing rows survive a second initialization
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(user_tables(&conn).len(), 1);
    }
}
