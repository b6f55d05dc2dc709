//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path, creating parent directories
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply busy timeout and journal mode from the store configuration
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.busy_timeout(config.busy_timeout())
        .map_err(from_rusqlite)?;

    // journal_mode answers with the mode actually in effect (in-memory DBs stay "memory")
    let mode: String = conn
        .pragma_update_and_check(
            None,
            "journal_mode",
            config.journal_mode.pragma_value(),
            |row| row.get(0),
        )
        .map_err(from_rusqlite)?;

    tracing::debug!(
        requested = config.journal_mode.pragma_value(),
        effective = %mode,
        "configured sqlite journal mode"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_in_memory() {
        let conn = open_in_memory().unwrap();
        assert!(configure(&conn, &StoreConfig::default()).is_ok());
    }

    #[test]
    fn test_open_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pets.db");
        let conn = open(&path).unwrap();
        configure(&conn, &StoreConfig::at(&path)).unwrap();
        assert!(path.exists());
    }
}
