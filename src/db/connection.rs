use std::path::Path;

use rusqlite::Connection;

use crate::errors::ProbeError;

/// Handle on the append-only scan log.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn new(path: &Path) -> Result<Self, ProbeError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| ProbeError::Database(format!("Failed to open database: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| ProbeError::Database(format!("Failed to set pragmas: {}", e)))?;

        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self, ProbeError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ProbeError::Database(format!("Failed to open in-memory db: {}", e)))?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Safe to call repeatedly; the schema uses IF NOT EXISTS throughout.
    fn initialize(&self) -> Result<(), ProbeError> {
        self.conn
            .execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| ProbeError::Database(format!("Failed to create tables: {}", e)))
    }
}
