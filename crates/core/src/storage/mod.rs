//! SQLite storage layer for Avasa
//!
//! Holds the small persisted state that outlives a session - currently the
//! learned surname-correction dictionary. Participant records themselves are
//! session-scoped and never stored.

mod migrations;
mod surnames;

use std::path::Path;

use rusqlite::Connection;
use tracing::instrument;

use crate::error::Result;

pub use surnames::{apply_correction, SurnameStore};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    /// Get the surname-correction store
    pub fn surnames(&self) -> SurnameStore<'_> {
        SurnameStore::new(&self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("avasa.db");
        let db = Database::open(&path).unwrap();
        assert!(db.schema_version() >= 1);

        // Reopen and confirm persistence
        db.surnames().save("deshmukh", "देशमुख").unwrap();
        drop(db);
        let db = Database::open(&path).unwrap();
        assert_eq!(
            db.surnames().get("deshmukh").unwrap().as_deref(),
            Some("देशमुख")
        );
    }
}
