//! Surname-correction store
//!
//! Persisted mapping from the lowercase last token of a participant's
//! original name to a corrected localized surname token. Loaded once per
//! session and applied at merge time; the edit surface can teach it new
//! corrections.

use std::collections::HashMap;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::Result;

/// Surname correction store
pub struct SurnameStore<'a> {
    conn: &'a Connection,
}

impl<'a> SurnameStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Learn or update a correction. The key is lowercased on the way in.
    pub fn save(&self, surname: &str, corrected: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO surname_corrections (surname, corrected, updated_at)
             VALUES (?1, ?2, ?3)",
            params![
                surname.trim().to_lowercase(),
                corrected.trim(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Look up a single correction.
    pub fn get(&self, surname: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT corrected FROM surname_corrections WHERE surname = ?1",
            params![surname.trim().to_lowercase()],
            |row| row.get(0),
        );
        match result {
            Ok(corrected) => Ok(Some(corrected)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the full dictionary for merge-time application.
    pub fn load_all(&self) -> Result<HashMap<String, String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT surname, corrected FROM surname_corrections")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut map = HashMap::new();
        for row in rows {
            let (surname, corrected): (String, String) = row?;
            map.insert(surname, corrected);
        }
        Ok(map)
    }

    pub fn delete(&self, surname: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM surname_corrections WHERE surname = ?1",
            params![surname.trim().to_lowercase()],
        )?;
        Ok(())
    }
}

/// Apply a correction to a localized name: when the dictionary knows the
/// lowercase last token of the original name, the last token of the
/// localized name is replaced with the corrected form. All other tokens are
/// untouched.
pub fn apply_correction(
    original_name: &str,
    local_name: &str,
    corrections: &HashMap<String, String>,
) -> String {
    let key = match original_name.split_whitespace().last() {
        Some(last) => last.to_lowercase(),
        None => return local_name.to_string(),
    };
    let corrected = match corrections.get(&key) {
        Some(c) => c,
        None => return local_name.to_string(),
    };

    let mut tokens: Vec<&str> = local_name.split_whitespace().collect();
    match tokens.last_mut() {
        Some(last) => *last = corrected,
        None => return local_name.to_string(),
    }
    tokens.join(" ")
}
