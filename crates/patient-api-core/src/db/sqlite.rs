//! Embedded SQLite store.

use std::path::Path;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{PatientMap, PatientStore, StoreError, StoreResult, SCHEMA};
use crate::models::Patient;

/// Keeps each patient as a JSON row in SQLite behind the same store contract
/// as [`super::JsonFileStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl PatientStore for SqliteStore {
    fn load(&self) -> StoreResult<PatientMap> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, record FROM patients ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut patients = PatientMap::new();
        for row in rows {
            let (id, record) = row?;
            patients.insert(id, serde_json::from_str(&record)?);
        }
        Ok(patients)
    }

    /// Replaces every row in one transaction.
    fn save(&self, patients: &PatientMap) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM patients", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO patients (id, record) VALUES (?1, ?2)")?;
            for (id, patient) in patients {
                stmt.execute(params![id, serde_json::to_string(patient)?])?;
            }
        }
        tx.commit()?;

        debug!("Wrote {} patients to sqlite", patients.len());
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Patient> {
        let record: Option<String> = self
            .conn
            .query_row("SELECT record FROM patients WHERE id = ?", [id], |row| {
                row.get(0)
            })
            .optional()?;

        match record {
            Some(record) => Ok(serde_json::from_str(&record)?),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
