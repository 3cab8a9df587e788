//! Record storage for patients.
//!
//! Backends implement [`PatientStore::load`] and [`PatientStore::save`]; the
//! keyed operations are built on top as full load-modify-save cycles, so every
//! call observes the backing document as of its own load.

mod json_file;
mod schema;
mod sqlite;

pub use json_file::*;
pub use schema::*;
pub use sqlite::*;

use std::collections::BTreeMap;

use log::{debug, info};
use thiserror::Error;

use crate::models::{Patient, PatientUpdate, PatientView, ValidationError};

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Patient already exists: {0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every stored patient keyed by id.
pub type PatientMap = BTreeMap<String, Patient>;

/// Keyed collection of raw patient records.
pub trait PatientStore {
    /// Read every record. A missing backing document is an empty store.
    fn load(&self) -> StoreResult<PatientMap>;

    /// Replace the whole backing document with `patients`.
    fn save(&self, patients: &PatientMap) -> StoreResult<()>;

    /// Raw fields of one record.
    fn get(&self, id: &str) -> StoreResult<Patient> {
        self.load()?
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Every record with its derived fields.
    fn list(&self) -> StoreResult<BTreeMap<String, PatientView>> {
        let patients = self.load()?;
        debug!("Listing {} patients", patients.len());
        Ok(patients
            .into_iter()
            .map(|(id, patient)| (id, patient.view()))
            .collect())
    }

    /// Add a new record. Fails without writing if the id is taken.
    fn insert(&self, patient: Patient) -> StoreResult<PatientView> {
        let mut patients = self.load()?;
        if patients.contains_key(patient.id()) {
            return Err(StoreError::AlreadyExists(patient.id().to_string()));
        }

        let view = patient.view();
        patients.insert(patient.id().to_string(), patient);
        self.save(&patients)?;

        info!("Inserted patient {}", view.patient.id());
        Ok(view)
    }

    /// Merge `update` into an existing record and write it back. An empty
    /// update leaves the backing document untouched.
    fn update(&self, id: &str, update: &PatientUpdate) -> StoreResult<PatientView> {
        let mut patients = self.load()?;
        let current = patients
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if update.is_empty() {
            debug!("Empty update for patient {}, nothing to write", id);
            return Ok(current.view());
        }

        let updated = current.apply(update)?;
        let view = updated.view();
        patients.insert(id.to_string(), updated);
        self.save(&patients)?;

        info!("Updated patient {}", id);
        Ok(view)
    }
}
