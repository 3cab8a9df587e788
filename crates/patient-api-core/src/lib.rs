//! Patient API Core Library
//!
//! Patient records keyed by a caller-supplied id, a body-mass-index
//! classifier, and the storage they live in.
//!
//! # Architecture
//!
//! ```text
//!   PatientInput ──validate──▶ Patient ──view()──▶ PatientView
//!                                 │                 (+ bmi, category)
//!                                 ▼
//!                          PatientStore
//!                      load / save / get / list / insert / update
//!                          │                    │
//!                   JsonFileStore          SqliteStore
//!                 (patients.json)        (patients table)
//! ```
//!
//! # Core Principle
//!
//! **Derived fields are never stored.** `bmi` and `category` are recomputed
//! from the raw fields every time a record is handed back to a caller.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Gender, PatientUpdate, PatientView)
//! - [`classifier`]: BMI computation and category ranges
//! - [`db`]: Store trait plus JSON file and SQLite backends

pub mod classifier;
pub mod db;
pub mod models;

// Re-export commonly used types
pub use classifier::{classify, Category, Classification};
pub use db::{JsonFileStore, PatientMap, PatientStore, SqliteStore, StoreError, StoreResult};
pub use models::{
    FieldError, Gender, Patient, PatientInput, PatientUpdate, PatientView, ValidationError,
};
