//! Domain models for the patient API.

mod patient;
mod update;
mod validation;

pub use patient::*;
pub use update::*;
pub use validation::{FieldError, ValidationError};
