//! Partial update input.

use serde::{Deserialize, Serialize};

/// Fields to change on an existing patient. Absent fields keep their stored
/// value; the id cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    /// Height in meters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
}

impl PatientUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height.is_none()
            && self.weight.is_none()
    }
}
