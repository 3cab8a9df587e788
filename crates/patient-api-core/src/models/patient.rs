//! Patient models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::update::PatientUpdate;
use super::validation::{ValidationError, Validator};
use crate::classifier::{classify, Category, Classification};

/// Youngest accepted age, inclusive.
pub const MIN_AGE: i64 = 1;
/// Oldest accepted age, inclusive.
pub const MAX_AGE: i64 = 119;

/// Patient gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Others];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Others => "others",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("must be one of: male, female, others (got {:?})", s))
    }
}

/// Unvalidated patient fields as received from a client or read from storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientInput {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: i64,
    pub gender: String,
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

/// A validated patient record.
///
/// Holds only the raw fields; BMI and category are derived on demand through
/// [`Patient::view`]. The only ways to obtain one are `TryFrom<PatientInput>`
/// and deserialization, which goes through the same checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "PatientInput")]
pub struct Patient {
    id: String,
    name: String,
    city: String,
    age: u8,
    gender: Gender,
    height: f64,
    weight: f64,
}

impl TryFrom<PatientInput> for Patient {
    type Error = ValidationError;

    fn try_from(input: PatientInput) -> Result<Self, Self::Error> {
        let mut v = Validator::default();
        v.check(!input.id.trim().is_empty(), "id", "must not be empty");
        v.check(
            (MIN_AGE..=MAX_AGE).contains(&input.age),
            "age",
            format!("must be between {} and {}", MIN_AGE, MAX_AGE),
        );
        let gender = input.gender.parse::<Gender>();
        if let Err(message) = &gender {
            v.check(false, "gender", message.clone());
        }
        v.check(
            input.height.is_finite() && input.height > 0.0,
            "height",
            "must be greater than 0",
        );
        v.check(
            input.weight.is_finite() && input.weight > 0.0,
            "weight",
            "must be greater than 0",
        );
        v.finish()?;

        Ok(Self {
            id: input.id,
            name: input.name,
            city: input.city,
            // Range checked above
            age: input.age as u8,
            // Err already recorded, so finish() returned early
            gender: gender.unwrap_or(Gender::Others),
            height: input.height,
            weight: input.weight,
        })
    }
}

impl From<Patient> for PatientInput {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            city: patient.city,
            age: i64::from(patient.age),
            gender: patient.gender.as_str().to_string(),
            height: patient.height,
            weight: patient.weight,
        }
    }
}

impl Patient {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Height in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Classify this patient's height and weight.
    pub fn classification(&self) -> Classification {
        classify(self.height, self.weight)
    }

    /// Project this record together with freshly computed derived fields.
    pub fn view(&self) -> PatientView {
        let Classification { bmi, category } = self.classification();
        PatientView {
            patient: self.clone(),
            bmi,
            category,
        }
    }

    /// Merge the present fields of `update` into a copy of this record and
    /// re-validate the result. The id never changes.
    pub fn apply(&self, update: &PatientUpdate) -> Result<Patient, ValidationError> {
        let mut input = PatientInput::from(self.clone());
        if let Some(name) = &update.name {
            input.name = name.clone();
        }
        if let Some(city) = &update.city {
            input.city = city.clone();
        }
        if let Some(age) = update.age {
            input.age = age;
        }
        if let Some(gender) = &update.gender {
            input.gender = gender.clone();
        }
        if let Some(height) = update.height {
            input.height = height;
        }
        if let Some(weight) = update.weight {
            input.weight = weight;
        }
        Patient::try_from(input)
    }
}

/// A patient record plus its derived fields, as returned to callers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatientView {
    #[serde(flatten)]
    pub patient: Patient,
    pub bmi: f64,
    pub category: Category,
}
