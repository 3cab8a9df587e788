//! Applicant form options and payload construction.
//!
//! The option lists mirror what the prediction service was trained on; cities
//! outside both tiers are sent as `"Unknown"` so the service treats them as
//! tier 3.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Occupations accepted by the prediction service.
pub const OCCUPATIONS: &[&str] = &[
    "retired",
    "freelancer",
    "student",
    "government_job",
    "business_owner",
    "unemployed",
    "private_job",
];

/// Default occupation when none is chosen.
pub const DEFAULT_OCCUPATION: &str = "private_job";

pub const TIER_1_CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
];

pub const TIER_2_CITIES: &[&str] = &[
    "Jaipur",
    "Chandigarh",
    "Indore",
    "Lucknow",
    "Patna",
    "Ranchi",
    "Visakhapatnam",
    "Coimbatore",
    "Bhopal",
    "Nagpur",
    "Vadodara",
    "Surat",
    "Rajkot",
    "Jodhpur",
    "Raipur",
    "Amritsar",
    "Varanasi",
    "Agra",
    "Dehradun",
    "Mysore",
    "Jabalpur",
    "Guwahati",
    "Thiruvananthapuram",
    "Ludhiana",
    "Nashik",
    "Allahabad",
    "Udaipur",
    "Aurangabad",
    "Hubli",
    "Belgaum",
    "Salem",
    "Vijayawada",
    "Tiruchirappalli",
    "Bhavnagar",
    "Gwalior",
    "Dhanbad",
    "Bareilly",
    "Aligarh",
    "Gaya",
    "Kozhikode",
    "Warangal",
    "Kolhapur",
    "Bilaspur",
    "Jalandhar",
    "Noida",
    "Guntur",
    "Asansol",
    "Siliguri",
];

/// Pseudo-city for anything outside the tier lists.
pub const OTHER_CITY: &str = "Other";
/// What [`OTHER_CITY`] is sent as.
pub const UNKNOWN_CITY: &str = "Unknown";

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 119;
pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MIN_HEIGHT_M: f64 = 0.1;
pub const MAX_HEIGHT_M: f64 = 2.49;
pub const MIN_INCOME_LPA: f64 = 0.1;

/// Every selectable city: both tiers sorted, then [`OTHER_CITY`].
pub fn city_options() -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = TIER_1_CITIES
        .iter()
        .chain(TIER_2_CITIES.iter())
        .copied()
        .collect();
    cities.sort_unstable();
    cities.push(OTHER_CITY);
    cities
}

/// Form validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },

    #[error("unknown occupation: {0} (expected one of {})", OCCUPATIONS.join(", "))]
    UnknownOccupation(String),

    #[error("unknown city: {0} (pick a listed city or \"Other\")")]
    UnknownCity(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Values collected from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantForm {
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in meters
    pub height: f64,
    /// Annual income in lakh per annum
    pub income_lpa: f64,
    pub smoker: bool,
    /// A listed city or [`OTHER_CITY`]
    pub city: String,
    pub occupation: String,
}

impl Default for ApplicantForm {
    fn default() -> Self {
        Self {
            age: 30,
            weight: 70.0,
            height: 1.75,
            income_lpa: 10.0,
            smoker: false,
            city: "Mumbai".to_string(),
            occupation: DEFAULT_OCCUPATION.to_string(),
        }
    }
}

/// JSON body sent to the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: String,
}

impl ApplicantForm {
    /// Check the form bounds and build the request body.
    pub fn to_request(&self) -> FormResult<PredictionRequest> {
        check_range("age", f64::from(self.age), f64::from(MIN_AGE), f64::from(MAX_AGE))?;
        check_min("weight", self.weight, MIN_WEIGHT_KG)?;
        check_range("height", self.height, MIN_HEIGHT_M, MAX_HEIGHT_M)?;
        check_min("income_lpa", self.income_lpa, MIN_INCOME_LPA)?;

        if !OCCUPATIONS.contains(&self.occupation.as_str()) {
            return Err(FormError::UnknownOccupation(self.occupation.clone()));
        }

        let city = if self.city == OTHER_CITY {
            UNKNOWN_CITY.to_string()
        } else if TIER_1_CITIES.contains(&self.city.as_str())
            || TIER_2_CITIES.contains(&self.city.as_str())
        {
            self.city.clone()
        } else {
            return Err(FormError::UnknownCity(self.city.clone()));
        };

        Ok(PredictionRequest {
            age: self.age,
            weight: self.weight,
            height: self.height,
            income_lpa: self.income_lpa,
            smoker: self.smoker,
            city,
            occupation: self.occupation.clone(),
        })
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> FormResult<()> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(FormError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

fn check_min(field: &'static str, value: f64, min: f64) -> FormResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(FormError::BelowMinimum { field, min, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_form_is_valid() {
        let request = ApplicantForm::default().to_request().unwrap();
        assert_eq!(request.city, "Mumbai");
        assert_eq!(request.occupation, "private_job");
        assert!(!request.smoker);
    }

    #[test]
    fn test_other_city_is_sent_as_unknown() {
        let form = ApplicantForm {
            city: OTHER_CITY.into(),
            ..Default::default()
        };
        assert_eq!(form.to_request().unwrap().city, UNKNOWN_CITY);
    }

    #[test]
    fn test_unlisted_city_is_rejected() {
        let form = ApplicantForm {
            city: "Atlantis".into(),
            ..Default::default()
        };
        assert!(matches!(form.to_request(), Err(FormError::UnknownCity(_))));
    }

    #[test]
    fn test_unknown_occupation_is_rejected() {
        let form = ApplicantForm {
            occupation: "astronaut".into(),
            ..Default::default()
        };
        let err = form.to_request().unwrap_err();
        assert!(err.to_string().contains("private_job"));
    }

    #[test]
    fn test_bounds() {
        let cases = [
            ApplicantForm { age: 0, ..Default::default() },
            ApplicantForm { age: 120, ..Default::default() },
            ApplicantForm { height: 2.5, ..Default::default() },
            ApplicantForm { height: 0.05, ..Default::default() },
        ];
        for form in cases {
            assert!(
                matches!(form.to_request(), Err(FormError::OutOfRange { .. })),
                "{:?}",
                form
            );
        }

        let cases = [
            ApplicantForm { weight: 0.5, ..Default::default() },
            ApplicantForm { income_lpa: 0.0, ..Default::default() },
            ApplicantForm { weight: f64::NAN, ..Default::default() },
        ];
        for form in cases {
            assert!(
                matches!(form.to_request(), Err(FormError::BelowMinimum { .. })),
                "{:?}",
                form
            );
        }
    }

    #[test]
    fn test_open_ended_bound_message() {
        let form = ApplicantForm { weight: 0.5, ..Default::default() };
        let message = form.to_request().unwrap_err().to_string();
        assert_eq!(message, "weight must be at least 1 (got 0.5)");
        assert!(!message.contains("inf"));
    }

    #[test]
    fn test_city_options_sorted_with_other_last() {
        let cities = city_options();
        assert_eq!(cities.len(), TIER_1_CITIES.len() + TIER_2_CITIES.len() + 1);
        assert_eq!(cities.last(), Some(&OTHER_CITY));
        assert!(cities[..cities.len() - 1].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_request_field_names() {
        let json = serde_json::to_value(ApplicantForm::default().to_request().unwrap()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["age", "city", "height", "income_lpa", "occupation", "smoker", "weight"]
        );
    }

    proptest! {
        #[test]
        fn prop_in_range_forms_are_accepted(
            age in MIN_AGE..=MAX_AGE,
            weight in MIN_WEIGHT_KG..500.0,
            height in MIN_HEIGHT_M..=MAX_HEIGHT_M,
            income in MIN_INCOME_LPA..1000.0,
            smoker in any::<bool>(),
        ) {
            let form = ApplicantForm { age, weight, height, income_lpa: income, smoker, ..Default::default() };
            let request = form.to_request().unwrap();
            prop_assert_eq!(request.age, age);
            prop_assert_eq!(request.smoker, smoker);
        }
    }
}
