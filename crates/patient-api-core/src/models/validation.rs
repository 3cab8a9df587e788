//! Field-level validation errors.

use std::fmt;

use serde::Serialize;

/// A single rejected field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as it appears on the wire
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

/// One or more fields failed their constraints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Whether `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid patient: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collects failures so every bad field is reported at once.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub(crate) fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: message.into(),
            });
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_validator_passes() {
        assert!(Validator::default().finish().is_ok());
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut v = Validator::default();
        v.check(false, "age", "must be between 1 and 119");
        v.check(true, "name", "unused");
        v.check(false, "height", "must be greater than 0");

        let err = v.finish().unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert!(err.has_field("age"));
        assert!(!err.has_field("name"));
        assert_eq!(
            err.to_string(),
            "invalid patient: age: must be between 1 and 119; height: must be greater than 0"
        );
    }
}
