//! SQLite schema definition.

/// Schema for the embedded patient store.
///
/// Each row holds the raw fields of one patient as a JSON object. Derived
/// fields are never written here.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    id TEXT PRIMARY KEY NOT NULL,
    record TEXT NOT NULL              -- JSON object of raw fields
);
"#;
