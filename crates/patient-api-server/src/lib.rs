//! HTTP surface for the patient record store.
//!
//! | Method | Path              | Result                                   |
//! |--------|-------------------|------------------------------------------|
//! | GET    | `/`               | welcome message                          |
//! | GET    | `/patients`       | every record with `bmi` and `category`   |
//! | GET    | `/patients/:id`   | one record, 404 if absent                |
//! | POST   | `/patients`       | insert, 400 if the id exists             |
//! | PATCH  | `/patients/:id`   | partial update, 404 if absent            |
//!
//! Invalid field values and malformed bodies are rejected with 422.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{Backend, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
