//! Client side of the insurance premium predictor.
//!
//! Collects applicant details, checks them against the form bounds, posts
//! them to the prediction service and renders the returned category. This
//! crate shares no code or data with the patient record store.

pub mod client;
pub mod form;

pub use client::*;
pub use form::*;
