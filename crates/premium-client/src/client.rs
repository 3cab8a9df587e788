//! HTTP client for the premium prediction service.

use std::fmt;

use log::debug;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::form::{FormError, PredictionRequest};

/// Where the prediction service listens by default.
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8000/predict";

/// Prediction errors.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Invalid input: {0}")]
    Form(#[from] FormError),

    #[error("Could not connect to the API. Please ensure the backend is running. Error: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Failed to read response body (status {status}): {source}")]
    Body {
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    #[error("API Error: Status Code {status}")]
    Status { status: u16, detail: ErrorDetail },

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

pub type PredictResult<T> = Result<T, PredictError>;

/// Body of a non-200 response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Json(Value),
    Text(String),
}

impl ErrorDetail {
    fn parse(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => ErrorDetail::Json(value),
            Err(_) => ErrorDetail::Text(body.to_string()),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            ErrorDetail::Text(text) => f.write_str(text),
        }
    }
}

/// Pull `predicted_category` out of a successful response body.
pub fn parse_prediction(body: &str) -> PredictResult<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| PredictError::InvalidFormat(format!("response is not JSON: {}", e)))?;

    match value.get("predicted_category") {
        Some(Value::String(category)) => Ok(category.clone()),
        Some(Value::Null) | None => Err(PredictError::InvalidFormat(
            "no predicted_category in response".into(),
        )),
        Some(other) => Ok(other.to_string()),
    }
}

/// Client for the `/predict` endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    url: String,
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(DEFAULT_PREDICT_URL)
    }
}

impl PredictionClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post the request and return the predicted category. No retries.
    pub async fn predict(&self, request: &PredictionRequest) -> PredictResult<String> {
        debug!("POST {} {:?}", self.url, request);
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(PredictError::Connect)?;

        let status = response.status();
        let body = response.text().await.map_err(|source| PredictError::Body {
            status: status.as_u16(),
            source,
        })?;

        if status != StatusCode::OK {
            return Err(PredictError::Status {
                status: status.as_u16(),
                detail: ErrorDetail::parse(&body),
            });
        }
        parse_prediction(&body)
    }
}

/// Text shown to the user for a prediction attempt.
pub fn render_outcome(outcome: &PredictResult<String>) -> String {
    match outcome {
        Ok(category) => format!("Predicted Premium Category: {}", category),
        Err(e @ PredictError::Status { detail, .. }) => format!("{}\n{}", e, detail),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prediction() {
        let category = parse_prediction(r#"{"predicted_category": "High", "confidence": 0.8}"#).unwrap();
        assert_eq!(category, "High");
    }

    #[test]
    fn test_parse_prediction_missing_field() {
        let err = parse_prediction(r#"{"result": "High"}"#).unwrap_err();
        assert!(matches!(err, PredictError::InvalidFormat(_)));

        let err = parse_prediction(r#"{"predicted_category": null}"#).unwrap_err();
        assert!(matches!(err, PredictError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_prediction_not_json() {
        assert!(matches!(
            parse_prediction("<html>oops</html>"),
            Err(PredictError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_error_detail_prefers_json() {
        assert_eq!(
            ErrorDetail::parse(r#"{"detail": "bad"}"#),
            ErrorDetail::Json(serde_json::json!({"detail": "bad"}))
        );
        assert_eq!(
            ErrorDetail::parse("Internal Server Error"),
            ErrorDetail::Text("Internal Server Error".into())
        );
    }

    #[test]
    fn test_render_outcome() {
        assert_eq!(
            render_outcome(&Ok("Medium".into())),
            "Predicted Premium Category: Medium"
        );

        let status = PredictError::Status {
            status: 422,
            detail: ErrorDetail::Text("missing age".into()),
        };
        assert_eq!(
            render_outcome(&Err(status)),
            "API Error: Status Code 422\nmissing age"
        );
    }
}
