//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use patient_api_core::{FieldError, StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Store task failed: {}", e))
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            errors: Vec::new(),
        }
    }
}

impl ApiError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, ErrorBody::new("Patient not found"))
            }
            ApiError::Store(StoreError::AlreadyExists(_)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("Patient already exists"))
            }
            ApiError::Store(StoreError::Validation(e)) | ApiError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    detail: "Validation failed".to_string(),
                    errors: e.errors,
                },
            ),
            ApiError::InvalidBody(detail) => (StatusCode::UNPROCESSABLE_ENTITY, ErrorBody::new(detail)),
            other => {
                error!("{}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_client_error() {
            warn!("{}: {}", status, body.detail);
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Store(StoreError::NotFound("P9".into())), StatusCode::NOT_FOUND),
            (
                ApiError::Store(StoreError::AlreadyExists("P1".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::InvalidBody("missing field".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let err = ApiError::Validation(ValidationError {
            errors: vec![FieldError {
                field: "age".into(),
                message: "must be between 1 and 119".into(),
            }],
        });
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["errors"][0]["field"], "age");
    }

    #[test]
    fn test_plain_errors_omit_field_list() {
        let (_, body) = ApiError::Store(StoreError::NotFound("P9".into())).status_and_body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detail"], "Patient not found");
        assert!(json.get("errors").is_none());
    }
}
