use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// HTTP-facing error wrapper over the service layer.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ServiceError::Model(models::errors::ModelError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let detail = self.0.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %detail, "internal error");
        }
        (status, Json(serde_json::json!({"error": kind, "detail": detail}))).into_response()
    }
}

/// JSON error for handlers outside the service-layer taxonomy (auth),
/// same `{"error", "detail"}` body shape as `ApiError`.
#[derive(Debug)]
pub struct JsonError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub detail: String,
}

impl JsonError {
    pub fn new(status: StatusCode, kind: &'static str, detail: impl Into<String>) -> Self {
        Self { status, kind, detail: detail.into() }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", detail)
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.detail, "internal error");
        }
        (self.status, Json(serde_json::json!({"error": self.kind, "detail": self.detail})))
            .into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
