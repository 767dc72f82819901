use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Client errors of the REST endpoints, all reported as `400` with an
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing \"email\" field")]
    MissingEmail,
    #[error("Missing \"emails\" array")]
    MissingEmails,
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Failures that stop the service from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
