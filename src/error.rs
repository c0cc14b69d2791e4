use actix_web::{error, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;
use crate::services::GeoError;

/// Errors returned to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request shape or parameter constraints rejected
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A required server-side setting is missing
    #[error("Server misconfiguration: {0}")]
    Misconfiguration(String),

    #[error("Upstream request failed: {0}")]
    BadGateway(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Misconfiguration(_) => "server_misconfiguration",
            ApiError::BadGateway(_) => "upstream_failure",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        }
    }
}

impl From<GeoError> for ApiError {
    fn from(err: GeoError) -> Self {
        match err {
            missing @ GeoError::MissingApiKey => ApiError::Misconfiguration(missing.to_string()),
            GeoError::Upstream(e) => ApiError::BadGateway(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Misconfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::Validation(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::Validation(format!("Invalid query: {}", err)).into()
}
