//! Error handling module
//!
//! Defines error types and handling logic used in the project

use crate::utils::logging::truncate_content;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of upstream body characters written to the log
const MAX_LOGGED_BODY: usize = 500;

/// Validation message for a request without a usable location
pub const MISSING_LOCATION: &str = "Provide city or coordinates";

/// Application error types
///
/// Every variant maps to a fixed status code and a caller-safe message.
#[derive(Error, Debug)]
pub enum AppError {
    /// No API key configured on the server
    #[error("Server configuration error")]
    Configuration,

    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Request method outside the GET-only policy
    #[error("Method not allowed")]
    MethodNotAllowed(String),

    /// Request came from an origin other than the allowed one
    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    /// Provider rejected the API key
    #[error("Invalid API Key")]
    UpstreamAuth,

    /// Provider found no matching location
    #[error("Location not found")]
    UpstreamNotFound,

    /// Any other provider failure
    #[error("Weather service unavailable")]
    UpstreamUnavailable,
}

/// Failures talking to the weather provider
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Provider answered with a non-success status
    #[error("Upstream responded with status {status}")]
    Status { status: u16, body: String },

    /// Provider did not answer within the configured timeout
    #[error("Upstream request timed out")]
    Timeout,

    /// Network or protocol failure
    #[error("Upstream request failed: {0}")]
    Transport(reqwest::Error),

    /// Response body was not valid JSON for the expected schema
    #[error("Failed to parse upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response parsed but lacked a required element
    #[error("Malformed upstream response: {0}")]
    Malformed(String),
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Remediation hint (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::OriginNotAllowed(_) => StatusCode::FORBIDDEN,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UpstreamAuth => StatusCode::UNAUTHORIZED,
            AppError::UpstreamNotFound => StatusCode::NOT_FOUND,
            AppError::Configuration | AppError::UpstreamUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to the JSON body returned to callers
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::OriginNotAllowed(_) => ErrorResponse {
                error: "Origin not allowed".to_string(),
                solution: None,
            },
            AppError::UpstreamAuth => ErrorResponse {
                error: self.to_string(),
                solution: Some(format!(
                    "Update {} in .env file",
                    crate::config::settings::API_KEY_VAR
                )),
            },
            _ => ErrorResponse {
                error: self.to_string(),
                solution: None,
            },
        }
    }
}

impl UpstreamError {
    /// Status code returned by the provider, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Detail for the operator log: the response body if present, else the failure description
    pub fn detail(&self) -> String {
        match self {
            UpstreamError::Status { body, .. } if !body.trim().is_empty() => {
                truncate_content(body.trim(), MAX_LOGGED_BODY)
            }
            _ => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            // The request URL carries the appid query parameter.
            UpstreamError::Transport(err.without_url())
        }
    }
}

/// Classify an upstream failure into the caller-facing taxonomy
///
/// 401 and 404 keep their meaning; everything else is reported as unavailable.
/// The raw detail only goes to the log.
pub fn map_upstream_error(err: &UpstreamError) -> AppError {
    tracing::error!("API Error: {}", err.detail());

    match err.status() {
        Some(401) => AppError::UpstreamAuth,
        Some(404) => AppError::UpstreamNotFound,
        _ => AppError::UpstreamUnavailable,
    }
}

/// A query string that does not fit the location shape (repeated keys, bad
/// encoding) gets the same answer as a missing location.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        AppError::Validation(MISSING_LOCATION.to_string())
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        map_upstream_error(&err)
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self, status);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
