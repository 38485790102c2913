//! Error types for Atheneum server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric application error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    InvalidCredentials = 2,
    NotAuthenticated = 3,
    Forbidden = 4,
    BadValue = 5,
    NoSuchResource = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Credential check failed: unknown username or password mismatch.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No valid session token on a route that requires one.
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// Session present but access level does not permit the view.
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Input validation failed; carries every violated rule, not just the first.
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Field-level violations for validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Where the client should navigate to recover (login page, dashboard).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details, redirect) = match self {
            AppError::Authentication(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::InvalidCredentials,
                msg,
                vec![],
                Some("/login".to_string()),
            ),
            AppError::Unauthenticated(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::NotAuthenticated,
                msg,
                vec![],
                Some("/login".to_string()),
            ),
            AppError::Authorization(msg) => (
                StatusCode::FORBIDDEN,
                ErrorCode::Forbidden,
                msg,
                vec![],
                Some("/dashboard".to_string()),
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::BadValue,
                "Validation failed".to_string(),
                errors,
                None,
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorCode::NoSuchResource,
                msg,
                vec![],
                None,
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                    vec![],
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            details,
            redirect,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
