//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Each variant corresponds to one failure class of the API
//! (missing fields, duplicate identities, bad credentials, bad tokens,
//! missing records, internal faults) and knows its HTTP status code.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers can
//! return `Result<_, AppError>` and have failures rendered as the standard
//! `{success, message}` response envelope. `From` implementations for
//! `bcrypt::BcryptError` and `jsonwebtoken::errors::Error` allow conversion
//! with the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// A required request body field is absent (HTTP 400).
    MissingField(String),
    /// Registration collides with an existing username or email (HTTP 400).
    DuplicateIdentity(String),
    /// Login failed. Unknown identifier and wrong password produce this same
    /// variant so callers cannot probe for account existence (HTTP 401).
    InvalidCredentials,
    /// A protected route was called without a bearer token (HTTP 401).
    MissingToken,
    /// The bearer token is malformed, signed with a different secret, or
    /// expired (HTTP 403).
    InvalidToken,
    /// A requested record does not exist, or is not visible to the
    /// authenticated user (HTTP 404).
    NotFound(String),
    /// Unexpected server-side failure (HTTP 500). The detail is logged and
    /// only a generic message is sent to the client.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::MissingField(msg) => write!(f, "{}", msg),
            AppError::DuplicateIdentity(msg) => write!(f, "{}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::MissingToken => write!(f, "Access token required"),
            AppError::InvalidToken => write!(f, "Invalid or expired token"),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::Internal(_) => write!(f, "Internal server error"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::DuplicateIdentity(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            log::error!("internal error: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.to_string(),
        }))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(format!("password hashing failed: {}", error))
    }
}

/// Any JWT processing failure collapses into `InvalidToken`; the caller does
/// not learn whether the signature, the structure, or the expiry was wrong.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> AppError {
        AppError::InvalidToken
    }
}
