//!
//! # Error Handling
//!
//! This module defines `AppError`, the single error type returned by services,
//! guards and route handlers. Each variant maps to one HTTP status code and is
//! rendered as a JSON body of the form `{"error": "<message>"}`.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error` and `bcrypt::BcryptError` let callers use `?`
//! directly on library results.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Every failure the API can report to a client.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed: missing or invalid token, or bad credentials (HTTP 401).
    Unauthorized(String),
    /// The principal does not own the target resource, or the resource does not
    /// exist. Both cases share this variant so callers cannot tell which ids exist (HTTP 401).
    AccessDenied(String),
    /// The request was malformed in a way not covered by field validation (HTTP 400).
    BadRequest(String),
    /// The request collides with existing state, e.g. a registered email (HTTP 400).
    Conflict(String),
    /// The requested resource does not exist (HTTP 404).
    NotFound(String),
    /// Field-level validation failed (HTTP 400).
    ValidationError(String),
    /// A storage operation failed (HTTP 500). The message is logged, not returned.
    DatabaseError(String),
    /// Any other unexpected failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::AccessDenied(msg) => write!(f, "Access Denied: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl AppError {
    /// Shorthand used by guards for the collapsed "missing or not yours" case.
    pub fn access_denied() -> Self {
        AppError::AccessDenied("You do not have permission to perform this action".into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::AccessDenied(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::Conflict(_) | AppError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Unauthorized(msg)
            | AppError::AccessDenied(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::InternalServerError(msg) => msg.as_str(),
            // Storage details stay in the log.
            AppError::DatabaseError(_) => "Database error",
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// `RowNotFound` becomes `NotFound` and a unique-constraint violation becomes
/// `Conflict`; everything else is a `DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                // SQLite names the column in the message: "UNIQUE constraint failed: users.email".
                if db_err.message().contains("users.email") {
                    AppError::Conflict("Email already registered".into())
                } else {
                    AppError::Conflict("Resource already exists".into())
                }
            }
            _ => {
                log::error!("database error: {}", error);
                AppError::DatabaseError(error.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(format!("Invalid token: {:?}", error.kind()))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
