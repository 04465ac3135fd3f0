//! Error handling - translates every failure into the response envelope.

use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header},
};
use quill_shared::ErrorResponse;
use std::fmt;

use quill_core::error::RepoError;

/// Application-level error type. Every variant renders as the
/// `{ success: false, error }` envelope with its status code.
#[derive(Debug)]
pub enum AppError {
    /// Store rejection (validation, uniqueness, connection, query); the
    /// message travels to the caller verbatim.
    BadRequest(String),
    NotFound,
    Unauthorized(String),
    Forbidden(String),
    MethodNotAllowed {
        method: String,
        allow: &'static str,
    },
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "{}", msg),
            AppError::NotFound => write!(f, "Post not found"),
            AppError::Unauthorized(msg) => write!(f, "{}", msg),
            AppError::Forbidden(msg) => write!(f, "{}", msg),
            AppError::MethodNotAllowed { method, .. } => {
                write!(f, "Method {} not allowed", method)
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        let error = match self {
            AppError::MethodNotAllowed { allow, .. } => {
                builder.insert_header((header::ALLOW, *allow));
                ErrorResponse::new(self.to_string())
            }
            AppError::Internal(msg) => {
                // Message withheld from the caller.
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new("Internal server error")
            }
            other => ErrorResponse::new(other.to_string()),
        };

        builder.json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Validation(msg) | RepoError::Constraint(msg) => AppError::BadRequest(msg),
            // Store failures map to 400 with the message passed through.
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Store failure: {}", msg);
                AppError::BadRequest(msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
