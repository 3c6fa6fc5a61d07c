//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::FieldErrors;
use platform::password::PasswordHashError;
use thiserror::Error;

use crate::domain::messages::TAKEN_MSG;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Why a presented token was rejected
///
/// Never shown to clients; they only see "Unauthorized".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token signature does not verify")]
    SignatureInvalid,

    #[error("token algorithm is not the configured one")]
    AlgorithmMismatch,

    #[error("token is malformed")]
    Malformed,

    #[error("token has expired")]
    Expired,
}

/// Field protected by a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IdentityField {
    #[display("username")]
    Username,
    #[display("email")]
    Email,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No Authorization header on a protected route
    #[error("Missing authorization header")]
    MissingHeader,

    /// Token failed to decode
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] DecodeError),

    /// Token verified but its subject no longer exists
    #[error("Token subject not found")]
    UnknownSubject,

    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Storage rejected a write on a unique field
    #[error("{0} has already been taken")]
    Duplicate(IdentityField),

    /// Password hashing failed
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingHeader | AuthError::Unauthorized(_) | AuthError::UnknownSubject => {
                ErrorKind::Unauthorized
            }
            AuthError::Validation(_) | AuthError::Duplicate(_) => ErrorKind::UnprocessableEntity,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    ///
    /// Auth failures collapse into one opaque message; storage and hashing
    /// details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::MissingHeader | AuthError::Unauthorized(_) | AuthError::UnknownSubject => {
                AppError::unauthorized("Unauthorized")
            }
            AuthError::Validation(fields) => AppError::validation(fields.clone()),
            AuthError::Duplicate(field) => {
                AppError::validation(FieldErrors::single(field.to_string(), TAKEN_MSG))
            }
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Unauthorized(reason) => {
                tracing::debug!(reason = ?reason, "Token rejected");
            }
            AuthError::UnknownSubject => {
                tracing::warn!("Valid token for unknown subject");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<FieldErrors> for AuthError {
    fn from(fields: FieldErrors) -> Self {
        AuthError::Validation(fields)
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.fields() {
            Some(fields) => AuthError::Validation(fields.clone()),
            None => AuthError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures_are_401() {
        for err in [
            AuthError::MissingHeader,
            AuthError::Unauthorized(DecodeError::Expired),
            AuthError::UnknownSubject,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(err.to_app_error().message(), "Unauthorized");
        }
    }

    #[test]
    fn test_duplicate_renders_field_error() {
        let app = AuthError::Duplicate(IdentityField::Email).to_app_error();
        assert_eq!(app.status_code(), 422);
        assert_eq!(
            app.fields().and_then(|f| f.get("email")),
            Some(&["has already been taken".to_string()][..])
        );
    }

    #[test]
    fn test_internal_hides_details() {
        let err = AuthError::Internal("connection refused on 10.0.0.3".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_app_error().message().contains("10.0.0.3"));
    }

    #[test]
    fn test_identity_field_display() {
        assert_eq!(IdentityField::Username.to_string(), "username");
        assert_eq!(IdentityField::Email.to_string(), "email");
    }
}
