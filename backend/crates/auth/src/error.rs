//! Auth Error Types
//!
//! `AuthError` covers failures that are *not* user-correctable. Wrong
//! passwords, unknown users and invalid input are returned as
//! [`FieldError`](crate::domain::validation::FieldError) data instead.
//! The one exception is [`AuthError::UserNameTaken`], which the repository
//! raises and the register use case folds back into a field error.

use async_graphql::ErrorExtensions;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unique constraint on `user_name` rejected the insert
    #[error("User name already exists")]
    UserNameTaken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session store (Redis) error
    #[error("Session store error: {0}")]
    SessionStore(#[from] redis::RedisError),

    /// Session payload could not be (de)serialized
    #[error("Session serialization error: {0}")]
    SessionFormat(#[from] serde_json::Error),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    Hashing(#[from] PasswordHashError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::SessionStore(e) if e.is_io_error() || e.is_connection_dropped() => {
                ErrorKind::ServiceUnavailable
            }
            AuthError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            AuthError::Database(_)
            | AuthError::SessionStore(_)
            | AuthError::SessionFormat(_)
            | AuthError::Hashing(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-safe message. Infrastructure details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Conflict => "User name already exists",
            ErrorKind::ServiceUnavailable => "Service temporarily unavailable",
            _ => "Internal server error",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::SessionStore(e) => {
                tracing::error!(error = %e, "Session store error");
            }
            AuthError::SessionFormat(e) => {
                tracing::error!(error = %e, "Corrupt session payload");
            }
            AuthError::Hashing(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserNameTaken => {
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

/// GraphQL transport-level error: generic message plus `extensions.code`.
impl ErrorExtensions for AuthError {
    fn extend(&self) -> async_graphql::Error {
        self.log();
        let kind = self.kind();
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| {
            e.set("code", kind.code().to_string());
        })
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Blocking task failed: {err}"))
    }
}
