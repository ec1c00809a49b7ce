//! Centralized error types for Homedash.

use thiserror::Error;

/// Main error type for Homedash operations.
#[derive(Error, Debug)]
pub enum DashError {
    #[error("App not found: {0}")]
    AppNotFound(i64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] homedash_db::DbError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Homedash operations.
pub type DashResult<T> = Result<T, DashError>;

impl DashError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AppNotFound(_) | Self::Database(homedash_db::DbError::NotFound(_))
        )
    }
}
