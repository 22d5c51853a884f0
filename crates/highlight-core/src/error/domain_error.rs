//! Domain errors - error types for the domain and storage layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Board record not found: {0}")]
    RecordNotFound(Snowflake),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    #[error("Duplicate board: {0}")]
    DuplicateBoard(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::RecordNotFound(_) => "UNKNOWN_RECORD",
            Self::BoardNotFound(_) => "UNKNOWN_BOARD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTableName(_) => "INVALID_TABLE_NAME",
            Self::DuplicateBoard(_) => "DUPLICATE_BOARD",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_) | Self::BoardNotFound(_))
    }
}
