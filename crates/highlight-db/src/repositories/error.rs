//! Error handling utilities for repositories

use highlight_core::error::DomainError;
use sqlx::Error as SqlxError;

/// PostgreSQL identifier length limit
const MAX_IDENTIFIER_LEN: usize = 63;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check that `name` can be spliced into SQL as an unquoted table name
///
/// Accepts ASCII letters, digits and underscores, not starting with a digit.
pub fn validate_table_name(name: &str) -> Result<(), DomainError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                && name.len() <= MAX_IDENTIFIER_LEN
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidTableName(name.to_string()))
    }
}
