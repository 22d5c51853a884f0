//! Repository traits (ports) - define the interface for board record storage
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL, in-memory).

use async_trait::async_trait;

use crate::entities::BoardRecord;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Record Store
// ============================================================================

/// Per-board table of [`BoardRecord`]s keyed by original message ID
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a record with no mirror and a zero count.
    ///
    /// Returns `false` (and changes nothing) if the record already exists.
    /// This is the one operation that must be atomic.
    async fn insert_if_absent(&self, original_id: Snowflake) -> RepoResult<bool>;

    /// Find the record for an original message
    async fn get(&self, original_id: Snowflake) -> RepoResult<Option<BoardRecord>>;

    /// Overwrite the mirror pointer (`None` clears it)
    async fn set_mirror_id(&self, original_id: Snowflake, mirror_id: Option<Snowflake>)
        -> RepoResult<()>;

    /// Overwrite the stored count
    async fn set_count(&self, original_id: Snowflake, count: i64) -> RepoResult<()>;

    /// Set the mirror pointer only if none is stored yet.
    ///
    /// Returns `true` if this call stored `mirror_id`.
    async fn claim_mirror(&self, original_id: Snowflake, mirror_id: Snowflake) -> RepoResult<bool>;
}
