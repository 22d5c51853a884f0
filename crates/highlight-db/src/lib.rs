//! # highlight-db
//!
//! Storage layer implementing [`RecordStore`](highlight_core::RecordStore).
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - `PgRecordStore`: one PostgreSQL table per board
//! - `MemoryRecordStore`: process-local store for tests and dry runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use highlight_db::{create_pool, DatabaseConfig, PgRecordStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let store = PgRecordStore::new(pool, "starboard")?;
//!     store.ensure_schema().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{validate_table_name, MemoryRecordStore, PgRecordStore};
