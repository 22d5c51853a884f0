//! Repository implementations
//!
//! Implementations of the `RecordStore` port defined in highlight-core.

mod error;
mod memory;
mod record;

pub use error::{map_db_error, validate_table_name};
pub use memory::MemoryRecordStore;
pub use record::PgRecordStore;
