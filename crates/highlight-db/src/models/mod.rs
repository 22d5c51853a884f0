//! Database models - SQLx-compatible structs for PostgreSQL tables

mod record;

pub use record::BoardRecordModel;
