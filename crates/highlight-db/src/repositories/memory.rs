//! In-memory implementation of RecordStore

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use highlight_core::entities::BoardRecord;
use highlight_core::traits::{RecordStore, RepoResult};
use highlight_core::value_objects::Snowflake;

/// Process-local record store
///
/// Clones share the same records. Updates to unknown ids are ignored, like
/// an `UPDATE` that matches no row.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<Mutex<HashMap<Snowflake, BoardRecord>>>,
}

impl MemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, replacing any existing one
    pub fn seed(&self, record: BoardRecord) {
        self.records.lock().insert(record.original_message_id, record);
    }

    /// Look up a record without going through the async trait
    pub fn snapshot(&self, original_id: Snowflake) -> Option<BoardRecord> {
        self.records.lock().get(&original_id).copied()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert_if_absent(&self, original_id: Snowflake) -> RepoResult<bool> {
        let mut records = self.records.lock();
        if records.contains_key(&original_id) {
            return Ok(false);
        }
        records.insert(original_id, BoardRecord::new(original_id));
        Ok(true)
    }

    async fn get(&self, original_id: Snowflake) -> RepoResult<Option<BoardRecord>> {
        Ok(self.snapshot(original_id))
    }

    async fn set_mirror_id(
        &self,
        original_id: Snowflake,
        mirror_id: Option<Snowflake>,
    ) -> RepoResult<()> {
        if let Some(record) = self.records.lock().get_mut(&original_id) {
            record.mirror_message_id = mirror_id;
        }
        Ok(())
    }

    async fn set_count(&self, original_id: Snowflake, count: i64) -> RepoResult<()> {
        if let Some(record) = self.records.lock().get_mut(&original_id) {
            record.count = count;
        }
        Ok(())
    }

    async fn claim_mirror(&self, original_id: Snowflake, mirror_id: Snowflake) -> RepoResult<bool> {
        match self.records.lock().get_mut(&original_id) {
            Some(record) if !record.has_live_mirror() => {
                record.mirror_message_id = Some(mirror_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
