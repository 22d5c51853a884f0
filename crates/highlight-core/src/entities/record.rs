//! Board record - one per original message per board

use crate::value_objects::Snowflake;

/// Highlight bookkeeping for one original message on one board
///
/// `mirror_message_id` is `None` while no mirror exists; the record itself
/// outlives its mirror. `count` is the peak reaction count ever observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRecord {
    pub original_message_id: Snowflake,
    pub mirror_message_id: Option<Snowflake>,
    pub count: i64,
}

impl BoardRecord {
    /// Persisted value meaning "no mirror"
    pub const SENTINEL: i64 = -1;

    /// A freshly inserted record: no mirror, zero count
    pub fn new(original_message_id: Snowflake) -> Self {
        Self {
            original_message_id,
            mirror_message_id: None,
            count: 0,
        }
    }

    /// Check if a mirror currently exists
    #[inline]
    pub fn has_live_mirror(&self) -> bool {
        self.mirror_message_id.is_some()
    }

    /// Decode a persisted mirror column; any non-positive value is the sentinel
    pub fn mirror_from_raw(raw: i64) -> Option<Snowflake> {
        (raw > 0).then(|| Snowflake::new(raw))
    }

    /// Encode a mirror pointer for persistence
    pub fn mirror_to_raw(mirror: Option<Snowflake>) -> i64 {
        mirror.map_or(Self::SENTINEL, Snowflake::into_inner)
    }
}
