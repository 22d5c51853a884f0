//! Reaction entities - references to and aggregates of emoji reactions

use super::emoji::PartialEmoji;
use crate::value_objects::Snowflake;

/// Identifies one emoji's reactions on one message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReactionRef {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub emoji: PartialEmoji,
}

impl ReactionRef {
    /// Create a new ReactionRef
    pub fn new(channel_id: Snowflake, message_id: Snowflake, emoji: PartialEmoji) -> Self {
        Self {
            channel_id,
            message_id,
            emoji,
        }
    }
}

/// Aggregated reaction count for one emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: PartialEmoji,
    pub count: i64,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji: PartialEmoji, count: i64) -> Self {
        Self { emoji, count }
    }
}
