//! Domain events - platform events delivered to the highlight engine
//!
//! The host application receives these from the platform and hands them to
//! the board registry. Delivery order between events for the same message is
//! whatever the transport provides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{PartialEmoji, ReactionRef};
use crate::value_objects::Snowflake;

/// All events the engine consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    ReactionAdded(ReactionEvent),
    MessageUpdated(MessageEvent),
    MessageDeleted(MessageEvent),
}

impl DomainEvent {
    /// Original message the event concerns
    pub fn message_id(&self) -> Snowflake {
        match self {
            Self::ReactionAdded(e) => e.message_id,
            Self::MessageUpdated(e) | Self::MessageDeleted(e) => e.message_id,
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

/// A reaction was added to a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    /// Emoji name (unicode emoji or custom emoji name)
    pub emoji: String,
    #[serde(default)]
    pub emoji_id: Option<Snowflake>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ReactionEvent {
    /// Create a reaction event for a unicode emoji
    pub fn new(channel_id: Snowflake, message_id: Snowflake, emoji: impl Into<String>) -> Self {
        Self {
            channel_id,
            message_id,
            emoji: emoji.into(),
            emoji_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Reference used to fetch the current reaction count
    pub fn reaction_ref(&self) -> ReactionRef {
        let emoji = match self.emoji_id {
            Some(id) => PartialEmoji::custom(id, self.emoji.clone()),
            None => PartialEmoji::unicode(self.emoji.clone()),
        };
        ReactionRef::new(self.channel_id, self.message_id, emoji)
    }
}

/// A message was edited or deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl MessageEvent {
    /// Create a message event
    pub fn new(channel_id: Snowflake, message_id: Snowflake) -> Self {
        Self {
            channel_id,
            message_id,
            timestamp: Utc::now(),
        }
    }
}
