//! Message entity - a message as fetched from the platform

use chrono::{DateTime, Utc};

use super::embed::Embed;
use super::poll::Poll;
use super::user::User;
use crate::value_objects::Snowflake;

/// Base URL used for message jump links
pub const APP_BASE_URL: &str = "https://discord.com";

/// Message type (platform wire values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    Default,
    RecipientAdd,
    RecipientRemove,
    ChannelPinnedMessage,
    UserJoin,
    GuildBoost,
    GuildBoostTier1,
    GuildBoostTier2,
    GuildBoostTier3,
    ThreadCreated,
    Reply,
    ChatInputCommand,
    ContextMenuCommand,
    PollResult,
    /// Any type this crate has no special handling for
    Other(u8),
}

impl MessageKind {
    /// Get the numeric wire value
    pub fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::RecipientAdd => 1,
            Self::RecipientRemove => 2,
            Self::ChannelPinnedMessage => 6,
            Self::UserJoin => 7,
            Self::GuildBoost => 8,
            Self::GuildBoostTier1 => 9,
            Self::GuildBoostTier2 => 10,
            Self::GuildBoostTier3 => 11,
            Self::ThreadCreated => 18,
            Self::Reply => 19,
            Self::ChatInputCommand => 20,
            Self::ContextMenuCommand => 23,
            Self::PollResult => 46,
            Self::Other(code) => code,
        }
    }

    /// System messages are generated by the platform rather than typed by a user
    pub fn is_system(self) -> bool {
        !matches!(
            self,
            Self::Default | Self::Reply | Self::ChatInputCommand | Self::ContextMenuCommand
        )
    }
}

impl From<u8> for MessageKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::RecipientAdd,
            2 => Self::RecipientRemove,
            6 => Self::ChannelPinnedMessage,
            7 => Self::UserJoin,
            8 => Self::GuildBoost,
            9 => Self::GuildBoostTier1,
            10 => Self::GuildBoostTier2,
            11 => Self::GuildBoostTier3,
            18 => Self::ThreadCreated,
            19 => Self::Reply,
            20 => Self::ChatInputCommand,
            23 => Self::ContextMenuCommand,
            46 => Self::PollResult,
            other => Self::Other(other),
        }
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub author: User,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub attachments: Vec<Attachment>,
    pub embeds: Vec<Embed>,
    pub mentions: Vec<Snowflake>,
    pub snapshots: Vec<MessageSnapshot>,
    pub poll: Option<Poll>,
}

impl Message {
    /// Create a new plain Message
    pub fn new(id: Snowflake, channel_id: Snowflake, author: User, content: String) -> Self {
        Self {
            id,
            channel_id,
            guild_id: None,
            author,
            content,
            kind: MessageKind::Default,
            created_at: id.created_at(),
            edited_at: None,
            attachments: Vec::new(),
            embeds: Vec::new(),
            mentions: Vec::new(),
            snapshots: Vec::new(),
            poll: None,
        }
    }

    /// Jump link to this message
    pub fn url(&self) -> String {
        let guild = self
            .guild_id
            .map_or_else(|| "@me".to_string(), |id| id.to_string());
        format!("{APP_BASE_URL}/channels/{guild}/{}/{}", self.channel_id, self.id)
    }

    /// Check if the platform generated this message
    #[inline]
    pub fn is_system(&self) -> bool {
        self.kind.is_system()
    }

    /// The forwarded message, if this message is a forward
    pub fn forwarded(&self) -> Option<&MessageSnapshot> {
        self.snapshots.first()
    }

    /// Attachments that belong to what the message shows: the forwarded
    /// message's attachments for a forward, otherwise its own.
    pub fn displayed_attachments(&self) -> &[Attachment] {
        match self.forwarded() {
            Some(snapshot) => &snapshot.attachments,
            None => &self.attachments,
        }
    }

    /// First user mentioned by the message
    pub fn first_mention(&self) -> Option<Snowflake> {
        self.mentions.first().copied()
    }
}

/// Content of a forwarded message, frozen at forward time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageSnapshot {
    pub content: String,
    pub attachments: Vec<Attachment>,
}

/// File attached to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: Snowflake,
    pub filename: String,
    pub url: String,
    pub content_type: Option<String>,
    pub size: u64,
}

impl Attachment {
    /// Create a new Attachment
    pub fn new(id: Snowflake, filename: String, url: String) -> Self {
        Self {
            id,
            filename,
            url,
            content_type: None,
            size: 0,
        }
    }
}
