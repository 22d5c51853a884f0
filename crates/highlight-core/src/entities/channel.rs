//! Channel entity - the source or target of a highlight

use serde::{Deserialize, Serialize};

use crate::value_objects::{Permissions, Snowflake};

/// Channel type enum (platform wire values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ChannelType {
    /// Guild text channel
    #[default]
    GuildText = 0,
    /// Direct message between users
    Dm = 1,
    /// Guild voice channel (has a text chat)
    GuildVoice = 2,
    /// Direct message between multiple users
    GroupDm = 3,
    /// Guild category for organizing channels
    GuildCategory = 4,
    /// Announcement channel
    GuildAnnouncement = 5,
    /// Thread inside an announcement channel
    AnnouncementThread = 10,
    /// Public thread
    PublicThread = 11,
    /// Private thread
    PrivateThread = 12,
    /// Stage channel
    GuildStageVoice = 13,
    /// Forum channel
    GuildForum = 15,
}

impl From<u8> for ChannelType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Dm,
            2 => Self::GuildVoice,
            3 => Self::GroupDm,
            4 => Self::GuildCategory,
            5 => Self::GuildAnnouncement,
            10 => Self::AnnouncementThread,
            11 => Self::PublicThread,
            12 => Self::PrivateThread,
            13 => Self::GuildStageVoice,
            15 => Self::GuildForum,
            _ => Self::GuildText, // Default for 0 and unknown values
        }
    }
}

impl ChannelType {
    /// Check if this is a thread type
    #[must_use]
    pub fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }
}

impl From<ChannelType> for u8 {
    fn from(ct: ChannelType) -> Self {
        ct as u8
    }
}

/// Channel entity
///
/// `everyone_permissions` holds the effective permissions of the guild's
/// default role in this channel, already resolved against overwrites.
/// It is `None` for private channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub name: Option<String>,
    pub channel_type: ChannelType,
    pub parent_id: Option<Snowflake>,
    pub everyone_permissions: Option<Permissions>,
}

impl Channel {
    /// Create a new guild text channel
    #[must_use]
    pub fn new_text(
        id: Snowflake,
        guild_id: Snowflake,
        name: String,
        everyone_permissions: Permissions,
    ) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: Some(name),
            channel_type: ChannelType::GuildText,
            parent_id: None,
            everyone_permissions: Some(everyone_permissions),
        }
    }

    /// Create a new DM channel
    #[must_use]
    pub fn new_dm(id: Snowflake) -> Self {
        Self {
            id,
            guild_id: None,
            name: None,
            channel_type: ChannelType::Dm,
            parent_id: None,
            everyone_permissions: None,
        }
    }

    /// Check if this is a private (DM or group DM) channel
    #[inline]
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self.channel_type, ChannelType::Dm | ChannelType::GroupDm) || self.guild_id.is_none()
    }

    /// Check if this is a thread
    #[inline]
    #[must_use]
    pub fn is_thread(&self) -> bool {
        self.channel_type.is_thread()
    }

    /// Check whether the default role holds every flag in `required`
    #[must_use]
    pub fn everyone_can(&self, required: Permissions) -> bool {
        self.everyone_permissions
            .is_some_and(|permissions| permissions.has(required))
    }
}
