//! Message wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use highlight_core::value_objects::Snowflake;

/// `GET /channels/{c}/messages/{m}` response
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDto {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    pub author: UserDto,
    #[serde(default)]
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
    #[serde(default)]
    pub embeds: Vec<EmbedDto>,
    #[serde(default)]
    pub mentions: Vec<UserDto>,
    #[serde(default)]
    pub message_snapshots: Vec<SnapshotDto>,
    #[serde(default)]
    pub poll: Option<PollDto>,
    #[serde(default)]
    pub reactions: Vec<ReactionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentDto {
    pub id: Snowflake,
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: u64,
}

/// Embed, used both when reading messages and when sending mirrors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthorDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedFieldDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedAuthorDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFieldDto {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// Forwarded message wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotDto {
    pub message: SnapshotMessageDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotMessageDto {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollDto {
    pub question: PollMediaDto,
    #[serde(default)]
    pub answers: Vec<PollAnswerDto>,
    #[serde(default)]
    pub allow_multiselect: bool,
    #[serde(default)]
    pub results: Option<PollResultsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollMediaDto {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub emoji: Option<EmojiDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollAnswerDto {
    pub answer_id: u32,
    #[serde(default)]
    pub poll_media: PollMediaDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollResultsDto {
    #[serde(default)]
    pub is_finalized: bool,
}

/// Partial emoji; unicode emoji have no id, deleted custom emoji have no name
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiDto {
    #[serde(default)]
    pub id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

/// Aggregated reaction on a message
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionDto {
    pub count: i64,
    pub emoji: EmojiDto,
}
