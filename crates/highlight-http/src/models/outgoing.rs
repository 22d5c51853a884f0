//! Request bodies for creating and editing messages

use serde::{Deserialize, Serialize};

use highlight_core::value_objects::Snowflake;

use super::message::EmbedDto;

/// JSON body of `POST`/`PATCH /channels/{c}/messages`
///
/// For multipart uploads this is sent as the `payload_json` part.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayloadDto {
    pub content: String,
    pub embeds: Vec<EmbedDto>,
    pub allowed_mentions: AllowedMentionsDto,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentSlotDto>,
}

/// Mention parsing rules; an empty `parse` list pings nobody
#[derive(Debug, Clone, Default, Serialize)]
pub struct AllowedMentionsDto {
    pub parse: Vec<String>,
}

impl AllowedMentionsDto {
    /// Suppress every mention
    pub fn none() -> Self {
        Self::default()
    }
}

/// Links `files[{id}]` multipart parts to their filenames
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentSlotDto {
    pub id: usize,
    pub filename: String,
}

/// The only field read back from a create response
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedMessageDto {
    pub id: Snowflake,
}
