//! Outgoing message -> request body mapper

use highlight_core::entities::OutgoingMessage;

use crate::models::{AllowedMentionsDto, AttachmentSlotDto, EmbedDto, MessagePayloadDto};

impl MessagePayloadDto {
    /// Build the request body for `message`
    ///
    /// Attachment slots are declared only for uploads; edits leave existing
    /// attachments untouched by omitting them.
    pub fn from_outgoing(message: &OutgoingMessage, with_attachments: bool) -> Self {
        let attachments = if with_attachments {
            message
                .attachments
                .iter()
                .enumerate()
                .map(|(id, attachment)| AttachmentSlotDto {
                    id,
                    filename: attachment.filename.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            content: message.content.clone(),
            embeds: message.embeds.iter().map(EmbedDto::from).collect(),
            allowed_mentions: AllowedMentionsDto::none(),
            attachments,
        }
    }
}
