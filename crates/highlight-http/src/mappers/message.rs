//! Message wire models -> entity mappers

use highlight_core::entities::{
    Attachment, Embed, EmbedAuthor, EmbedField, Message, MessageKind, MessageSnapshot,
    PartialEmoji, Poll, PollAnswer, User,
};

use crate::models::{
    AttachmentDto, EmbedAuthorDto, EmbedDto, EmbedFieldDto, EmojiDto, MessageDto, PollDto,
    SnapshotDto, UserDto,
};

/// Convert MessageDto to Message entity
///
/// Reactions are dropped; they are read separately through
/// [`reaction_count`](super::reaction_count).
impl From<MessageDto> for Message {
    fn from(dto: MessageDto) -> Self {
        Message {
            id: dto.id,
            channel_id: dto.channel_id,
            guild_id: dto.guild_id,
            author: User::from(dto.author),
            content: dto.content,
            kind: MessageKind::from(dto.kind),
            created_at: dto.timestamp,
            edited_at: dto.edited_timestamp,
            attachments: dto.attachments.into_iter().map(Attachment::from).collect(),
            embeds: dto.embeds.into_iter().map(Embed::from).collect(),
            mentions: dto.mentions.into_iter().map(|user| user.id).collect(),
            snapshots: dto
                .message_snapshots
                .into_iter()
                .map(MessageSnapshot::from)
                .collect(),
            poll: dto.poll.map(Poll::from),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            username: dto.username,
            global_name: dto.global_name,
            avatar: dto.avatar,
            bot: dto.bot,
        }
    }
}

impl From<AttachmentDto> for Attachment {
    fn from(dto: AttachmentDto) -> Self {
        Attachment {
            id: dto.id,
            filename: dto.filename,
            url: dto.url,
            content_type: dto.content_type,
            size: dto.size,
        }
    }
}

impl From<EmbedDto> for Embed {
    fn from(dto: EmbedDto) -> Self {
        Embed {
            title: dto.title,
            description: dto.description,
            url: dto.url,
            color: dto.color,
            author: dto.author.map(|author| EmbedAuthor {
                name: author.name,
                url: author.url,
                icon_url: author.icon_url,
            }),
            fields: dto
                .fields
                .into_iter()
                .map(|field| EmbedField {
                    name: field.name,
                    value: field.value,
                    inline: field.inline,
                })
                .collect(),
            timestamp: dto.timestamp,
        }
    }
}

impl From<&Embed> for EmbedDto {
    fn from(embed: &Embed) -> Self {
        EmbedDto {
            title: embed.title.clone(),
            description: embed.description.clone(),
            url: embed.url.clone(),
            color: embed.color,
            author: embed.author.as_ref().map(|author| EmbedAuthorDto {
                name: author.name.clone(),
                url: author.url.clone(),
                icon_url: author.icon_url.clone(),
            }),
            fields: embed
                .fields
                .iter()
                .map(|field| EmbedFieldDto {
                    name: field.name.clone(),
                    value: field.value.clone(),
                    inline: field.inline,
                })
                .collect(),
            timestamp: embed.timestamp,
        }
    }
}

impl From<SnapshotDto> for MessageSnapshot {
    fn from(dto: SnapshotDto) -> Self {
        MessageSnapshot {
            content: dto.message.content,
            attachments: dto
                .message
                .attachments
                .into_iter()
                .map(Attachment::from)
                .collect(),
        }
    }
}

impl From<EmojiDto> for PartialEmoji {
    fn from(dto: EmojiDto) -> Self {
        PartialEmoji {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            animated: dto.animated,
        }
    }
}

impl From<PollDto> for Poll {
    fn from(dto: PollDto) -> Self {
        Poll {
            question: dto.question.text.unwrap_or_default(),
            answers: dto
                .answers
                .into_iter()
                .map(|answer| {
                    let mut entity =
                        PollAnswer::new(answer.answer_id, answer.poll_media.text.unwrap_or_default());
                    entity.emoji = answer.poll_media.emoji.map(PartialEmoji::from);
                    entity
                })
                .collect(),
            allow_multiselect: dto.allow_multiselect,
            results_finalized: dto.results.is_some_and(|results| results.is_finalized),
        }
    }
}
