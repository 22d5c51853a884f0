//! Mirror payload rendering

use highlight_core::entities::{
    Embed, EmbedAuthor, Message, OutgoingAttachment, OutgoingMessage,
};
use highlight_core::render_content;

use super::board::BoardConfig;

/// Build the mirror posted to (or edited on) a board channel.
///
/// Attachments are only included for the first post; edits never re-upload.
pub fn build_mirror(
    config: &BoardConfig,
    message: &Message,
    count: i64,
    with_attachments: bool,
) -> OutgoingMessage {
    let url = message.url();
    let content = format!(
        "{} **{count}** - {url} ({})",
        config.emoji,
        message.author.mention()
    );

    let embed = Embed {
        description: render_content(message),
        color: config.color_for(message),
        author: Some(EmbedAuthor {
            name: message.author.display_name().to_string(),
            url: Some(url),
            icon_url: Some(message.author.avatar_url()),
        }),
        timestamp: Some(message.created_at),
        ..Embed::default()
    };

    let attachments = if with_attachments {
        message
            .displayed_attachments()
            .iter()
            .map(|a| OutgoingAttachment {
                filename: a.filename.clone(),
                url: a.url.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    OutgoingMessage {
        content,
        embeds: vec![embed],
        attachments,
    }
}
