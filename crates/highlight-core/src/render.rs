//! Content renderer - plain-text summary of a message
//!
//! Covers plain text, forwards, polls and system messages. Unknown system
//! message types render a diagnostic placeholder instead of failing.

use crate::entities::{Message, MessageKind, Poll};

/// Index of the winning answer's text in a poll result embed
const POLL_RESULT_WINNER_FIELD: usize = 4;

/// Render a message as plain text, or `None` when there is nothing to show
pub fn render_content(message: &Message) -> Option<String> {
    let rendered = if message.is_system() {
        render_system(message)
    } else if let Some(snapshot) = message.forwarded() {
        format!("-# *↱ Forwarded message:*\n{}", snapshot.content)
    } else if let Some(poll) = &message.poll {
        render_poll(poll)
    } else {
        message.content.clone()
    };

    (!rendered.is_empty()).then_some(rendered)
}

fn render_system(message: &Message) -> String {
    match message.kind {
        MessageKind::UserJoin => "Joined the server".to_string(),
        MessageKind::GuildBoost => "Boosted the server".to_string(),
        MessageKind::GuildBoostTier1 => "Boosted the server and made it reach level 1".to_string(),
        MessageKind::GuildBoostTier2 => "Boosted the server and made it reach level 2".to_string(),
        MessageKind::GuildBoostTier3 => "Boosted the server and made it reach level 3".to_string(),
        MessageKind::PollResult => {
            let winner = message
                .embeds
                .first()
                .and_then(|embed| embed.field_value(POLL_RESULT_WINNER_FIELD));
            match winner {
                Some(winner) => format!("Poll ended with winner: {winner}"),
                None => "Poll ended with no winner".to_string(),
            }
        }
        MessageKind::ChannelPinnedMessage => "Pinned a message to this channel".to_string(),
        MessageKind::ThreadCreated => "Created a thread".to_string(),
        MessageKind::RecipientAdd => format!("Added {} to a thread", mention_or_unknown(message)),
        MessageKind::RecipientRemove => {
            format!("Removed {} from a thread", mention_or_unknown(message))
        }
        other => format!("!!!!! Unknown message type {} !!!!!", other.code()),
    }
}

fn mention_or_unknown(message: &Message) -> String {
    message
        .first_mention()
        .map_or_else(|| "an unknown user".to_string(), |id| format!("<@{id}>"))
}

fn render_poll(poll: &Poll) -> String {
    let marker = if poll.allow_multiselect { "☐" } else { "◯" };
    let mut out = format!("-# *Poll*\n{}", poll.question);

    for answer in &poll.answers {
        out.push_str(&format!("\n{marker} "));
        if let Some(emoji) = &answer.emoji {
            if emoji.is_custom() {
                out.push_str(&format!(":{}: ", emoji.name));
            } else {
                out.push_str(&format!("{} ", emoji.name));
            }
        }
        out.push_str(&answer.text);
    }

    out.push_str(if poll.results_finalized {
        "\nPoll closed"
    } else {
        "\nPoll open"
    });
    out
}
