//! Reaction lookup on a fetched message

use highlight_core::entities::PartialEmoji;

use crate::models::{EmojiDto, ReactionDto};

/// Count of `emoji` among a message's reactions, 0 when nobody reacted with it
pub fn reaction_count(reactions: &[ReactionDto], emoji: &PartialEmoji) -> i64 {
    reactions
        .iter()
        .find(|reaction| matches_emoji(&reaction.emoji, emoji))
        .map_or(0, |reaction| reaction.count)
}

fn matches_emoji(dto: &EmojiDto, emoji: &PartialEmoji) -> bool {
    match (dto.id, emoji.id) {
        (Some(a), Some(b)) => a == b,
        (None, None) => dto.name.as_deref() == Some(emoji.name.as_str()),
        _ => false,
    }
}
