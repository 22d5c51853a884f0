//! Domain entities - core business objects

mod channel;
mod embed;
mod emoji;
mod message;
mod outgoing;
mod poll;
mod reaction;
mod record;
mod user;

pub use channel::{Channel, ChannelType};
pub use embed::{Embed, EmbedAuthor, EmbedField};
pub use emoji::PartialEmoji;
pub use message::{Attachment, Message, MessageKind, MessageSnapshot, APP_BASE_URL};
pub use outgoing::{OutgoingAttachment, OutgoingMessage};
pub use poll::{Poll, PollAnswer};
pub use reaction::{ReactionCount, ReactionRef};
pub use record::BoardRecord;
pub use user::{User, CDN_BASE_URL};
