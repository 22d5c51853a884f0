//! # highlight-core
//!
//! Domain layer containing entities, value objects, ports, inbound events,
//! and the content renderer.
//! This crate has zero dependencies on infrastructure (database, HTTP client, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod render;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Attachment, BoardRecord, Channel, ChannelType, Embed, EmbedAuthor, EmbedField, Message,
    MessageKind, MessageSnapshot, OutgoingAttachment, OutgoingMessage, PartialEmoji, Poll,
    PollAnswer, ReactionCount, ReactionRef, User,
};
pub use error::{DomainError, GatewayError};
pub use events::{DomainEvent, MessageEvent, ReactionEvent};
pub use render::render_content;
pub use traits::{ChannelGateway, GatewayResult, RecordStore, RepoResult};
pub use value_objects::{Permissions, Snowflake, SnowflakeParseError};
