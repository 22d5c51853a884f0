//! Wire model <-> entity mappers
//!
//! - `From<Dto> for Entity`: responses into domain objects
//! - `MessagePayloadDto::from_outgoing`: domain messages into request bodies

mod channel;
mod message;
mod outgoing;
mod reaction;

pub use channel::{everyone_permissions, to_channel};
pub use reaction::reaction_count;
