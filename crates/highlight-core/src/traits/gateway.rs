//! Channel gateway port - the messaging transport as the engine sees it

use async_trait::async_trait;

use crate::entities::{Channel, Message, OutgoingMessage, ReactionCount, ReactionRef};
use crate::error::GatewayError;
use crate::value_objects::Snowflake;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Messaging transport. Every call is a suspension point and may fail.
#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Fetch a channel, with the default role's effective permissions resolved
    async fn fetch_channel(&self, channel_id: Snowflake) -> GatewayResult<Channel>;

    /// Fetch a message
    async fn fetch_message(&self, channel_id: Snowflake, message_id: Snowflake)
        -> GatewayResult<Message>;

    /// Send a message, returning the new message's ID
    async fn send(&self, channel_id: Snowflake, message: &OutgoingMessage)
        -> GatewayResult<Snowflake>;

    /// Replace the body of an existing message. Fails with `NotFound` if it vanished.
    async fn edit(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        message: &OutgoingMessage,
    ) -> GatewayResult<()>;

    /// Delete a message. Deleting a missing message succeeds.
    async fn delete(&self, channel_id: Snowflake, message_id: Snowflake) -> GatewayResult<()>;

    /// Current aggregate count for one emoji on one message
    async fn fetch_reaction(&self, reaction: &ReactionRef) -> GatewayResult<ReactionCount>;
}
