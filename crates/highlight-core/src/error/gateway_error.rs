//! Gateway errors - failures reported by the messaging transport

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Errors returned by a [`ChannelGateway`](crate::traits::ChannelGateway)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The target is missing or not accessible
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Snowflake },

    /// Network or platform failure
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn channel_not_found(id: Snowflake) -> Self {
        Self::NotFound {
            resource: "Channel",
            id,
        }
    }

    pub fn message_not_found(id: Snowflake) -> Self {
        Self::NotFound {
            resource: "Message",
            id,
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Check if this is a "not found" error
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
