//! Eligibility filter - which source channels may produce mirrors

use std::collections::HashSet;

use highlight_common::AppConfig;
use highlight_core::entities::Channel;
use highlight_core::value_objects::{Permissions, Snowflake};

/// Pure predicate over source channels
///
/// A channel is eligible when it is a guild channel, is not on the deny list,
/// and the default role can view it, read its history and add reactions.
#[derive(Debug, Clone, Default)]
pub struct EligibilityFilter {
    denied: HashSet<Snowflake>,
}

impl EligibilityFilter {
    /// Create a filter denying the given channels
    pub fn new(denied: impl IntoIterator<Item = Snowflake>) -> Self {
        Self {
            denied: denied.into_iter().collect(),
        }
    }

    /// Deny list from configuration plus every board's own channel
    pub fn from_config(config: &AppConfig) -> Self {
        let boards = config.boards().map(|board| board.channel_id);
        Self::new(
            config
                .eligibility
                .denied_channel_ids
                .iter()
                .copied()
                .chain(boards),
        )
    }

    /// Check if a channel is on the deny list
    pub fn is_denied(&self, channel_id: Snowflake) -> bool {
        self.denied.contains(&channel_id)
    }

    /// Check whether messages in `channel` may be highlighted
    pub fn is_eligible(&self, channel: &Channel) -> bool {
        !channel.is_private()
            && !self.is_denied(channel.id)
            && channel.everyone_can(Permissions::PUBLIC_READ)
    }
}
