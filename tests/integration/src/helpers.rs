//! Test helpers for integration tests
//!
//! `FakeGateway` stands in for the platform: it holds channels, messages and
//! reaction counts, hands out mirror IDs, and records every call so tests can
//! assert on what reached the transport.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use highlight_core::entities::{Channel, Message, OutgoingMessage, ReactionCount, ReactionRef};
use highlight_core::error::GatewayError;
use highlight_core::traits::{ChannelGateway, GatewayResult};
use highlight_core::Snowflake;

/// First ID handed out for posted mirrors
pub const FIRST_MIRROR_ID: i64 = 900_000;

/// One call made against the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchChannel(Snowflake),
    FetchMessage(Snowflake),
    Send { channel_id: Snowflake, mirror_id: Snowflake },
    Edit { channel_id: Snowflake, mirror_id: Snowflake },
    Delete { channel_id: Snowflake, mirror_id: Snowflake },
    FetchReaction(Snowflake),
}

#[derive(Default)]
struct State {
    channels: HashMap<Snowflake, Channel>,
    messages: HashMap<Snowflake, Message>,
    reactions: HashMap<(Snowflake, String), i64>,
    mirrors: HashMap<Snowflake, OutgoingMessage>,
    sent: Vec<OutgoingMessage>,
    calls: Vec<Call>,
    send_failures: Vec<GatewayError>,
    reaction_failures: Vec<GatewayError>,
}

/// In-process [`ChannelGateway`]
pub struct FakeGateway {
    state: Mutex<State>,
    next_id: AtomicI64,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            next_id: AtomicI64::new(FIRST_MIRROR_ID),
        }
    }

    pub fn add_channel(&self, channel: Channel) {
        self.state.lock().channels.insert(channel.id, channel);
    }

    pub fn add_message(&self, message: Message) {
        self.state.lock().messages.insert(message.id, message);
    }

    /// Make the source message disappear
    pub fn remove_message(&self, message_id: Snowflake) {
        self.state.lock().messages.remove(&message_id);
    }

    /// Delete a mirror behind the engine's back
    pub fn remove_mirror(&self, mirror_id: Snowflake) {
        self.state.lock().mirrors.remove(&mirror_id);
    }

    /// Set the live count for `emoji` on a message
    pub fn set_reactions(&self, message_id: Snowflake, emoji: &str, count: i64) {
        self.state
            .lock()
            .reactions
            .insert((message_id, emoji.to_string()), count);
    }

    /// Make the next `send` fail with `error`
    pub fn fail_next_send(&self, error: GatewayError) {
        self.state.lock().send_failures.push(error);
    }

    /// Make the next `fetch_reaction` fail with `error`
    pub fn fail_next_reaction(&self, error: GatewayError) {
        self.state.lock().reaction_failures.push(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Calls other than reaction lookups
    pub fn message_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::FetchReaction(_)))
            .collect()
    }

    /// Every payload passed to `send`, in order
    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.state.lock().sent.clone()
    }

    pub fn send_count(&self) -> usize {
        self.count_calls(|call| matches!(call, Call::Send { .. }))
    }

    pub fn edit_count(&self) -> usize {
        self.count_calls(|call| matches!(call, Call::Edit { .. }))
    }

    pub fn delete_count(&self) -> usize {
        self.count_calls(|call| matches!(call, Call::Delete { .. }))
    }

    /// Current body of a mirror that still exists
    pub fn mirror(&self, mirror_id: Snowflake) -> Option<OutgoingMessage> {
        self.state.lock().mirrors.get(&mirror_id).cloned()
    }

    /// Number of mirrors currently present in `channel_id`
    pub fn live_mirrors_in(&self, channel_id: Snowflake) -> usize {
        let state = self.state.lock();
        state
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Send {
                    channel_id: c,
                    mirror_id,
                } if *c == channel_id => Some(mirror_id),
                _ => None,
            })
            .filter(|id| state.mirrors.contains_key(id))
            .count()
    }

    fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.state.lock().calls.push(call);
    }
}

#[async_trait]
impl ChannelGateway for FakeGateway {
    async fn fetch_channel(&self, channel_id: Snowflake) -> GatewayResult<Channel> {
        self.record(Call::FetchChannel(channel_id));
        self.state
            .lock()
            .channels
            .get(&channel_id)
            .cloned()
            .ok_or(GatewayError::channel_not_found(channel_id))
    }

    async fn fetch_message(
        &self,
        _channel_id: Snowflake,
        message_id: Snowflake,
    ) -> GatewayResult<Message> {
        self.record(Call::FetchMessage(message_id));
        self.state
            .lock()
            .messages
            .get(&message_id)
            .cloned()
            .ok_or(GatewayError::message_not_found(message_id))
    }

    async fn send(
        &self,
        channel_id: Snowflake,
        message: &OutgoingMessage,
    ) -> GatewayResult<Snowflake> {
        tokio::task::yield_now().await;

        let mut state = self.state.lock();
        if let Some(error) = state.send_failures.pop() {
            return Err(error);
        }

        let mirror_id = Snowflake::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        state.calls.push(Call::Send {
            channel_id,
            mirror_id,
        });
        state.sent.push(message.clone());
        state.mirrors.insert(mirror_id, message.clone());
        Ok(mirror_id)
    }

    async fn edit(
        &self,
        channel_id: Snowflake,
        mirror_id: Snowflake,
        message: &OutgoingMessage,
    ) -> GatewayResult<()> {
        let mut state = self.state.lock();
        state.calls.push(Call::Edit {
            channel_id,
            mirror_id,
        });
        match state.mirrors.get_mut(&mirror_id) {
            Some(body) => {
                *body = message.clone();
                Ok(())
            }
            None => Err(GatewayError::message_not_found(mirror_id)),
        }
    }

    async fn delete(&self, channel_id: Snowflake, mirror_id: Snowflake) -> GatewayResult<()> {
        let mut state = self.state.lock();
        state.calls.push(Call::Delete {
            channel_id,
            mirror_id,
        });
        state.mirrors.remove(&mirror_id);
        Ok(())
    }

    async fn fetch_reaction(&self, reaction: &ReactionRef) -> GatewayResult<ReactionCount> {
        let mut state = self.state.lock();
        state.calls.push(Call::FetchReaction(reaction.message_id));
        if let Some(error) = state.reaction_failures.pop() {
            return Err(error);
        }
        if !state.messages.contains_key(&reaction.message_id) {
            return Err(GatewayError::message_not_found(reaction.message_id));
        }

        let count = state
            .reactions
            .get(&(reaction.message_id, reaction.emoji.name.clone()))
            .copied()
            .unwrap_or(0);
        Ok(ReactionCount::new(reaction.emoji.clone(), count))
    }
}
