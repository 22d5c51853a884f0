//! Board registry - fans platform events out to every board
//!
//! Boards find their siblings through the registry rather than holding
//! references to each other. All handling for one original message runs
//! under a per-message lock, so the exclusivity check and the post are
//! atomic with respect to other events for the same message.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use highlight_core::entities::{ReactionCount, ReactionRef};
use highlight_core::error::DomainError;
use highlight_core::events::{DomainEvent, MessageEvent, ReactionEvent};
use highlight_core::Snowflake;

use super::board::{Board, ReactionObservation, ReactionOutcome, SyncOutcome};
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::locks::KeyLocks;

/// Per-board results of one event, in registry order
#[derive(Debug)]
pub struct EventReport<T> {
    pub results: Vec<(String, ServiceResult<T>)>,
}

impl<T> EventReport<T> {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Result for the named board, if it handled the event
    pub fn get(&self, board: &str) -> Option<&ServiceResult<T>> {
        self.results
            .iter()
            .find(|(name, _)| name == board)
            .map(|(_, result)| result)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for EventReport<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Report returned by [`BoardRegistry::dispatch`]
#[derive(Debug)]
pub enum DispatchReport {
    Reaction(EventReport<ReactionOutcome>),
    Sync(EventReport<SyncOutcome>),
}

/// Named boards plus the lock that serializes work per message
#[derive(Debug)]
pub struct BoardRegistry {
    ctx: ServiceContext,
    boards: Vec<Arc<Board>>,
    locks: KeyLocks,
}

impl BoardRegistry {
    /// Create a registry. Board names must be unique.
    pub fn new(ctx: ServiceContext, boards: Vec<Board>) -> ServiceResult<Self> {
        let mut names = HashSet::new();
        for board in &boards {
            if !names.insert(board.name().to_string()) {
                return Err(DomainError::DuplicateBoard(board.name().to_string()).into());
            }
        }

        Ok(Self {
            ctx,
            boards: boards.into_iter().map(Arc::new).collect(),
            locks: KeyLocks::new(),
        })
    }

    /// Find a board by name
    pub fn board(&self, name: &str) -> Option<&Arc<Board>> {
        self.boards.iter().find(|b| b.name() == name)
    }

    pub fn boards(&self) -> &[Arc<Board>] {
        &self.boards
    }

    /// Check whether a board other than `name` shows a mirror for the message
    pub async fn is_on_other_board(&self, name: &str, message_id: Snowflake) -> ServiceResult<bool> {
        let board = self
            .board(name)
            .ok_or_else(|| DomainError::BoardNotFound(name.to_string()))?;
        board.is_on_other_board(message_id, &self.boards).await
    }

    /// Route any event to its handler
    #[instrument(skip_all, fields(message_id = %event.message_id()))]
    pub async fn dispatch(&self, event: &DomainEvent) -> DispatchReport {
        match event {
            DomainEvent::ReactionAdded(e) => DispatchReport::Reaction(self.on_reaction(e).await),
            DomainEvent::MessageUpdated(e) => DispatchReport::Sync(self.on_message_edit(e).await),
            DomainEvent::MessageDeleted(e) => {
                DispatchReport::Sync(self.on_message_delete(e).await)
            }
        }
    }

    /// Handle a reaction being added
    ///
    /// The live count is fetched once and shared by every board. Boards run
    /// in registry order; one failing board never stops the next.
    #[instrument(skip(self, event), fields(message_id = %event.message_id, emoji = %event.emoji))]
    pub async fn on_reaction(&self, event: &ReactionEvent) -> EventReport<ReactionOutcome> {
        let reaction = event.reaction_ref();
        if !self.boards.iter().any(|b| b.handles(&reaction.emoji)) {
            return EventReport::empty();
        }

        let _guard = self.locks.lock(event.message_id).await;

        let Some(count) = self.fetch_count(&reaction).await else {
            return EventReport::empty();
        };
        let obs = ReactionObservation::new(&reaction, &count);

        let mut report = EventReport::empty();
        for board in &self.boards {
            let result = board.on_reaction(&obs, &self.boards).await;
            if let Err(e) = &result {
                warn!(board = board.name(), code = e.error_code(), error = %e, "Board failed to handle reaction");
            }
            report.results.push((board.name().to_string(), result));
        }
        report
    }

    /// Handle an edit of a source message
    #[instrument(skip(self, event), fields(message_id = %event.message_id))]
    pub async fn on_message_edit(&self, event: &MessageEvent) -> EventReport<SyncOutcome> {
        let _guard = self.locks.lock(event.message_id).await;

        let mut report = EventReport::empty();
        for board in &self.boards {
            let result = board
                .on_edit_message(event.channel_id, event.message_id)
                .await;
            if let Err(e) = &result {
                warn!(board = board.name(), code = e.error_code(), error = %e, "Board failed to sync edit");
            }
            report.results.push((board.name().to_string(), result));
        }
        report
    }

    /// Handle deletion of a source message
    #[instrument(skip(self, event), fields(message_id = %event.message_id))]
    pub async fn on_message_delete(&self, event: &MessageEvent) -> EventReport<SyncOutcome> {
        let _guard = self.locks.lock(event.message_id).await;

        let mut report = EventReport::empty();
        for board in &self.boards {
            let result = board.on_delete_message(event.message_id).await;
            if let Err(e) = &result {
                warn!(board = board.name(), code = e.error_code(), error = %e, "Board failed to sync delete");
            }
            report.results.push((board.name().to_string(), result));
        }
        report
    }

    /// Fetch the live count shared by every board
    async fn fetch_count(&self, reaction: &ReactionRef) -> Option<ReactionCount> {
        match self.ctx.gateway().fetch_reaction(reaction).await {
            Ok(count) => Some(count),
            Err(e) if e.is_not_found() => {
                debug!(error = %e, "Reacted message gone");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch reaction count");
                None
            }
        }
    }
}
