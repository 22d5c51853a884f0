//! Highlight board - threshold bookkeeping, post/verify protocol, edit and
//! delete synchronization for one board channel.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use highlight_common::BoardSettings;
use highlight_core::entities::{BoardRecord, Message, PartialEmoji, ReactionCount, ReactionRef};
use highlight_core::error::{DomainError, GatewayError};
use highlight_core::traits::RecordStore;
use highlight_core::Snowflake;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::mirror::build_mirror;

/// Upper bound on edits issued right after a post when the count moved
/// while the mirror was being sent.
pub const MAX_STALE_REFRESHES: u32 = 3;

// ============================================================================
// Configuration
// ============================================================================

/// Display settings of one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub name: String,
    pub emoji: String,
    /// Minimum count for a first post
    pub threshold: i64,
    pub colors: Vec<u32>,
    /// Channel mirrors are posted into
    pub channel_id: Snowflake,
}

impl BoardConfig {
    /// Palette colour for a message, stable across edits
    pub fn color_for(&self, message: &Message) -> Option<u32> {
        if self.colors.is_empty() {
            return None;
        }
        let index = message.id.as_u64() % self.colors.len() as u64;
        self.colors.get(usize::try_from(index).ok()?).copied()
    }
}

impl From<&BoardSettings> for BoardConfig {
    fn from(settings: &BoardSettings) -> Self {
        Self {
            name: settings.name.clone(),
            emoji: settings.emoji.clone(),
            threshold: settings.threshold,
            colors: settings.colors.clone(),
            channel_id: settings.channel_id,
        }
    }
}

// ============================================================================
// Inputs and outcomes
// ============================================================================

/// Live reaction count observed for one emoji on one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionObservation {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub emoji: PartialEmoji,
    pub count: i64,
}

impl ReactionObservation {
    pub fn new(reaction: &ReactionRef, count: &ReactionCount) -> Self {
        Self {
            channel_id: reaction.channel_id,
            message_id: reaction.message_id,
            emoji: count.emoji.clone(),
            count: count.count,
        }
    }
}

/// Why a reaction was dropped before touching the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not this board's emoji
    EmojiMismatch,
    /// Another board already shows a mirror for the message
    OnOtherBoard,
    /// No record yet and the count is under the threshold
    BelowThreshold,
    /// A concurrent event created the record first
    AlreadyTracked,
}

/// Result of handling one reaction observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionOutcome {
    Ignored(SkipReason),
    /// Observation not above the stored peak
    CountUnchanged,
    /// Stored peak raised; the mirror (if any) was refreshed
    CountRaised { mirror: SyncOutcome },
    /// Record created but the source channel may not be highlighted
    Ineligible,
    /// Record created but the source channel could not be fetched
    ChannelUnavailable(GatewayError),
    Post(PostOutcome),
}

/// Result of the post/verify protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Posted { mirror_id: Snowflake, refreshes: u32 },
    /// Another post claimed the record first; our mirror was deleted
    Superseded { mirror_id: Snowflake },
    /// The pointer was reset while posting; our mirror was deleted
    Retracted { mirror_id: Snowflake },
    /// Original message vanished before it could be mirrored
    SourceGone,
    Failed(GatewayError),
}

/// Result of pushing the current state of a record to its mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    NoRecord,
    NoMirror,
    Edited,
    /// Mirror message no longer exists; pointer left as is
    MirrorGone,
    SourceGone,
    MirrorDeleted,
    Failed(GatewayError),
}

// ============================================================================
// Board
// ============================================================================

/// One highlight board
pub struct Board {
    config: BoardConfig,
    store: Arc<dyn RecordStore>,
    ctx: ServiceContext,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Board {
    pub fn new(config: BoardConfig, store: Arc<dyn RecordStore>, ctx: ServiceContext) -> Self {
        Self { config, store, ctx }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Check if this board reacts to `emoji`
    pub fn handles(&self, emoji: &PartialEmoji) -> bool {
        emoji.is_named(&self.config.emoji)
    }

    /// Check whether this board currently shows a mirror for the message
    pub async fn has_live_mirror(&self, message_id: Snowflake) -> ServiceResult<bool> {
        Ok(self
            .store
            .get(message_id)
            .await?
            .is_some_and(|record| record.has_live_mirror()))
    }

    /// Check whether any sibling board already shows a mirror for the message
    pub async fn is_on_other_board(
        &self,
        message_id: Snowflake,
        siblings: &[Arc<Board>],
    ) -> ServiceResult<bool> {
        for sibling in siblings.iter().filter(|b| b.name() != self.name()) {
            if sibling.has_live_mirror(message_id).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Handle a reaction count observed on a source message
    #[instrument(
        skip(self, obs, siblings),
        fields(board = %self.config.name, message_id = %obs.message_id, count = obs.count)
    )]
    pub async fn on_reaction(
        &self,
        obs: &ReactionObservation,
        siblings: &[Arc<Board>],
    ) -> ServiceResult<ReactionOutcome> {
        if !self.handles(&obs.emoji) {
            return Ok(ReactionOutcome::Ignored(SkipReason::EmojiMismatch));
        }

        if self.is_on_other_board(obs.message_id, siblings).await? {
            debug!("Message already mirrored on another board");
            return Ok(ReactionOutcome::Ignored(SkipReason::OnOtherBoard));
        }

        if let Some(record) = self.store.get(obs.message_id).await? {
            if obs.count <= record.count {
                return Ok(ReactionOutcome::CountUnchanged);
            }

            self.store.set_count(obs.message_id, obs.count).await?;
            let record = BoardRecord {
                count: obs.count,
                ..record
            };
            let mirror = if record.has_live_mirror() {
                self.refresh(obs.channel_id, &record).await
            } else {
                SyncOutcome::NoMirror
            };
            debug!(?mirror, "Count raised");
            return Ok(ReactionOutcome::CountRaised { mirror });
        }

        if obs.count < self.config.threshold {
            return Ok(ReactionOutcome::Ignored(SkipReason::BelowThreshold));
        }

        if !self.store.insert_if_absent(obs.message_id).await? {
            debug!("Record created concurrently");
            return Ok(ReactionOutcome::Ignored(SkipReason::AlreadyTracked));
        }
        self.store.set_count(obs.message_id, obs.count).await?;

        let channel = match self.ctx.gateway().fetch_channel(obs.channel_id).await {
            Ok(channel) => channel,
            Err(e) => {
                warn!(error = %e, "Source channel unavailable");
                return Ok(ReactionOutcome::ChannelUnavailable(e));
            }
        };

        if !self.ctx.eligibility().is_eligible(&channel) {
            debug!(channel_id = %channel.id, "Channel not eligible");
            return Ok(ReactionOutcome::Ineligible);
        }

        let outcome = self.post(obs.channel_id, obs.message_id).await?;
        Ok(ReactionOutcome::Post(outcome))
    }

    /// Post a new mirror, then verify the record still wants it
    #[instrument(skip(self), fields(board = %self.config.name))]
    pub async fn post(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<PostOutcome> {
        let start = self.require_record(message_id).await?;
        let gateway = self.ctx.gateway();

        let message = match gateway.fetch_message(channel_id, message_id).await {
            Ok(message) => message,
            Err(e) if e.is_not_found() => {
                debug!("Source message gone before posting");
                return Ok(PostOutcome::SourceGone);
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch source message");
                return Ok(PostOutcome::Failed(e));
            }
        };

        let mirror = build_mirror(&self.config, &message, start.count, true);
        let mirror_id = match gateway.send(self.config.channel_id, &mirror).await {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Failed to send mirror");
                return Ok(PostOutcome::Failed(e));
            }
        };

        if !self.store.claim_mirror(message_id, mirror_id).await? {
            debug!(%mirror_id, "Mirror already claimed, discarding ours");
            self.discard(mirror_id).await;
            return Ok(PostOutcome::Superseded { mirror_id });
        }

        let mut shown = start.count;
        let mut refreshes = 0;
        loop {
            let current = self.require_record(message_id).await?;
            if !current.has_live_mirror() {
                debug!(%mirror_id, "Mirror pointer reset while posting");
                self.discard(mirror_id).await;
                return Ok(PostOutcome::Retracted { mirror_id });
            }
            if current.count == shown {
                break;
            }
            if refreshes >= MAX_STALE_REFRESHES {
                debug!(shown, latest = current.count, "Giving up on stale refresh");
                break;
            }

            refreshes += 1;
            if self.refresh(channel_id, &current).await != SyncOutcome::Edited {
                break;
            }
            shown = current.count;
        }

        info!(%mirror_id, count = shown, "Mirror posted");
        Ok(PostOutcome::Posted {
            mirror_id,
            refreshes,
        })
    }

    /// Re-render the source message into the record's mirror
    ///
    /// A vanished mirror is reported but the stored pointer is kept; only
    /// delete synchronization clears it.
    pub async fn refresh(&self, channel_id: Snowflake, record: &BoardRecord) -> SyncOutcome {
        let Some(mirror_id) = record.mirror_message_id else {
            return SyncOutcome::NoMirror;
        };
        let gateway = self.ctx.gateway();

        let message = match gateway
            .fetch_message(channel_id, record.original_message_id)
            .await
        {
            Ok(message) => message,
            Err(e) if e.is_not_found() => {
                debug!(message_id = %record.original_message_id, "Source message gone");
                return SyncOutcome::SourceGone;
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch source message");
                return SyncOutcome::Failed(e);
            }
        };

        let update = build_mirror(&self.config, &message, record.count, false);
        match gateway.edit(self.config.channel_id, mirror_id, &update).await {
            Ok(()) => SyncOutcome::Edited,
            Err(e) if e.is_not_found() => {
                debug!(%mirror_id, "Mirror gone");
                SyncOutcome::MirrorGone
            }
            Err(e) => {
                warn!(%mirror_id, error = %e, "Failed to edit mirror");
                SyncOutcome::Failed(e)
            }
        }
    }

    /// Handle an edit of a source message
    #[instrument(skip(self), fields(board = %self.config.name))]
    pub async fn on_edit_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<SyncOutcome> {
        let Some(record) = self.store.get(message_id).await? else {
            return Ok(SyncOutcome::NoRecord);
        };
        if !record.has_live_mirror() {
            return Ok(SyncOutcome::NoMirror);
        }
        Ok(self.refresh(channel_id, &record).await)
    }

    /// Handle deletion of a source message
    ///
    /// The record survives with its count; only the mirror is removed.
    #[instrument(skip(self), fields(board = %self.config.name))]
    pub async fn on_delete_message(&self, message_id: Snowflake) -> ServiceResult<SyncOutcome> {
        let Some(record) = self.store.get(message_id).await? else {
            return Ok(SyncOutcome::NoRecord);
        };

        self.store.set_mirror_id(message_id, None).await?;
        let Some(mirror_id) = record.mirror_message_id else {
            return Ok(SyncOutcome::NoMirror);
        };

        match self
            .ctx
            .gateway()
            .delete(self.config.channel_id, mirror_id)
            .await
        {
            Ok(()) => {
                info!(%mirror_id, "Mirror deleted");
                Ok(SyncOutcome::MirrorDeleted)
            }
            Err(e) if e.is_not_found() => {
                debug!(%mirror_id, "Mirror already gone");
                Ok(SyncOutcome::MirrorGone)
            }
            Err(e) => {
                warn!(%mirror_id, error = %e, "Failed to delete mirror");
                Ok(SyncOutcome::Failed(e))
            }
        }
    }

    async fn require_record(&self, message_id: Snowflake) -> ServiceResult<BoardRecord> {
        self.store
            .get(message_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::RecordNotFound(message_id)))
    }

    /// Delete a mirror we no longer want; failures only get logged
    async fn discard(&self, mirror_id: Snowflake) {
        if let Err(e) = self
            .ctx
            .gateway()
            .delete(self.config.channel_id, mirror_id)
            .await
        {
            warn!(%mirror_id, error = %e, "Failed to delete surplus mirror");
        }
    }
}
