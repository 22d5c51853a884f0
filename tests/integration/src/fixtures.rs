//! Test fixtures and data generators
//!
//! Provides a configured two-board registry over in-memory stores and the
//! fake gateway, plus helpers to drive it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use highlight_common::{
    try_init_tracing_with_config, ApiConfig, AppConfig, AppSettings, BoardSettings,
    DatabaseConfig, EligibilityConfig, Environment, TracingConfig,
};
use highlight_core::entities::{BoardRecord, Channel, Message, User};
use highlight_core::events::{MessageEvent, ReactionEvent};
use highlight_core::{Permissions, Snowflake};
use highlight_service::{build_memory_registry, BoardRegistry, ReactionOutcome, SyncOutcome};

use crate::helpers::FakeGateway;

pub const GUILD_ID: Snowflake = Snowflake::new(1);
pub const SOURCE_CHANNEL: Snowflake = Snowflake::new(20);
pub const PRIVATE_CHANNEL: Snowflake = Snowflake::new(21);
pub const ADMIN_CHANNEL: Snowflake = Snowflake::new(22);
pub const STARBOARD_CHANNEL: Snowflake = Snowflake::new(1000);
pub const EVILBOARD_CHANNEL: Snowflake = Snowflake::new(2000);
pub const AUTHOR_ID: Snowflake = Snowflake::new(200);

pub const STAR: &str = "🍡";
pub const EVIL: &str = "🍢";
pub const THRESHOLD: i64 = 7;

/// Counter for unique message IDs
static COUNTER: AtomicI64 = AtomicI64::new(10_000);

/// Get a unique message ID
pub fn unique_message_id() -> Snowflake {
    Snowflake::new(COUNTER.fetch_add(1, Ordering::SeqCst))
}

fn board_settings(name: &str, emoji: &str, channel_id: Snowflake) -> BoardSettings {
    BoardSettings {
        name: name.to_string(),
        table: name.to_string(),
        emoji: emoji.to_string(),
        threshold: THRESHOLD,
        colors: vec![0x00fc_b1e3, 0x00fe_d983, 0x00a6_d387],
        channel_id,
    }
}

/// Configuration with both boards at the default threshold
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "highlight-test".to_string(),
            env: Environment::Development,
        },
        database: DatabaseConfig {
            url: "postgres://localhost/highlight_test".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        api: ApiConfig {
            base_url: "http://localhost".to_string(),
            token: None,
            timeout_secs: 1,
        },
        starboard: board_settings("starboard", STAR, STARBOARD_CHANNEL),
        evilboard: board_settings("evilboard", EVIL, EVILBOARD_CHANNEL),
        eligibility: EligibilityConfig {
            denied_channel_ids: HashSet::from([ADMIN_CHANNEL]),
        },
    }
}

pub fn public_channel(id: Snowflake) -> Channel {
    Channel::new_text(
        id,
        GUILD_ID,
        "general".to_string(),
        Permissions::PUBLIC_READ | Permissions::SEND_MESSAGES,
    )
}

/// Guild channel hidden from the default role
pub fn hidden_channel(id: Snowflake) -> Channel {
    Channel::new_text(
        id,
        GUILD_ID,
        "staff".to_string(),
        Permissions::SEND_MESSAGES,
    )
}

pub fn message(id: Snowflake, channel_id: Snowflake, content: &str) -> Message {
    let mut author = User::new(AUTHOR_ID, "alice".to_string());
    author.global_name = Some("Alice".to_string());
    let mut message = Message::new(id, channel_id, author, content.to_string());
    message.guild_id = Some(GUILD_ID);
    message
}

/// Registry wired to a fresh fake gateway
pub struct Harness {
    pub gateway: Arc<FakeGateway>,
    pub registry: BoardRegistry,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(&test_config())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self::try_with_config(config).unwrap_or_else(|e| panic!("harness setup failed: {e:#}"))
    }

    pub fn try_with_config(config: &AppConfig) -> anyhow::Result<Self> {
        // Another test may already have installed a subscriber
        let _ = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env));

        let gateway = Arc::new(FakeGateway::new());
        for channel in [
            public_channel(SOURCE_CHANNEL),
            hidden_channel(PRIVATE_CHANNEL),
            public_channel(ADMIN_CHANNEL),
            public_channel(STARBOARD_CHANNEL),
            public_channel(EVILBOARD_CHANNEL),
        ] {
            gateway.add_channel(channel);
        }

        let registry = build_memory_registry(config, gateway.clone())?;
        Ok(Self { gateway, registry })
    }

    /// Add a source message in the public channel
    pub fn post_source(&self, content: &str) -> Snowflake {
        self.post_source_in(SOURCE_CHANNEL, content)
    }

    pub fn post_source_in(&self, channel_id: Snowflake, content: &str) -> Snowflake {
        let id = unique_message_id();
        self.gateway.add_message(message(id, channel_id, content));
        id
    }

    /// Set the live count and deliver a reaction event
    pub async fn react(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &str,
        count: i64,
    ) -> Option<ReactionOutcome> {
        self.gateway.set_reactions(message_id, emoji, count);
        let event = ReactionEvent::new(channel_id, message_id, emoji);
        let report = self.registry.on_reaction(&event).await;
        let board = if emoji == EVIL { "evilboard" } else { "starboard" };
        report
            .get(board)
            .map(|result| result.as_ref().map_or_else(|e| panic!("{e}"), Clone::clone))
    }

    pub async fn edit(&self, channel_id: Snowflake, message_id: Snowflake) -> Vec<SyncOutcome> {
        let report = self
            .registry
            .on_message_edit(&MessageEvent::new(channel_id, message_id))
            .await;
        sync_outcomes(report.results)
    }

    pub async fn delete(&self, channel_id: Snowflake, message_id: Snowflake) -> Vec<SyncOutcome> {
        let report = self
            .registry
            .on_message_delete(&MessageEvent::new(channel_id, message_id))
            .await;
        sync_outcomes(report.results)
    }

    /// Stored record for a message on the named board
    pub async fn record(&self, board: &str, message_id: Snowflake) -> Option<BoardRecord> {
        self.registry
            .board(board)
            .unwrap_or_else(|| panic!("unknown board {board}"))
            .store()
            .get(message_id)
            .await
            .unwrap_or_else(|e| panic!("store failed: {e}"))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

fn sync_outcomes(
    results: Vec<(String, highlight_service::ServiceResult<SyncOutcome>)>,
) -> Vec<SyncOutcome> {
    results
        .into_iter()
        .map(|(board, result)| result.unwrap_or_else(|e| panic!("{board} failed: {e}")))
        .collect()
}
