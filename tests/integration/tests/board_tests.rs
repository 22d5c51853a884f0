//! End-to-end board scenarios through the registry
//!
//! Run with: cargo test -p integration-tests --test board_tests

use std::sync::Arc;

use futures::future::join_all;
use highlight_core::error::GatewayError;
use highlight_core::events::ReactionEvent;
use highlight_core::Snowflake;
use highlight_service::{BoardRegistry, PostOutcome, ReactionOutcome, SkipReason, SyncOutcome};
use integration_tests::*;

fn posted_mirror(outcome: Option<ReactionOutcome>) -> Snowflake {
    match outcome {
        Some(ReactionOutcome::Post(PostOutcome::Posted { mirror_id, .. })) => mirror_id,
        other => panic!("expected a posted mirror, got {other:?}"),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_threshold_then_raise() {
    let h = Harness::new();
    let m = h.post_source("look at this");

    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 3).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::Ignored(SkipReason::BelowThreshold))
    );
    assert_eq!(h.record("starboard", m).await, None);

    let mirror_id = posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);
    let record = h.record("starboard", m).await.unwrap();
    assert_eq!(record.count, 7);
    assert_eq!(record.mirror_message_id, Some(mirror_id));

    let sent = h.gateway.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].content,
        format!("🍡 **7** - https://discord.com/channels/1/20/{m} (<@200>)")
    );
    assert_eq!(
        sent[0].embeds[0].description.as_deref(),
        Some("look at this")
    );

    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 9).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::CountRaised {
            mirror: SyncOutcome::Edited
        })
    );
    assert_eq!(h.record("starboard", m).await.unwrap().count, 9);

    let mirror = h.gateway.mirror(mirror_id).unwrap();
    assert!(mirror.content.starts_with("🍡 **9** - "));
    assert_eq!(h.gateway.send_count(), 1);
    assert_eq!(h.gateway.edit_count(), 1);
}

#[tokio::test]
async fn test_sibling_mirror_blocks_other_board() {
    let h = Harness::new();
    let m = h.post_source("divisive");

    posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);

    let outcome = h.react(SOURCE_CHANNEL, m, EVIL, 12).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::Ignored(SkipReason::OnOtherBoard))
    );
    assert_eq!(h.record("evilboard", m).await, None);
    assert_eq!(h.gateway.live_mirrors_in(EVILBOARD_CHANNEL), 0);
    assert!(h
        .registry
        .is_on_other_board("evilboard", m)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_lower_observation_keeps_peak() {
    let h = Harness::new();
    let m = h.post_source("peak");

    let mirror_id = posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 10).await);
    let before = h.gateway.mirror(mirror_id).unwrap();

    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 1).await;
    assert_eq!(outcome, Some(ReactionOutcome::CountUnchanged));

    assert_eq!(h.record("starboard", m).await.unwrap().count, 10);
    assert_eq!(h.gateway.mirror(mirror_id).unwrap(), before);
    assert_eq!(h.gateway.edit_count(), 0);
}

#[tokio::test]
async fn test_delete_clears_mirror_and_keeps_record() {
    let h = Harness::new();
    let m = h.post_source("soon gone");

    let mirror_id = posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 8).await);
    h.gateway.remove_message(m);

    let outcomes = h.delete(SOURCE_CHANNEL, m).await;
    assert_eq!(
        outcomes,
        vec![SyncOutcome::MirrorDeleted, SyncOutcome::NoRecord]
    );

    let record = h.record("starboard", m).await.unwrap();
    assert_eq!(record.mirror_message_id, None);
    assert_eq!(record.count, 8);
    assert_eq!(h.gateway.mirror(mirror_id), None);
    assert!(h.gateway.calls().contains(&Call::Delete {
        channel_id: STARBOARD_CHANNEL,
        mirror_id,
    }));
}

#[tokio::test]
async fn test_edit_without_record_makes_no_calls() {
    let h = Harness::new();
    let m = h.post_source("never reacted");

    let outcomes = h.edit(SOURCE_CHANNEL, m).await;
    assert_eq!(outcomes, vec![SyncOutcome::NoRecord, SyncOutcome::NoRecord]);
    assert!(h.gateway.calls().is_empty());
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn test_count_never_decreases() {
    let h = Harness::new();
    let m = h.post_source("bumpy");

    let mut peak = 0;
    for count in [7, 9, 4, 9, 12, 0, 11, 13] {
        h.react(SOURCE_CHANNEL, m, STAR, count).await;
        peak = peak.max(count);
        assert_eq!(h.record("starboard", m).await.unwrap().count, peak);
    }
    assert_eq!(h.gateway.send_count(), 1);
    // 9, 12 and 13 raise the peak
    assert_eq!(h.gateway.edit_count(), 3);
}

#[tokio::test]
async fn test_below_threshold_creates_nothing() {
    let h = Harness::new();
    let m = h.post_source("meh");

    for count in 1..THRESHOLD {
        h.react(SOURCE_CHANNEL, m, STAR, count).await;
        h.react(SOURCE_CHANNEL, m, EVIL, count).await;
    }

    assert_eq!(h.record("starboard", m).await, None);
    assert_eq!(h.record("evilboard", m).await, None);
    assert!(h.gateway.message_calls().is_empty());
}

#[tokio::test]
async fn test_edit_after_delete_makes_no_calls() {
    let h = Harness::new();
    let m = h.post_source("edited later");

    posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);
    h.delete(SOURCE_CHANNEL, m).await;
    h.gateway.clear_calls();

    let outcomes = h.edit(SOURCE_CHANNEL, m).await;
    assert_eq!(outcomes, vec![SyncOutcome::NoMirror, SyncOutcome::NoRecord]);
    assert!(h.gateway.calls().is_empty());
}

#[tokio::test]
async fn test_edit_rerenders_mirror() {
    let h = Harness::new();
    let m = h.post_source("first draft");

    let mirror_id = posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);
    h.gateway.add_message(message(m, SOURCE_CHANNEL, "second draft"));

    let outcomes = h.edit(SOURCE_CHANNEL, m).await;
    assert_eq!(outcomes, vec![SyncOutcome::Edited, SyncOutcome::NoRecord]);

    let mirror = h.gateway.mirror(mirror_id).unwrap();
    assert!(mirror.content.starts_with("🍡 **7** - "));
    assert_eq!(
        mirror.embeds[0].description.as_deref(),
        Some("second draft")
    );
    assert!(!mirror.has_attachments());
}

#[tokio::test]
async fn test_sibling_may_post_after_mirror_deleted() {
    let h = Harness::new();
    let m = h.post_source("second chance");

    posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);
    h.delete(SOURCE_CHANNEL, m).await;

    posted_mirror(h.react(SOURCE_CHANNEL, m, EVIL, 7).await);
    assert_eq!(h.gateway.live_mirrors_in(STARBOARD_CHANNEL), 0);
    assert_eq!(h.gateway.live_mirrors_in(EVILBOARD_CHANNEL), 1);

    // the star record keeps its peak but never posts again
    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 20).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::Ignored(SkipReason::OnOtherBoard))
    );
}

// ============================================================================
// Eligibility
// ============================================================================

#[tokio::test]
async fn test_hidden_channel_is_ineligible() {
    let h = Harness::new();
    let m = h.post_source_in(PRIVATE_CHANNEL, "staff only");

    let outcome = h.react(PRIVATE_CHANNEL, m, STAR, 7).await;
    assert_eq!(outcome, Some(ReactionOutcome::Ineligible));

    // placeholder record stays without a mirror
    let record = h.record("starboard", m).await.unwrap();
    assert_eq!(record.count, 7);
    assert_eq!(record.mirror_message_id, None);
    assert_eq!(h.gateway.send_count(), 0);
}

#[tokio::test]
async fn test_denied_and_board_channels_are_ineligible() {
    let h = Harness::new();

    for channel in [ADMIN_CHANNEL, STARBOARD_CHANNEL, EVILBOARD_CHANNEL] {
        let m = h.post_source_in(channel, "meta");
        let outcome = h.react(channel, m, STAR, 7).await;
        assert_eq!(outcome, Some(ReactionOutcome::Ineligible), "{channel}");
    }
    assert_eq!(h.gateway.send_count(), 0);
}

#[tokio::test]
async fn test_unknown_channel_is_unavailable() {
    let h = Harness::new();
    let lost = Snowflake::new(777);
    let m = h.post_source_in(lost, "where am i");

    let outcome = h.react(lost, m, STAR, 7).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::ChannelUnavailable(
            GatewayError::channel_not_found(lost)
        ))
    );
    assert_eq!(h.gateway.send_count(), 0);
}

// ============================================================================
// Failure tolerance
// ============================================================================

#[tokio::test]
async fn test_send_failure_leaves_placeholder() {
    let h = Harness::new();
    let m = h.post_source("unlucky");

    h.gateway.fail_next_send(GatewayError::transport("connection reset"));
    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 7).await;
    assert!(matches!(
        outcome,
        Some(ReactionOutcome::Post(PostOutcome::Failed(_)))
    ));

    let record = h.record("starboard", m).await.unwrap();
    assert_eq!(record.mirror_message_id, None);
    assert_eq!(record.count, 7);

    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 8).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::CountRaised {
            mirror: SyncOutcome::NoMirror
        })
    );
    assert_eq!(h.gateway.send_count(), 0);
}

#[tokio::test]
async fn test_mirror_removed_externally() {
    let h = Harness::new();
    let m = h.post_source("moderated");

    let mirror_id = posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);
    h.gateway.remove_mirror(mirror_id);

    let outcome = h.react(SOURCE_CHANNEL, m, STAR, 9).await;
    assert_eq!(
        outcome,
        Some(ReactionOutcome::CountRaised {
            mirror: SyncOutcome::MirrorGone
        })
    );

    // pointer is only cleared by delete sync
    let record = h.record("starboard", m).await.unwrap();
    assert_eq!(record.mirror_message_id, Some(mirror_id));
    assert_eq!(record.count, 9);
}

#[tokio::test]
async fn test_reaction_lookup_failure_skips_event() {
    let h = Harness::new();
    let m = h.post_source("flaky");

    h.gateway.fail_next_reaction(GatewayError::transport("timeout"));
    assert_eq!(h.react(SOURCE_CHANNEL, m, STAR, 7).await, None);
    assert_eq!(h.record("starboard", m).await, None);

    // the next event recomputes from scratch
    posted_mirror(h.react(SOURCE_CHANNEL, m, STAR, 7).await);
}

#[tokio::test]
async fn test_source_gone_before_reaction_lookup() {
    let h = Harness::new();
    let m = h.post_source("vanishing");
    h.gateway.remove_message(m);

    assert_eq!(h.react(SOURCE_CHANNEL, m, STAR, 7).await, None);
    assert_eq!(h.record("starboard", m).await, None);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_duplicate_events_post_once() {
    let h = Harness::new();
    let m = h.post_source("popular");
    h.gateway.set_reactions(m, STAR, 7);

    let events: Vec<_> = (0..8)
        .map(|_| ReactionEvent::new(SOURCE_CHANNEL, m, STAR))
        .collect();
    let reports = join_all(events.iter().map(|e| h.registry.on_reaction(e))).await;

    let posted = reports
        .iter()
        .filter(|report| {
            matches!(
                report.get("starboard"),
                Some(Ok(ReactionOutcome::Post(PostOutcome::Posted { .. })))
            )
        })
        .count();
    assert_eq!(posted, 1);
    assert_eq!(h.gateway.send_count(), 1);
    assert_eq!(h.gateway.live_mirrors_in(STARBOARD_CHANNEL), 1);
    assert_eq!(h.record("starboard", m).await.unwrap().count, 7);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_competing_boards_stay_exclusive() {
    let Harness { gateway, registry } = Harness::new();
    let registry = Arc::new(registry);

    let mut messages = Vec::new();
    for i in 0..16 {
        let id = unique_message_id();
        gateway.add_message(message(id, SOURCE_CHANNEL, &format!("message {i}")));
        gateway.set_reactions(id, STAR, 7);
        gateway.set_reactions(id, EVIL, 7);
        messages.push(id);
    }

    let mut tasks = Vec::new();
    for &id in &messages {
        for emoji in [STAR, EVIL, STAR, EVIL] {
            let registry = Arc::clone(&registry);
            tasks.push(tokio::spawn(async move {
                registry
                    .on_reaction(&ReactionEvent::new(SOURCE_CHANNEL, id, emoji))
                    .await;
            }));
        }
    }
    for task in tasks {
        task.await.unwrap();
    }

    for &id in &messages {
        let live = live_boards(&registry, id).await;
        assert_eq!(live, 1, "message {id} mirrored on {live} boards");
    }
    assert_eq!(gateway.send_count(), messages.len());
    assert_eq!(
        gateway.live_mirrors_in(STARBOARD_CHANNEL) + gateway.live_mirrors_in(EVILBOARD_CHANNEL),
        messages.len()
    );
}

async fn live_boards(registry: &BoardRegistry, id: Snowflake) -> usize {
    let mut live = 0;
    for board in registry.boards() {
        if board.has_live_mirror(id).await.unwrap() {
            live += 1;
        }
    }
    live
}

#[test]
fn test_registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BoardRegistry>();
    assert_send_sync::<FakeGateway>();
}
