//! # highlight-service
//!
//! Application layer: highlight boards, the registry that fans events out to
//! them, and wiring from configuration.

pub mod bootstrap;
pub mod services;

pub use bootstrap::{build_memory_registry, build_registry, connect};
pub use services::{
    Board, BoardConfig, BoardRegistry, DispatchReport, EligibilityFilter, EventReport, KeyLocks,
    PostOutcome, ReactionObservation, ReactionOutcome, ServiceContext, ServiceError,
    ServiceResult, SkipReason, SyncOutcome, MAX_STALE_REFRESHES,
};
