//! Board services
//!
//! Boards own the mirror lifecycle for one emoji; the registry serializes
//! events per message and fans them out to every board.

pub mod board;
pub mod context;
pub mod eligibility;
pub mod error;
pub mod locks;
pub mod mirror;
pub mod registry;

pub use board::{
    Board, BoardConfig, PostOutcome, ReactionObservation, ReactionOutcome, SkipReason,
    SyncOutcome, MAX_STALE_REFRESHES,
};
pub use context::ServiceContext;
pub use eligibility::EligibilityFilter;
pub use error::{ServiceError, ServiceResult};
pub use locks::{KeyGuard, KeyLocks};
pub use mirror::build_mirror;
pub use registry::{BoardRegistry, DispatchReport, EventReport};
