//! Inbound events the highlight engine reacts to

mod domain_event;

pub use domain_event::{DomainEvent, MessageEvent, ReactionEvent};
