//! Ports - interfaces the engine depends on, implemented by infrastructure crates

mod gateway;
mod repositories;

pub use gateway::{ChannelGateway, GatewayResult};
pub use repositories::{RecordStore, RepoResult};
