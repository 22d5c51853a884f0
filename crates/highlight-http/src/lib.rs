//! # highlight-http
//!
//! [`ChannelGateway`](highlight_core::ChannelGateway) over the platform's REST API.
//!
//! ## Overview
//!
//! - Wire DTOs (`models`) and DTO → entity mappers (`mappers`)
//! - `RestChannelGateway`: reqwest client with status → `GatewayError` mapping
//!
//! ## Usage
//!
//! ```rust,ignore
//! use highlight_http::{RestChannelGateway, RestConfig};
//!
//! let gateway = RestChannelGateway::new(&RestConfig::from(&app_config.api))?;
//! let channel = gateway.fetch_channel(channel_id).await?;
//! ```

pub mod client;
pub mod config;
pub mod mappers;
pub mod models;

mod error;

pub use client::RestChannelGateway;
pub use config::RestConfig;
