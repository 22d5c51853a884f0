//! Integration test utilities for the highlight boards
//!
//! This crate provides an in-process gateway fake and fixtures for running
//! end-to-end scenarios through the board registry.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
