//! TikTok API module.
//!
//! This module provides:
//! - The `TikTokSource` capability trait
//! - HTTP client for the platform's web JSON endpoints
//! - Request selectors and envelope helpers

pub mod client;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{TikTokApi, PAGE_SIZE, REFERER};
pub use source::TikTokSource;
pub use types::*;
