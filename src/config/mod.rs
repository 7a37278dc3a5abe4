//! Configuration module for tiktok-scraper.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration and identifier validation

pub mod loader;
pub mod validation;

pub use loader::{ClientConfig, Config, OptionsConfig};
pub use validation::{
    normalize_hashtag, normalize_username, parse_video_url, validate_config,
};
