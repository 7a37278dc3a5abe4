//! tiktok-scraper - fetch public TikTok data as flat records
//!
//! This library queries TikTok's public web JSON endpoints and turns the
//! deeply nested responses into single-level records with a fixed key set per
//! entity kind.
//!
//! # Features
//!
//! - Trending videos, hashtags and music
//! - User and hashtag info
//! - Videos posted or liked by a user, or tagged with a hashtag
//! - Videos by URL
//! - Suggested users, hashtags and music, optionally crawled
//! - Video downloads into timestamped batch directories
//!
//! # Example
//!
//! ```no_run
//! use tiktok_scraper::{lookup, ClientConfig, TikTokApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = TikTokApi::new(&ClientConfig::default(), None)?;
//!
//!     let users = lookup::user_info(&api, &["tiktok".to_string()]).await?;
//!     for user in &users {
//!         println!("{:?} has {:?} followers", user.get_str("username"), user.get_u64("followerCount"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod lookup;
pub mod output;
pub mod projection;

// Re-exports for convenience
pub use api::{TikTokApi, TikTokSource};
pub use config::{ClientConfig, Config};
pub use download::{download_videos, DownloadSummary, Downloader};
pub use error::{Error, Result};
pub use projection::{project, FlatRecord};
