//! Download module for video files.
//!
//! This module provides:
//! - The media host HTTP client
//! - Batch downloading of video records
//! - Batch summary bookkeeping

pub mod media;
pub mod state;

pub use media::{download_videos, Downloader};
pub use state::DownloadSummary;
