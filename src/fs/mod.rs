//! Filesystem module.
//!
//! Provides:
//! - Batch directory layout
//! - Video file naming

pub mod naming;
pub mod paths;

pub use naming::{sanitize_filename, video_filename};
pub use paths::{batch_directory, ensure_dir};
