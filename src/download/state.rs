//! Download batch bookkeeping.

use std::path::PathBuf;

/// Outcome of one download batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Directory the batch wrote into.
    pub directory: PathBuf,
}

impl DownloadSummary {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            downloaded: 0,
            skipped: 0,
            failed: 0,
            directory,
        }
    }

    pub fn record_downloaded(&mut self) {
        self.downloaded += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Number of records the batch looked at.
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }

    /// Whether downloads were attempted and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.downloaded == 0
    }
}
