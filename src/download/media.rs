//! Video file downloading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use futures::StreamExt;
use reqwest::{header, Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::REFERER;
use crate::config::ClientConfig;
use crate::download::state::DownloadSummary;
use crate::error::{Error, Result};
use crate::fs::{batch_directory, ensure_dir, video_filename};
use crate::output::create_item_bar;
use crate::projection::FlatRecord;

/// HTTP client for media hosts.
///
/// Unauthenticated; sends the web client's referer and user agent, which the
/// CDN checks.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// Create a new downloader.
    pub fn new(config: &ClientConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::REFERER, header::HeaderValue::from_static(REFERER));

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Start a GET for a media URL.
    async fn fetch(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }

    /// Stream a media URL into `output_path`.
    async fn download_to(&self, url: &str, output_path: &Path) -> Result<u64> {
        let response = self.fetch(url).await?;

        let mut file = File::create(output_path).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}

/// Download every record's video into a new timestamped directory under
/// `base_dir`.
///
/// Records without a play address are skipped without a request. A failed
/// download is logged and counted; the batch carries on.
pub async fn download_videos(
    downloader: &Downloader,
    records: &[FlatRecord],
    base_dir: &Path,
    show_progress: bool,
) -> Result<DownloadSummary> {
    let directory = batch_directory(base_dir, Local::now());
    ensure_dir(&directory)?;
    tracing::info!("Downloading {} videos to {}", records.len(), directory.display());

    let mut summary = DownloadSummary::new(directory);

    let progress = if show_progress && !records.is_empty() {
        Some(create_item_bar(records.len() as u64, "Downloading"))
    } else {
        None
    };

    for record in records {
        download_one(downloader, record, &mut summary).await;

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(summary)
}

async fn download_one(downloader: &Downloader, record: &FlatRecord, summary: &mut DownloadSummary) {
    let (Some(id), Some(url)) = (record.id(), record.play_addr()) else {
        tracing::debug!("Skipping record without play address: {:?}", record.id());
        summary.record_skipped();
        return;
    };

    let output_path: PathBuf = match video_filename(id) {
        Ok(name) => summary.directory.join(name),
        Err(e) => {
            tracing::warn!("Skipping video {}: {}", id, e);
            summary.record_failed();
            return;
        }
    };

    if output_path.exists() {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        summary.record_skipped();
        return;
    }

    match downloader.download_to(url, &output_path).await {
        Ok(bytes) => {
            tracing::info!("Downloaded: {} ({} bytes)", output_path.display(), bytes);
            summary.record_downloaded();
        }
        Err(e) => {
            tracing::warn!("Failed to download video {}: {}", id, e);
            if output_path.exists() {
                if let Err(e) = tokio::fs::remove_file(&output_path).await {
                    tracing::debug!("Could not remove partial file {}: {}", output_path.display(), e);
                }
            }
            summary.record_failed();
        }
    }
}
