//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Platform client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the platform's web API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Language sent with every request.
    #[serde(default = "default_language")]
    pub language: String,

    /// Region sent with every request.
    #[serde(default = "default_region")]
    pub region: String,

    /// Request timeout. Unset means the HTTP layer's default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Output and download options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Number of items requested when `--n` is not given.
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Whether to pretty-print results.
    #[serde(default)]
    pub print_output: bool,

    /// Base directory for downloaded videos.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// Whether to show a progress bar while downloading.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            language: default_language(),
            region: default_region(),
            timeout_seconds: None,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            print_output: false,
            download_directory: default_download_directory(),
            show_progress: true,
        }
    }
}

fn default_base_url() -> String {
    "https://m.tiktok.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_region() -> String {
    "US".to_string()
}

fn default_count() -> usize {
    10
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("downloadedTikToks")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.client.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.client.base_url, "https://m.tiktok.com");
        assert_eq!(config.options.default_count, 10);
        assert_eq!(
            config.options.download_directory,
            PathBuf::from("downloadedTikToks")
        );
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [client]
            region = "GB"
            timeout_seconds = 15

            [options]
            default_count = 3
            print_output = true
            "#,
        )
        .unwrap();

        assert_eq!(config.client.region, "GB");
        assert_eq!(config.client.language, "en");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.options.default_count, 3);
        assert!(config.options.print_output);
        assert!(config.options.show_progress);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiktok-scraper.toml");
        std::fs::write(&path, "[options]\ndefault_count = 25\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.options.default_count, 25);
        assert_eq!(loaded.client.user_agent, ClientConfig::default().user_agent);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[options\n").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
