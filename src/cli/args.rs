//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;

/// TikTok public data scraper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tiktok-scraper",
    version,
    about = "Fetch public TikTok data as flat JSON records",
    long_about = "A CLI tool to fetch trending content, user and hashtag info, feeds and \
                  suggestions from TikTok's public web endpoints.\n\n\
                  Results can be printed, written to a JSON file, and video results can be \
                  downloaded as MP4 files."
)]
pub struct Args {
    /// Function to run.
    #[arg(long, value_enum)]
    pub function: Function,

    /// Number of results per identifier (defaults to the configured count).
    #[arg(long = "n")]
    pub n: Option<usize>,

    /// Pretty-print the results.
    #[arg(
        long = "printOutput",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub print_output: Option<bool>,

    /// Hashtag(s) to look up, with or without the leading '#'.
    #[arg(long, num_args = 1..)]
    pub hashtag: Vec<String>,

    /// Username(s) to look up, with or without the leading '@'.
    #[arg(long, num_args = 1..)]
    pub username: Vec<String>,

    /// Video URL(s) to look up.
    #[arg(long, num_args = 1..)]
    pub url: Vec<String>,

    /// Download the videos of video-producing functions.
    #[arg(long)]
    pub download: bool,

    /// Write the results to this JSON file.
    #[arg(long = "outFile", value_name = "PATH")]
    pub out_file: Option<PathBuf>,

    /// Follow suggested users transitively when fetching suggestions.
    #[arg(long)]
    pub crawl: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "tiktok-scraper.toml")]
    pub config: PathBuf,

    /// Base directory for downloaded videos.
    #[arg(long = "download-dir", value_name = "PATH")]
    pub download_directory: Option<PathBuf>,

    /// Browser user agent string.
    #[arg(long = "user-agent", env = "TIKTOK_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// The functions the CLI can run, under their command-line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Function {
    #[value(name = "getTrendingTikToks")]
    TrendingTikToks,
    #[value(name = "getTrendingHashtags")]
    TrendingHashtags,
    #[value(name = "getTrendingMusic")]
    TrendingMusic,
    #[value(name = "getHashtagInfo")]
    HashtagInfo,
    #[value(name = "getUserInfo")]
    UserInfo,
    #[value(name = "getUserLikedByUsername")]
    UserLikedByUsername,
    #[value(name = "getSuggestedUsers")]
    SuggestedUsers,
    #[value(name = "getSuggestedHashtags")]
    SuggestedHashtags,
    #[value(name = "getSuggestedMusic")]
    SuggestedMusic,
    #[value(name = "byUsername")]
    ByUsername,
    #[value(name = "byHashtag")]
    ByHashtag,
    #[value(name = "getTikTokByUrl")]
    TikTokByUrl,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(print_output) = self.print_output {
            config.options.print_output = print_output;
        }

        if let Some(ref dir) = self.download_directory {
            config.options.download_directory = dir.clone();
        }

        if let Some(ref user_agent) = self.user_agent {
            config.client.user_agent = user_agent.clone();
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }

    /// Result count for this invocation.
    pub fn count(&self, config: &Config) -> usize {
        self.n.unwrap_or(config.options.default_count)
    }
}
