//! Configuration and identifier validation.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.]{2,24}$").unwrap());

static VIDEO_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/video/(\d+)").unwrap());

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.client.base_url)?;
    validate_user_agent(&config.client.user_agent)?;

    if config.options.default_count == 0 {
        return Err(Error::ConfigValidation {
            field: "default_count".to_string(),
            message: "Default count must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the API base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingArgument("user_agent".to_string()));
    }

    Ok(())
}

/// Strip a leading `@` and check the username charset.
pub fn normalize_username(input: &str) -> Result<String> {
    let clean = input.trim().trim_start_matches('@');

    if !USERNAME_PATTERN.is_match(clean) {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' must be 2-24 letters, digits, underscores or dots",
                input
            ),
        });
    }

    Ok(clean.to_string())
}

/// Strip a leading `#` from a hashtag.
pub fn normalize_hashtag(input: &str) -> Result<String> {
    let clean = input.trim().trim_start_matches('#');

    if clean.is_empty() || clean.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: "hashtag".to_string(),
            message: format!("Invalid hashtag: '{}'", input),
        });
    }

    Ok(clean.to_string())
}

/// Extract the video ID from a video URL.
pub fn parse_video_url(input: &str) -> Result<String> {
    let input = input.trim();
    let url = Url::parse(input)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Not a web URL: {}", input),
        });
    }

    VIDEO_URL_PATTERN
        .captures(url.path())
        .and_then(|c| c.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Could not extract video ID from URL: {}", input),
        })
}
