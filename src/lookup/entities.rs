//! Lookups of single users, hashtags and videos.

use serde_json::Value;

use crate::api::{is_success, status_code, TikTokSource, UserHandle};
use crate::config::parse_video_url;
use crate::error::{Error, Result};
use crate::lookup::for_each_identifier;
use crate::projection::{project, FlatRecord, HASHTAG_INFO_PLAN, USER_PLAN, VIDEO_PLAN};

/// Fetch a user detail envelope, failing unless the platform reports success.
async fn user_envelope(source: &dyn TikTokSource, username: &str) -> Result<Value> {
    let envelope = source.lookup_user(username).await?;
    if !is_success(&envelope) {
        return Err(Error::lookup_failed("username", username, status_code(&envelope)));
    }
    Ok(envelope)
}

/// Fetch a challenge detail envelope, failing unless the platform reports success.
async fn hashtag_envelope(source: &dyn TikTokSource, name: &str) -> Result<Value> {
    let envelope = source.lookup_hashtag(name).await?;
    if !is_success(&envelope) {
        return Err(Error::lookup_failed("hashtag", name, status_code(&envelope)));
    }
    Ok(envelope)
}

/// Resolve a username to the IDs the feed endpoints need.
pub async fn resolve_user(source: &dyn TikTokSource, username: &str) -> Result<UserHandle> {
    let envelope = user_envelope(source, username).await?;
    UserHandle::from_envelope(username, &envelope)
        .ok_or_else(|| Error::MalformedResponse(format!("user '{}' has no id", username)))
}

/// Resolve a hashtag name to its challenge ID.
pub async fn resolve_hashtag_id(source: &dyn TikTokSource, name: &str) -> Result<String> {
    let envelope = hashtag_envelope(source, name).await?;
    project(&envelope, HASHTAG_INFO_PLAN)
        .id()
        .map(str::to_string)
        .ok_or_else(|| Error::MalformedResponse(format!("hashtag '{}' has no id", name)))
}

/// Profile and stats of each user.
pub async fn user_info(
    source: &dyn TikTokSource,
    usernames: &[String],
) -> Result<Vec<FlatRecord>> {
    for_each_identifier("username", usernames, |username| async move {
        let envelope = user_envelope(source, &username).await?;
        Ok(vec![project(&envelope, USER_PLAN)])
    })
    .await
}

/// Description and stats of each hashtag.
pub async fn hashtag_info(
    source: &dyn TikTokSource,
    hashtags: &[String],
) -> Result<Vec<FlatRecord>> {
    for_each_identifier("hashtag", hashtags, |name| async move {
        let envelope = hashtag_envelope(source, &name).await?;
        Ok(vec![project(&envelope, HASHTAG_INFO_PLAN)])
    })
    .await
}

/// The video behind each URL.
///
/// A URL that does not point at a video is skipped like any other failed
/// lookup.
pub async fn by_url(source: &dyn TikTokSource, urls: &[String]) -> Result<Vec<FlatRecord>> {
    for_each_identifier("url", urls, |url| async move {
        if let Err(e) = parse_video_url(&url) {
            tracing::debug!("Not a video URL '{}': {}", url, e);
            return Err(Error::lookup_failed("url", &url, None));
        }

        let envelope = source.fetch_by_url(&url).await?;
        if !is_success(&envelope) {
            return Err(Error::lookup_failed("url", &url, status_code(&envelope)));
        }

        let item = envelope
            .pointer("/itemInfo/itemStruct")
            .ok_or_else(|| Error::MalformedResponse(format!("no item in response for {}", url)))?;
        Ok(vec![project(item, VIDEO_PLAN)])
    })
    .await
}
