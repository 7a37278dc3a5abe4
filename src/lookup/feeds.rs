//! Video feeds of users and hashtags.

use crate::api::TikTokSource;
use crate::error::Result;
use crate::lookup::entities::{resolve_hashtag_id, resolve_user};
use crate::lookup::for_each_identifier;
use crate::projection::{project_all, FlatRecord, VIDEO_PLAN};

/// Up to `n` videos posted by each user.
pub async fn by_username(
    source: &dyn TikTokSource,
    usernames: &[String],
    n: usize,
) -> Result<Vec<FlatRecord>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    for_each_identifier("username", usernames, |username| async move {
        let user = resolve_user(source, &username).await?;
        let raws = source.fetch_by_user(&user, n).await?;
        tracing::debug!("Fetched {} videos posted by {}", raws.len(), username);
        Ok(videos(&raws, n))
    })
    .await
}

/// Up to `n` videos liked by each user.
///
/// A user whose liked list is private yields no records.
pub async fn liked_by_username(
    source: &dyn TikTokSource,
    usernames: &[String],
    n: usize,
) -> Result<Vec<FlatRecord>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    for_each_identifier("username", usernames, |username| async move {
        let user = resolve_user(source, &username).await?;
        let raws = source.fetch_liked(&user, n).await?;
        tracing::debug!("Fetched {} videos liked by {}", raws.len(), username);
        Ok(videos(&raws, n))
    })
    .await
}

/// Up to `n` videos under each hashtag.
pub async fn by_hashtag(
    source: &dyn TikTokSource,
    hashtags: &[String],
    n: usize,
) -> Result<Vec<FlatRecord>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    for_each_identifier("hashtag", hashtags, |name| async move {
        let hashtag_id = resolve_hashtag_id(source, &name).await?;
        let raws = source.fetch_by_hashtag(&hashtag_id, n).await?;
        tracing::debug!("Fetched {} videos tagged #{}", raws.len(), name);
        Ok(videos(&raws, n))
    })
    .await
}

fn videos(raws: &[serde_json::Value], n: usize) -> Vec<FlatRecord> {
    let mut records = project_all(raws, VIDEO_PLAN);
    records.truncate(n);
    records
}
