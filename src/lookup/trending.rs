//! Trending videos, hashtags and music.

use crate::api::{TikTokSource, TrendingFeed};
use crate::error::Result;
use crate::lookup::DISCOVER_CARD_LIMIT;
use crate::projection::{project_all, FlatRecord, MUSIC_PLAN, TRENDING_HASHTAG_PLAN, VIDEO_PLAN};

/// Up to `n` trending videos.
pub async fn trending_videos(source: &dyn TikTokSource, n: usize) -> Result<Vec<FlatRecord>> {
    fetch(source, TrendingFeed::Videos, n).await
}

/// Up to `n` trending hashtags, never more than ten.
pub async fn trending_hashtags(source: &dyn TikTokSource, n: usize) -> Result<Vec<FlatRecord>> {
    fetch(source, TrendingFeed::Hashtags, n.min(DISCOVER_CARD_LIMIT)).await
}

/// Up to `n` trending sounds, never more than ten.
pub async fn trending_music(source: &dyn TikTokSource, n: usize) -> Result<Vec<FlatRecord>> {
    fetch(source, TrendingFeed::Music, n.min(DISCOVER_CARD_LIMIT)).await
}

async fn fetch(source: &dyn TikTokSource, feed: TrendingFeed, n: usize) -> Result<Vec<FlatRecord>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let raws = source.fetch_trending(feed, n).await?;
    tracing::debug!("Fetched {} trending {}", raws.len(), feed);

    let plan = match feed {
        TrendingFeed::Videos => VIDEO_PLAN,
        TrendingFeed::Hashtags => TRENDING_HASHTAG_PLAN,
        TrendingFeed::Music => MUSIC_PLAN,
    };

    let mut records = project_all(&raws, plan);
    records.truncate(n);
    Ok(records)
}
