//! The platform capability set the rest of the crate depends on.

use async_trait::async_trait;
use serde_json::Value;

use crate::api::types::{SuggestionKind, TrendingFeed, UserHandle};
use crate::error::Result;

/// Raw access to the platform.
///
/// Implementations return records exactly as the platform delivers them and
/// never retry. List methods return at most `count` records. Detail methods
/// return the whole envelope including its `statusCode`; interpreting a
/// non-zero status is left to the caller.
#[async_trait]
pub trait TikTokSource: Send + Sync {
    /// Trending videos, or trending hashtag/music discovery cards.
    async fn fetch_trending(&self, feed: TrendingFeed, count: usize) -> Result<Vec<Value>>;

    /// Videos posted by a user.
    async fn fetch_by_user(&self, user: &UserHandle, count: usize) -> Result<Vec<Value>>;

    /// Videos liked by a user. Empty when the list is private.
    async fn fetch_liked(&self, user: &UserHandle, count: usize) -> Result<Vec<Value>>;

    /// Videos under a hashtag, by hashtag ID.
    async fn fetch_by_hashtag(&self, hashtag_id: &str, count: usize) -> Result<Vec<Value>>;

    /// Item detail envelope for a video URL.
    async fn fetch_by_url(&self, url: &str) -> Result<Value>;

    /// User detail envelope.
    async fn lookup_user(&self, username: &str) -> Result<Value>;

    /// Challenge (hashtag) detail envelope.
    async fn lookup_hashtag(&self, name: &str) -> Result<Value>;

    /// Suggestion discovery cards seeded by a user ID.
    async fn fetch_suggestions(
        &self,
        kind: SuggestionKind,
        user_id: &str,
        count: usize,
    ) -> Result<Vec<Value>>;
}
