//! In-memory `TikTokSource` for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::source::TikTokSource;
use crate::api::types::{SuggestionKind, TrendingFeed, UserHandle};
use crate::error::{Error, Result};

/// Status the platform returns for an unknown user.
pub const USER_NOT_FOUND: i64 = 10202;

/// Status the platform returns for an unknown hashtag.
pub const HASHTAG_NOT_FOUND: i64 = 10205;

/// Canned responses keyed by request, plus a log of every call made.
#[derive(Default)]
pub struct MockSource {
    pub trending: HashMap<TrendingFeed, Vec<Value>>,
    pub users: HashMap<String, Value>,
    pub hashtags: HashMap<String, Value>,
    pub user_videos: HashMap<String, Vec<Value>>,
    pub liked_videos: HashMap<String, Vec<Value>>,
    pub hashtag_videos: HashMap<String, Vec<Value>>,
    pub videos_by_url: HashMap<String, Value>,
    pub suggestions: HashMap<(SuggestionKind, String), Vec<Value>>,
    pub fail_transport: bool,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with a detail envelope built from the given stats.
    pub fn with_user(mut self, username: &str, id: &str) -> Self {
        self.users.insert(username.to_string(), user_envelope(username, id));
        self
    }

    /// Register a hashtag with a detail envelope.
    pub fn with_hashtag(mut self, name: &str, id: &str) -> Self {
        self.hashtags.insert(
            name.to_string(),
            json!({
                "statusCode": 0,
                "challengeInfo": {
                    "challenge": { "id": id, "title": name, "desc": format!("#{} videos", name) },
                    "stats": { "videoCount": 100, "viewCount": 10000 }
                }
            }),
        );
        self
    }

    pub fn with_suggestions(mut self, kind: SuggestionKind, user_id: &str, cards: Vec<Value>) -> Self {
        self.suggestions.insert((kind, user_id.to_string()), cards);
        self
    }

    /// Every call made so far, as `method:args` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_transport {
            return Err(Error::Api("GET /mock returned HTTP 500".to_string()));
        }
        Ok(())
    }
}

/// A user detail envelope the way the platform shapes it.
pub fn user_envelope(username: &str, id: &str) -> Value {
    json!({
        "statusCode": 0,
        "userInfo": {
            "user": { "id": id, "secUid": format!("sec-{}", id), "uniqueId": username, "verified": false },
            "stats": {
                "followingCount": 1,
                "followerCount": 2,
                "heartCount": 3,
                "videoCount": 4,
                "diggCount": 5
            }
        }
    })
}

/// A video item with a play address.
pub fn video(id: &str, play_addr: Option<&str>) -> Value {
    json!({
        "id": id,
        "desc": format!("video {}", id),
        "createTime": 1600000000,
        "video": { "playAddr": play_addr },
        "author": { "uniqueId": "creator" },
        "stats": { "diggCount": 1, "shareCount": 2, "commentCount": 3, "playCount": 4 }
    })
}

/// A discovery card.
pub fn card(id: &str, title: &str, sub_title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "subTitle": sub_title,
        "description": format!("{} description", title),
        "extraInfo": { "views": 1000, "posts": 10, "playUrl": [format!("https://sf16.tiktok.com/{}.mp3", id)] }
    })
}

fn take(list: Option<&Vec<Value>>, count: usize) -> Vec<Value> {
    list.map(|l| l.iter().take(count).cloned().collect())
        .unwrap_or_default()
}

#[async_trait]
impl TikTokSource for MockSource {
    async fn fetch_trending(&self, feed: TrendingFeed, count: usize) -> Result<Vec<Value>> {
        self.record(format!("fetch_trending:{}:{}", feed, count))?;
        Ok(take(self.trending.get(&feed), count))
    }

    async fn fetch_by_user(&self, user: &UserHandle, count: usize) -> Result<Vec<Value>> {
        self.record(format!("fetch_by_user:{}:{}", user.id, count))?;
        Ok(take(self.user_videos.get(&user.id), count))
    }

    async fn fetch_liked(&self, user: &UserHandle, count: usize) -> Result<Vec<Value>> {
        self.record(format!("fetch_liked:{}:{}", user.id, count))?;
        Ok(take(self.liked_videos.get(&user.id), count))
    }

    async fn fetch_by_hashtag(&self, hashtag_id: &str, count: usize) -> Result<Vec<Value>> {
        self.record(format!("fetch_by_hashtag:{}:{}", hashtag_id, count))?;
        Ok(take(self.hashtag_videos.get(hashtag_id), count))
    }

    async fn fetch_by_url(&self, url: &str) -> Result<Value> {
        self.record(format!("fetch_by_url:{}", url))?;
        Ok(self
            .videos_by_url
            .get(url)
            .cloned()
            .unwrap_or_else(|| json!({ "statusCode": 10204 })))
    }

    async fn lookup_user(&self, username: &str) -> Result<Value> {
        self.record(format!("lookup_user:{}", username))?;
        Ok(self
            .users
            .get(username)
            .cloned()
            .unwrap_or_else(|| json!({ "statusCode": USER_NOT_FOUND, "userInfo": {} })))
    }

    async fn lookup_hashtag(&self, name: &str) -> Result<Value> {
        self.record(format!("lookup_hashtag:{}", name))?;
        Ok(self
            .hashtags
            .get(name)
            .cloned()
            .unwrap_or_else(|| json!({ "statusCode": HASHTAG_NOT_FOUND })))
    }

    async fn fetch_suggestions(
        &self,
        kind: SuggestionKind,
        user_id: &str,
        count: usize,
    ) -> Result<Vec<Value>> {
        self.record(format!("fetch_suggestions:{}:{}:{}", kind, user_id, count))?;
        Ok(take(self.suggestions.get(&(kind, user_id.to_string())), count))
    }
}
