//! TikTok web API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;

use crate::api::source::TikTokSource;
use crate::api::types::*;
use crate::config::{parse_video_url, ClientConfig};
use crate::error::{Error, Result};

/// Referer sent by the platform's web client. Media hosts refuse requests
/// without it.
pub const REFERER: &str = "https://www.tiktok.com/";

/// Maximum items the item list endpoints return per request.
pub const PAGE_SIZE: usize = 30;

/// Web app ID sent with every request.
const APP_ID: &str = "1988";

/// Number of discovery cards asked for on the trending page.
const DISCOVER_USER_COUNT: usize = 30;

/// TikTok web API client.
///
/// Plain unsigned GETs against the public web JSON endpoints. No retry, no
/// caching.
pub struct TikTokApi {
    client: Client,
    base_url: String,
    language: String,
    region: String,
}

impl TikTokApi {
    /// Create a new API client.
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
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            region: config.region.clone(),
        })
    }

    /// Make a GET request and parse the body as JSON.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("aid", APP_ID),
                ("language", self.language.as_str()),
                ("region", self.region.as_str()),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Api(format!("GET {} returned HTTP {}", path, status)));
        }

        let text = response.text().await?;
        tracing::debug!("Response length: {} bytes", text.len());

        serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(200).collect();
            Error::MalformedResponse(format!("{}: {} - Response: {}", path, e, preview))
        })
    }

    /// Fetch an item list, following the cursor until `count` items arrive
    /// or the platform reports no more.
    async fn get_item_list(
        &self,
        path: &str,
        params: &[(&str, String)],
        count: usize,
    ) -> Result<Vec<Value>> {
        let mut items: Vec<Value> = Vec::new();
        let mut cursor = "0".to_string();

        while items.len() < count {
            let mut query = params.to_vec();
            query.push(("count", (count - items.len()).min(PAGE_SIZE).to_string()));
            query.push(("cursor", cursor.clone()));

            let body = self.get_json(path, &query).await?;
            if let Some(status) = status_code(&body).filter(|s| *s != 0) {
                return Err(Error::lookup_failed("item list", path, Some(status)));
            }

            let page = body
                .get("itemList")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            if page.is_empty() {
                break;
            }
            items.extend(page);

            let has_more = body.get("hasMore").and_then(Value::as_bool).unwrap_or(false);
            match body.get("cursor").and_then(cursor_text) {
                Some(next) if has_more && next != cursor => cursor = next,
                _ => break,
            }
        }

        items.truncate(count);
        Ok(items)
    }

    /// Fetch one section of the discover page.
    async fn get_discover(
        &self,
        section: usize,
        query: &[(&str, String)],
        count: usize,
    ) -> Result<Vec<Value>> {
        let body = self.get_json("/node/share/discover", query).await?;
        let mut cards = discover_cards(&body, section);
        cards.truncate(count);
        Ok(cards)
    }
}

fn cursor_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl TikTokSource for TikTokApi {
    async fn fetch_trending(&self, feed: TrendingFeed, count: usize) -> Result<Vec<Value>> {
        match feed {
            TrendingFeed::Videos => {
                let params = [("id", "1".to_string()), ("sourceType", "12".to_string())];
                self.get_item_list("/api/recommend/item_list/", &params, count)
                    .await
            }
            TrendingFeed::Hashtags | TrendingFeed::Music => {
                let section = if feed == TrendingFeed::Hashtags {
                    SuggestionKind::Hashtags.discover_section()
                } else {
                    SuggestionKind::Music.discover_section()
                };
                let query = [
                    ("noUser", "1".to_string()),
                    ("userCount", DISCOVER_USER_COUNT.to_string()),
                    ("scene", "0".to_string()),
                ];
                self.get_discover(section, &query, count).await
            }
        }
    }

    async fn fetch_by_user(&self, user: &UserHandle, count: usize) -> Result<Vec<Value>> {
        let params = [
            ("id", user.id.clone()),
            ("secUid", user.sec_uid.clone()),
            ("sourceType", "8".to_string()),
        ];
        self.get_item_list("/api/post/item_list/", &params, count)
            .await
    }

    async fn fetch_liked(&self, user: &UserHandle, count: usize) -> Result<Vec<Value>> {
        let params = [
            ("id", user.id.clone()),
            ("secUid", user.sec_uid.clone()),
            ("sourceType", "9".to_string()),
        ];
        self.get_item_list("/api/favorite/item_list/", &params, count)
            .await
    }

    async fn fetch_by_hashtag(&self, hashtag_id: &str, count: usize) -> Result<Vec<Value>> {
        let params = [("challengeID", hashtag_id.to_string())];
        self.get_item_list("/api/challenge/item_list/", &params, count)
            .await
    }

    async fn fetch_by_url(&self, url: &str) -> Result<Value> {
        let video_id = parse_video_url(url)?;
        self.get_json("/api/item/detail/", &[("itemId", video_id)])
            .await
    }

    async fn lookup_user(&self, username: &str) -> Result<Value> {
        self.get_json("/api/user/detail/", &[("uniqueId", username.to_string())])
            .await
    }

    async fn lookup_hashtag(&self, name: &str) -> Result<Value> {
        self.get_json(
            "/api/challenge/detail/",
            &[("challengeName", name.to_string())],
        )
        .await
    }

    async fn fetch_suggestions(
        &self,
        kind: SuggestionKind,
        user_id: &str,
        count: usize,
    ) -> Result<Vec<Value>> {
        let query = [
            ("noUser", "0".to_string()),
            ("userId", user_id.to_string()),
            ("userCount", count.to_string()),
            ("scene", "15".to_string()),
        ];
        self.get_discover(kind.discover_section(), &query, count)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header as header_eq, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> TikTokApi {
        let config = ClientConfig {
            base_url: server.uri(),
            ..Default::default()
        };
        TikTokApi::new(&config, Some(Duration::from_secs(5))).unwrap()
    }

    fn items(prefix: &str, n: usize) -> Vec<Value> {
        (0..n)
            .map(|i| json!({ "id": format!("{}{}", prefix, i) }))
            .collect()
    }

    #[tokio::test]
    async fn test_lookup_user_sends_referer_and_locale() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/detail/"))
            .and(query_param("uniqueId", "newt"))
            .and(query_param("language", "en"))
            .and(query_param("region", "US"))
            .and(header_eq("referer", REFERER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 0,
                "userInfo": { "user": { "id": "1", "uniqueId": "newt" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let envelope = api_for(&server).lookup_user("newt").await.unwrap();
        assert!(is_success(&envelope));
        assert_eq!(envelope["userInfo"]["user"]["uniqueId"], "newt");
    }

    #[tokio::test]
    async fn test_http_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/challenge/detail/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = api_for(&server).lookup_hashtag("fyp").await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert!(!err.is_per_item());
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/detail/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>verify</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).lookup_user("newt").await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_item_list_follows_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/post/item_list/"))
            .and(query_param("cursor", "0"))
            .and(query_param("count", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 0,
                "itemList": items("a", 30),
                "hasMore": true,
                "cursor": "1600000000000"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/post/item_list/"))
            .and(query_param("cursor", "1600000000000"))
            .and(query_param("count", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 0,
                "itemList": items("b", 15),
                "hasMore": true,
                "cursor": "1500000000000"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let handle = UserHandle {
            id: "1".into(),
            sec_uid: "MS4".into(),
            username: "newt".into(),
        };
        let videos = api_for(&server).fetch_by_user(&handle, 40).await.unwrap();
        assert_eq!(videos.len(), 40);
        assert_eq!(videos[0]["id"], "a0");
        assert_eq!(videos[39]["id"], "b9");
    }

    #[tokio::test]
    async fn test_item_list_stops_without_more() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/challenge/item_list/"))
            .and(query_param("challengeID", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 0,
                "itemList": items("c", 4),
                "hasMore": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let videos = api_for(&server).fetch_by_hashtag("42", 10).await.unwrap();
        assert_eq!(videos.len(), 4);
    }

    #[tokio::test]
    async fn test_item_list_status_is_lookup_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/favorite/item_list/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 10222 })),
            )
            .mount(&server)
            .await;

        let handle = UserHandle {
            id: "1".into(),
            sec_uid: "MS4".into(),
            username: "private".into(),
        };
        let err = api_for(&server).fetch_liked(&handle, 5).await.unwrap_err();
        assert!(err.is_per_item());
    }

    #[tokio::test]
    async fn test_trending_music_reads_discover_section() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/node/share/discover"))
            .and(query_param("noUser", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "body": [
                    { "exploreList": [] },
                    { "exploreList": [ { "cardItem": { "id": "h1" } } ] },
                    { "exploreList": [
                        { "cardItem": { "id": "m1" } },
                        { "cardItem": { "id": "m2" } },
                        { "cardItem": { "id": "m3" } }
                    ] }
                ]
            })))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let music = api.fetch_trending(TrendingFeed::Music, 2).await.unwrap();
        assert_eq!(music.len(), 2);
        assert_eq!(music[0]["id"], "m1");

        let hashtags = api.fetch_trending(TrendingFeed::Hashtags, 10).await.unwrap();
        assert_eq!(hashtags.len(), 1);
        assert_eq!(hashtags[0]["id"], "h1");
    }

    #[tokio::test]
    async fn test_suggestions_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/node/share/discover"))
            .and(query_param("noUser", "0"))
            .and(query_param("userId", "6745191554350760966"))
            .and(query_param("userCount", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "body": [ { "exploreList": [
                    { "cardItem": { "id": "u1", "subTitle": "@one" } },
                    { "cardItem": { "id": "u2", "subTitle": "@two" } }
                ] } ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cards = api_for(&server)
            .fetch_suggestions(SuggestionKind::Users, "6745191554350760966", 3)
            .await
            .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1]["subTitle"], "@two");
    }

    #[tokio::test]
    async fn test_fetch_by_url_extracts_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/item/detail/"))
            .and(query_param("itemId", "6718335390845095173"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 0,
                "itemInfo": { "itemStruct": { "id": "6718335390845095173" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let envelope = api
            .fetch_by_url("https://www.tiktok.com/@scout2015/video/6718335390845095173")
            .await
            .unwrap();
        assert_eq!(envelope["itemInfo"]["itemStruct"]["id"], "6718335390845095173");

        let err = api.fetch_by_url("https://www.tiktok.com/@scout2015").await;
        assert!(matches!(err, Err(Error::ConfigValidation { .. })));
    }
}
