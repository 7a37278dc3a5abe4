//! Extraction plans: one table per entity kind.
//!
//! A plan lists the output keys of a flat record and, for each key, the JSON
//! pointers to try in the raw record. The first pointer that resolves to a
//! non-null value wins. Several pointers exist where the platform serves the
//! same field under two layouts (for example `video.playAddr` on current
//! item lists and `itemInfos.video.urls[0]` on older hashtag feeds).

/// How a raw value is normalized into the flat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String; numbers are stringified.
    Text,
    /// Unsigned integer; numeric strings are parsed.
    Count,
    /// Boolean.
    Flag,
    /// Epoch seconds rendered as an RFC 3339 UTC string.
    Timestamp,
}

/// One output field of a plan.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub paths: &'static [&'static str],
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, paths: &'static [&'static str], kind: FieldKind) -> Self {
        Self { key, paths, kind }
    }
}

pub type ExtractionPlan = &'static [FieldSpec];

use FieldKind::{Count, Flag, Text, Timestamp};

/// Video item (trending, user feed, liked list, hashtag feed, detail).
pub const VIDEO_PLAN: ExtractionPlan = &[
    FieldSpec::new("id", &["/id", "/itemInfos/id"], Text),
    FieldSpec::new("desc", &["/desc", "/itemInfos/text"], Text),
    FieldSpec::new("createTime", &["/createTime", "/itemInfos/createTime"], Timestamp),
    FieldSpec::new("playAddr", &["/video/playAddr", "/itemInfos/video/urls/0"], Text),
    FieldSpec::new("username", &["/author/uniqueId", "/authorInfos/uniqueId"], Text),
    FieldSpec::new("diggCount", &["/stats/diggCount", "/itemInfos/diggCount"], Count),
    FieldSpec::new("shareCount", &["/stats/shareCount", "/itemInfos/shareCount"], Count),
    FieldSpec::new("commentCount", &["/stats/commentCount", "/itemInfos/commentCount"], Count),
    FieldSpec::new("playCount", &["/stats/playCount", "/itemInfos/playCount"], Count),
];

/// Music discovery card.
pub const MUSIC_PLAN: ExtractionPlan = &[
    FieldSpec::new("id", &["/id"], Text),
    FieldSpec::new("title", &["/title"], Text),
    FieldSpec::new("desc", &["/description"], Text),
    FieldSpec::new("playUrl", &["/extraInfo/playUrl/0", "/extraInfo/playUrl"], Text),
    FieldSpec::new("videoCount", &["/extraInfo/posts"], Count),
];

/// Hashtag discovery card from the trending page.
pub const TRENDING_HASHTAG_PLAN: ExtractionPlan = &[
    FieldSpec::new("id", &["/id"], Text),
    FieldSpec::new("title", &["/title"], Text),
    FieldSpec::new("desc", &["/description"], Text),
    FieldSpec::new("views", &["/extraInfo/views"], Count),
];

/// Challenge detail envelope.
pub const HASHTAG_INFO_PLAN: ExtractionPlan = &[
    FieldSpec::new("id", &["/challengeInfo/challenge/id"], Text),
    FieldSpec::new("title", &["/challengeInfo/challenge/title"], Text),
    FieldSpec::new(
        "desc",
        &["/challengeInfo/challenge/desc", "/challengeInfo/shareMeta/desc"],
        Text,
    ),
    FieldSpec::new("videoCount", &["/challengeInfo/stats/videoCount"], Count),
    FieldSpec::new("viewCount", &["/challengeInfo/stats/viewCount"], Count),
];

/// User detail envelope.
pub const USER_PLAN: ExtractionPlan = &[
    FieldSpec::new("id", &["/userInfo/user/id"], Text),
    FieldSpec::new("username", &["/userInfo/user/uniqueId"], Text),
    FieldSpec::new("verified", &["/userInfo/user/verified"], Flag),
    FieldSpec::new("followingCount", &["/userInfo/stats/followingCount"], Count),
    FieldSpec::new("followerCount", &["/userInfo/stats/followerCount"], Count),
    FieldSpec::new("heartCount", &["/userInfo/stats/heartCount"], Count),
    FieldSpec::new("videoCount", &["/userInfo/stats/videoCount"], Count),
    FieldSpec::new("diggCount", &["/userInfo/stats/diggCount"], Count),
];
