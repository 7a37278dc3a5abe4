//! Mapping CLI functions onto lookup operations.

use std::fmt;

use crate::api::TikTokSource;
use crate::cli::args::{Args, Function};
use crate::config::{normalize_hashtag, normalize_username, parse_video_url, Config};
use crate::error::{Error, Result};
use crate::lookup;
use crate::output::print_warning;
use crate::projection::FlatRecord;

/// Kind of identifier a function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Username,
    Hashtag,
    Url,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Username => write!(f, "username"),
            IdentifierKind::Hashtag => write!(f, "hashtag"),
            IdentifierKind::Url => write!(f, "url"),
        }
    }
}

impl Function {
    /// Command-line name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Function::TrendingTikToks => "getTrendingTikToks",
            Function::TrendingHashtags => "getTrendingHashtags",
            Function::TrendingMusic => "getTrendingMusic",
            Function::HashtagInfo => "getHashtagInfo",
            Function::UserInfo => "getUserInfo",
            Function::UserLikedByUsername => "getUserLikedByUsername",
            Function::SuggestedUsers => "getSuggestedUsers",
            Function::SuggestedHashtags => "getSuggestedHashtags",
            Function::SuggestedMusic => "getSuggestedMusic",
            Function::ByUsername => "byUsername",
            Function::ByHashtag => "byHashtag",
            Function::TikTokByUrl => "getTikTokByUrl",
        }
    }

    /// Identifiers the function requires, if any.
    pub fn identifier_kind(self) -> Option<IdentifierKind> {
        match self {
            Function::TrendingTikToks | Function::TrendingHashtags | Function::TrendingMusic => {
                None
            }
            Function::HashtagInfo | Function::ByHashtag => Some(IdentifierKind::Hashtag),
            Function::UserInfo
            | Function::UserLikedByUsername
            | Function::SuggestedUsers
            | Function::SuggestedHashtags
            | Function::SuggestedMusic
            | Function::ByUsername => Some(IdentifierKind::Username),
            Function::TikTokByUrl => Some(IdentifierKind::Url),
        }
    }

    /// Whether the function's records are videos that can be downloaded.
    pub fn is_video_producing(self) -> bool {
        matches!(
            self,
            Function::TrendingTikToks
                | Function::UserLikedByUsername
                | Function::ByUsername
                | Function::ByHashtag
                | Function::TikTokByUrl
        )
    }

    /// Whether the function accepts `--crawl`.
    pub fn supports_crawl(self) -> bool {
        matches!(
            self,
            Function::SuggestedUsers | Function::SuggestedHashtags | Function::SuggestedMusic
        )
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub function: Function,
    /// Normalized identifiers of the function's identifier kind.
    pub identifiers: Vec<String>,
    pub n: usize,
    pub crawl: bool,
}

impl Invocation {
    /// Validate the arguments for the selected function.
    ///
    /// Identifiers are normalized (`@`/`#` stripped, URLs checked) before any
    /// request is made. Invalid identifiers are reported and dropped; the call
    /// fails only when none are left.
    pub fn from_args(args: &Args, config: &Config) -> Result<Self> {
        let function = args.function;
        let kind = function.identifier_kind();

        for (other, given) in [
            (IdentifierKind::Username, &args.username),
            (IdentifierKind::Hashtag, &args.hashtag),
            (IdentifierKind::Url, &args.url),
        ] {
            if Some(other) != kind && !given.is_empty() {
                print_warning(&format!(
                    "{} does not take a {}; ignoring {}",
                    function,
                    other,
                    given.join(", ")
                ));
            }
        }

        let identifiers = match kind {
            None => Vec::new(),
            Some(kind) => {
                let raw = match kind {
                    IdentifierKind::Username => &args.username,
                    IdentifierKind::Hashtag => &args.hashtag,
                    IdentifierKind::Url => &args.url,
                };
                let valid: Vec<String> = raw
                    .iter()
                    .filter_map(|id| match normalize_identifier(kind, id) {
                        Ok(id) => Some(id),
                        Err(e) => {
                            print_warning(&format!("Skipping {} '{}': {}", kind, id, e));
                            None
                        }
                    })
                    .collect();
                if valid.is_empty() {
                    return Err(Error::MissingArgument(kind.to_string()));
                }
                valid
            }
        };

        if args.crawl && !function.supports_crawl() {
            print_warning("--crawl only applies to suggestion functions; ignoring it");
        }

        Ok(Self {
            function,
            identifiers,
            n: args.count(config),
            crawl: args.crawl && function.supports_crawl(),
        })
    }
}

fn normalize_identifier(kind: IdentifierKind, raw: &str) -> Result<String> {
    match kind {
        IdentifierKind::Username => normalize_username(raw),
        IdentifierKind::Hashtag => normalize_hashtag(raw),
        IdentifierKind::Url => {
            parse_video_url(raw)?;
            Ok(raw.trim().to_string())
        }
    }
}

/// Run the invocation's function against a source.
pub async fn run_function(
    source: &dyn TikTokSource,
    invocation: &Invocation,
) -> Result<Vec<FlatRecord>> {
    let ids = &invocation.identifiers;
    let n = invocation.n;
    let crawl = invocation.crawl;

    tracing::debug!("Running {} with {:?} (n = {})", invocation.function, ids, n);

    match invocation.function {
        Function::TrendingTikToks => lookup::trending_videos(source, n).await,
        Function::TrendingHashtags => lookup::trending_hashtags(source, n).await,
        Function::TrendingMusic => lookup::trending_music(source, n).await,
        Function::HashtagInfo => lookup::hashtag_info(source, ids).await,
        Function::UserInfo => lookup::user_info(source, ids).await,
        Function::UserLikedByUsername => lookup::liked_by_username(source, ids, n).await,
        Function::SuggestedUsers => lookup::suggested_users(source, ids, n, crawl).await,
        Function::SuggestedHashtags => lookup::suggested_hashtags(source, ids, n, crawl).await,
        Function::SuggestedMusic => lookup::suggested_music(source, ids, n, crawl).await,
        Function::ByUsername => lookup::by_username(source, ids, n).await,
        Function::ByHashtag => lookup::by_hashtag(source, ids, n).await,
        Function::TikTokByUrl => lookup::by_url(source, ids).await,
    }
}
