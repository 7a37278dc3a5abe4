//! Lookup and aggregate functions.
//!
//! Each function calls the platform source for one logical query and folds
//! the raw results through the field projector. Functions that take a list
//! of identifiers skip identifiers whose lookup fails and carry on with the
//! rest; only transport-level failures abort the whole call.

pub mod entities;
pub mod feeds;
pub mod suggested;
pub mod trending;

use std::future::Future;

use crate::error::Result;
use crate::projection::FlatRecord;

pub use entities::{by_url, hashtag_info, resolve_hashtag_id, resolve_user, user_info};
pub use feeds::{by_hashtag, by_username, liked_by_username};
pub use suggested::{suggested_hashtags, suggested_music, suggested_users};
pub use trending::{trending_hashtags, trending_music, trending_videos};

/// Most cards the discovery endpoints return.
pub const DISCOVER_CARD_LIMIT: usize = 10;

/// Most users a suggestion crawl visits.
pub const MAX_CRAWL_VISITS: usize = 50;

/// Run `op` for each identifier and concatenate the results.
///
/// Per-item failures are logged and skipped.
pub(crate) async fn for_each_identifier<F, Fut>(
    kind: &str,
    identifiers: &[String],
    mut op: F,
) -> Result<Vec<FlatRecord>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<FlatRecord>>>,
{
    let mut records = Vec::new();

    for identifier in identifiers {
        match op(identifier.clone()).await {
            Ok(found) => records.extend(found),
            Err(e) if e.is_per_item() => {
                tracing::warn!("Skipping {} '{}': {}", kind, identifier, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}
