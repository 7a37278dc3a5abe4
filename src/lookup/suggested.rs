//! Suggested users, hashtags and music seeded by a user.
//!
//! Without crawling, each seed contributes the platform's own suggestion list
//! for that user. With crawling, the walk also follows suggested users
//! breadth-first and gathers their suggestions until `n` distinct cards are
//! collected for the seed.

use std::collections::{HashSet, VecDeque};

use serde_json::Value;

use crate::api::{SuggestionKind, TikTokSource};
use crate::error::Result;
use crate::lookup::entities::{hashtag_info, resolve_user, user_info};
use crate::lookup::{for_each_identifier, DISCOVER_CARD_LIMIT, MAX_CRAWL_VISITS};
use crate::projection::{project_all, FlatRecord, MUSIC_PLAN};

/// Users suggested to each seed user, with full profile stats.
pub async fn suggested_users(
    source: &dyn TikTokSource,
    usernames: &[String],
    n: usize,
    crawl: bool,
) -> Result<Vec<FlatRecord>> {
    suggested(source, SuggestionKind::Users, usernames, n, crawl).await
}

/// Hashtags suggested to each seed user, with full hashtag stats.
pub async fn suggested_hashtags(
    source: &dyn TikTokSource,
    usernames: &[String],
    n: usize,
    crawl: bool,
) -> Result<Vec<FlatRecord>> {
    suggested(source, SuggestionKind::Hashtags, usernames, n, crawl).await
}

/// Sounds suggested to each seed user.
pub async fn suggested_music(
    source: &dyn TikTokSource,
    usernames: &[String],
    n: usize,
    crawl: bool,
) -> Result<Vec<FlatRecord>> {
    suggested(source, SuggestionKind::Music, usernames, n, crawl).await
}

async fn suggested(
    source: &dyn TikTokSource,
    kind: SuggestionKind,
    usernames: &[String],
    n: usize,
    crawl: bool,
) -> Result<Vec<FlatRecord>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    for_each_identifier("username", usernames, |username| async move {
        let seed = resolve_user(source, &username).await?;

        let cards = if crawl {
            crawl_cards(source, kind, &seed.id, n).await?
        } else {
            let mut cards = source.fetch_suggestions(kind, &seed.id, n).await?;
            cards.truncate(n);
            cards
        };
        tracing::debug!("Collected {} suggested {} for {}", cards.len(), kind, username);

        let mut records = expand_cards(source, kind, &cards).await?;
        records.truncate(n);
        Ok(records)
    })
    .await
}

/// Walk suggested users breadth-first from `seed_id`, collecting up to `n`
/// distinct cards of `kind`.
async fn crawl_cards(
    source: &dyn TikTokSource,
    kind: SuggestionKind,
    seed_id: &str,
    n: usize,
) -> Result<Vec<Value>> {
    let mut cards = Vec::new();
    let mut seen_cards: HashSet<String> = HashSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = VecDeque::from([seed_id.to_string()]);

    if kind == SuggestionKind::Users {
        seen_cards.insert(seed_id.to_string());
    }

    while let Some(user_id) = frontier.pop_front() {
        if cards.len() >= n || visited.len() >= MAX_CRAWL_VISITS {
            break;
        }
        if !visited.insert(user_id.clone()) {
            continue;
        }

        let fanout = if kind == SuggestionKind::Users {
            n
        } else {
            DISCOVER_CARD_LIMIT
        };
        let suggested_users = source
            .fetch_suggestions(SuggestionKind::Users, &user_id, fanout)
            .await?;
        for next in suggested_users.iter().filter_map(card_id) {
            if !visited.contains(&next) {
                frontier.push_back(next);
            }
        }

        let found = if kind == SuggestionKind::Users {
            suggested_users
        } else {
            source.fetch_suggestions(kind, &user_id, n).await?
        };
        for found_card in found {
            let Some(id) = card_id(&found_card) else {
                continue;
            };
            if cards.len() < n && seen_cards.insert(id) {
                cards.push(found_card);
            }
        }
    }

    if visited.len() >= MAX_CRAWL_VISITS && cards.len() < n {
        tracing::warn!(
            "Suggestion crawl stopped after {} users with {} of {} {}",
            visited.len(),
            cards.len(),
            n,
            kind
        );
    }

    Ok(cards)
}

/// Turn suggestion cards into flat records for `kind`.
async fn expand_cards(
    source: &dyn TikTokSource,
    kind: SuggestionKind,
    cards: &[Value],
) -> Result<Vec<FlatRecord>> {
    match kind {
        SuggestionKind::Users => {
            let usernames = card_names(cards, "subTitle", '@');
            user_info(source, &usernames).await
        }
        SuggestionKind::Hashtags => {
            let hashtags = card_names(cards, "title", '#');
            hashtag_info(source, &hashtags).await
        }
        SuggestionKind::Music => Ok(project_all(cards, MUSIC_PLAN)),
    }
}

fn card_names(cards: &[Value], field: &str, sigil: char) -> Vec<String> {
    cards
        .iter()
        .filter_map(|card| card.get(field).and_then(Value::as_str))
        .map(|name| name.trim().trim_start_matches(sigil).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn card_id(card: &Value) -> Option<String> {
    match card.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
