//! Shared fixture-source plumbing: keyword matching, id derivation, and
//! candidate-to-opportunity conversion.

use chrono::Utc;
use kef_core::{Intent, Opportunity, Platform};

use crate::classifier::classify_intent;

/// A raw catalog entry before keyword filtering.
///
/// `body` is the post text the filter and classifier run against; `meta` is
/// the engagement suffix (answer counts, likes, author) appended to the
/// display snippet.
pub(super) struct CandidatePost {
    pub source_id: String,
    pub title: String,
    pub url: String,
    pub body: String,
    pub meta: String,
}

/// How a source assigns intent to its results.
pub(super) enum IntentRule {
    Fixed(Intent),
    ClassifyBody,
    Omit,
}

/// Case-insensitive keyword match: the whole keyword, or any
/// whitespace-delimited token of it, contained in title or body.
pub(super) fn matches_keyword(title: &str, body: &str, keyword: &str) -> bool {
    let title = title.to_lowercase();
    let body = body.to_lowercase();
    let keyword = keyword.to_lowercase();

    if title.contains(&keyword) || body.contains(&keyword) {
        return true;
    }
    keyword
        .split_whitespace()
        .any(|token| title.contains(token) || body.contains(token))
}

/// Derive an opportunity id from its provenance plus the current millisecond
/// tick. Same-tick collisions for an identical source record are accepted.
pub(super) fn opportunity_id(
    client_id: &str,
    keyword: &str,
    platform: Platform,
    source_id: &str,
) -> String {
    format!(
        "{client_id}-{keyword}-{}-{source_id}-{}",
        platform.as_str(),
        Utc::now().timestamp_millis()
    )
}

/// Filter a candidate catalog by keyword, truncate to the source's limit,
/// and convert survivors into opportunities with 1-based ranking positions.
pub(super) fn build_opportunities(
    candidates: Vec<CandidatePost>,
    keyword: &str,
    client_id: &str,
    platform: Platform,
    limit: usize,
    intent: &IntentRule,
) -> Vec<Opportunity> {
    candidates
        .into_iter()
        .filter(|candidate| matches_keyword(&candidate.title, &candidate.body, keyword))
        .take(limit)
        .enumerate()
        .map(|(index, candidate)| {
            let snippet = if candidate.meta.is_empty() {
                candidate.body.clone()
            } else {
                format!("{} • {}", candidate.body, candidate.meta)
            };
            let intent = match intent {
                IntentRule::Fixed(fixed) => Some(*fixed),
                IntentRule::ClassifyBody => Some(classify_intent(&candidate.body)),
                IntentRule::Omit => None,
            };
            Opportunity {
                id: opportunity_id(client_id, keyword, platform, &candidate.source_id),
                client_id: client_id.to_string(),
                keyword: keyword.to_string(),
                platform,
                url: candidate.url,
                title: candidate.title,
                snippet,
                intent,
                ranking_position: u32::try_from(index + 1).unwrap_or(u32::MAX),
                discovered_at: Utc::now(),
                visited: false,
            }
        })
        .collect()
}
