//! Post-collection processing: URL deduplication, filtering, sorting, and
//! visited marking over an opportunity set.

use std::collections::HashSet;
use std::str::FromStr;

use kef_core::{Client, Opportunity, Platform};

use crate::error::DiscoveryError;

/// Drop every opportunity whose URL was already seen earlier in the list.
///
/// First-seen order decides which record survives, so collection order is an
/// observable contract for callers.
#[must_use]
pub fn dedupe_by_url(mut opportunities: Vec<Opportunity>) -> Vec<Opportunity> {
    let mut seen_urls: HashSet<String> = HashSet::new();
    opportunities.retain(|opp| seen_urls.insert(opp.url.clone()));
    opportunities
}

/// Display filter over an opportunity set. Absent fields impose no
/// constraint; present fields combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct OpportunityFilter {
    pub client_id: Option<String>,
    pub platform: Option<Platform>,
    /// Case-insensitive substring match against the opportunity's keyword.
    pub keyword: Option<String>,
    pub visited: Option<bool>,
}

impl OpportunityFilter {
    #[must_use]
    pub fn matches(&self, opp: &Opportunity) -> bool {
        if let Some(client_id) = &self.client_id {
            if &opp.client_id != client_id {
                return false;
            }
        }
        if let Some(platform) = self.platform {
            if opp.platform != platform {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            if !opp
                .keyword
                .to_lowercase()
                .contains(&keyword.to_lowercase())
            {
                return false;
            }
        }
        if let Some(visited) = self.visited {
            if opp.visited != visited {
                return false;
            }
        }
        true
    }
}

#[must_use]
pub fn filter_opportunities(
    opportunities: Vec<Opportunity>,
    filter: &OpportunityFilter,
) -> Vec<Opportunity> {
    opportunities
        .into_iter()
        .filter(|opp| filter.matches(opp))
        .collect()
}

/// Sort key for the opportunity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DiscoveredAt,
    RankingPosition,
    Platform,
    Keyword,
    /// Client display name, resolved through the client list at sort time.
    ClientName,
}

impl FromStr for SortKey {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discoveredAt" => Ok(SortKey::DiscoveredAt),
            "rankingPosition" => Ok(SortKey::RankingPosition),
            "platform" => Ok(SortKey::Platform),
            "keyword" => Ok(SortKey::Keyword),
            "client" => Ok(SortKey::ClientName),
            other => Err(DiscoveryError::Source(format!("unknown sort key: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    /// The dashboard opens on newest-first.
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DiscoveryError::Source(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

/// Stable sort of an opportunity set.
///
/// String keys compare case-insensitively, `discovered_at` compares as an
/// instant, and an opportunity whose client is missing from `clients` sorts
/// with an empty name. Ties keep their relative input order.
#[must_use]
pub fn sort_opportunities(
    mut opportunities: Vec<Opportunity>,
    clients: &[Client],
    key: SortKey,
    direction: SortDirection,
) -> Vec<Opportunity> {
    let client_name = |id: &str| -> String {
        clients
            .iter()
            .find(|client| client.id == id)
            .map(|client| client.name.to_lowercase())
            .unwrap_or_default()
    };

    opportunities.sort_by(|a, b| {
        let ordering = match key {
            SortKey::DiscoveredAt => a.discovered_at.cmp(&b.discovered_at),
            SortKey::RankingPosition => a.ranking_position.cmp(&b.ranking_position),
            SortKey::Platform => a.platform.as_str().cmp(b.platform.as_str()),
            SortKey::Keyword => a.keyword.to_lowercase().cmp(&b.keyword.to_lowercase()),
            SortKey::ClientName => client_name(&a.client_id).cmp(&client_name(&b.client_id)),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    opportunities
}

/// Set `visited = true` on the opportunity with the given id.
///
/// Unknown ids are a silent no-op; the flag is never cleared.
#[must_use]
pub fn mark_visited(mut opportunities: Vec<Opportunity>, id: &str) -> Vec<Opportunity> {
    if let Some(opp) = opportunities.iter_mut().find(|opp| opp.id == id) {
        opp.visited = true;
    }
    opportunities
}
