//! Platform source adapters.
//!
//! One live source (Reddit's public search JSON endpoint) and a fixture
//! catalog per remaining platform. Registration order is part of the
//! collector's output contract.

mod facebook;
mod hackernews;
mod indiehackers;
mod linkedin;
mod matching;
mod producthunt;
mod quora;
mod reddit;
mod stackoverflow;
mod twitter;

use async_trait::async_trait;
use kef_core::{AppConfig, Opportunity, Platform};

use crate::error::DiscoveryError;

pub use reddit::RedditSource;

/// A source-specific search producing candidate opportunities for one
/// keyword. Implementations must not panic; failures are isolated by the
/// collector.
#[async_trait]
pub trait Source: Send + Sync {
    fn platform(&self) -> Platform;

    async fn search(
        &self,
        keyword: &str,
        client_id: &str,
    ) -> Result<Vec<Opportunity>, DiscoveryError>;
}

/// Build the canonical source registry, in registration order.
///
/// # Errors
///
/// Returns [`DiscoveryError::Http`] if the Reddit HTTP client cannot be
/// constructed.
pub(crate) fn default_registry(
    config: &AppConfig,
) -> Result<Vec<Box<dyn Source>>, DiscoveryError> {
    let reddit = RedditSource::new(
        &config.reddit_base_url,
        &config.reddit_user_agent,
        config.search_request_timeout_secs,
    )?;

    Ok(vec![
        Box::new(reddit),
        Box::new(quora::QuoraSource),
        Box::new(facebook::FacebookSource),
        Box::new(linkedin::LinkedinSource),
        Box::new(twitter::TwitterSource),
        Box::new(stackoverflow::StackOverflowSource),
        Box::new(hackernews::HackerNewsSource),
        Box::new(producthunt::ProductHuntSource),
        Box::new(indiehackers::IndieHackersSource),
    ])
}
