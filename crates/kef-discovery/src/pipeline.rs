//! Collection pipeline orchestration.

use kef_core::{AppConfig, Client, Opportunity};

use crate::error::DiscoveryError;
use crate::processor::dedupe_by_url;
use crate::sources::{default_registry, Source};

/// Fans client keywords out across the registered platform sources.
///
/// Sources run sequentially per keyword; the output is grouped by client
/// (input order), then keyword (list order), then source registration order,
/// then each source's internal result order. That ordering feeds the
/// first-seen-wins deduplication and the default display order, so it is a
/// contract, not an accident.
pub struct Collector {
    sources: Vec<Box<dyn Source>>,
}

impl Collector {
    /// Build a collector over the canonical source registry.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Http`] if the live source's HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, DiscoveryError> {
        Ok(Self {
            sources: default_registry(config)?,
        })
    }

    /// Build a collector over an explicit source list, in the given order.
    #[must_use]
    pub fn with_sources(sources: Vec<Box<dyn Source>>) -> Self {
        Self { sources }
    }

    /// Collect opportunities for every `(client, keyword)` pair, then
    /// deduplicate by URL.
    ///
    /// Source failures are isolated per call: logged and treated as an empty
    /// result, never propagated. Empty client lists and clients without
    /// keywords contribute nothing.
    pub async fn collect(&self, clients: &[Client]) -> Vec<Opportunity> {
        let mut collected = Vec::new();

        for client in clients {
            for keyword in &client.keywords {
                tracing::info!(client = %client.name, keyword, "searching keyword");

                for source in &self.sources {
                    match source.search(keyword, &client.id).await {
                        Ok(found) => {
                            tracing::debug!(
                                platform = %source.platform(),
                                keyword,
                                count = found.len(),
                                "collected opportunities"
                            );
                            collected.extend(found);
                        }
                        Err(e) => {
                            tracing::warn!(
                                platform = %source.platform(),
                                keyword,
                                error = %e,
                                "source search failed"
                            );
                        }
                    }
                }
            }
        }

        dedupe_by_url(collected)
    }
}
