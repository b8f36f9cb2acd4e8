//! Opportunity discovery pipeline for KEF.
//!
//! Fans each client keyword out across the registered platform sources (one
//! live Reddit JSON search plus per-platform fixture catalogs), deduplicates
//! results by URL, classifies engagement intent, and provides the filter and
//! sort views the dashboard renders from.

pub mod classifier;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod processor;
pub mod sources;

pub use classifier::classify_intent;
pub use error::DiscoveryError;
pub use pipeline::Collector;
pub use processor::{
    dedupe_by_url, filter_opportunities, mark_visited, sort_opportunities, OpportunityFilter,
    SortDirection, SortKey,
};
pub use sources::{RedditSource, Source};
