//! Product Hunt launch catalog. Intent is not classified here.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 1;

pub(super) struct ProductHuntSource;

#[async_trait]
impl Source for ProductHuntSource {
    fn platform(&self) -> Platform {
        Platform::Producthunt
    }

    async fn search(
        &self,
        keyword: &str,
        client_id: &str,
    ) -> Result<Vec<Opportunity>, DiscoveryError> {
        Ok(build_opportunities(
            catalog(),
            keyword,
            client_id,
            Platform::Producthunt,
            MAX_RESULTS,
            &IntentRule::Omit,
        ))
    }
}

fn entry(id: &str, title: &str, url: &str, body: &str, upvotes: u32, comments: u32) -> CandidatePost {
    CandidatePost {
        source_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        body: body.to_string(),
        meta: format!("{upvotes} upvotes • {comments} comments"),
    }
}

fn catalog() -> Vec<CandidatePost> {
    vec![
        entry(
            "marketing-automation-tool",
            "Marketing Automation Tool for Small Businesses",
            "https://www.producthunt.com/posts/marketing-automation-tool",
            "Launched our marketing automation platform designed specifically for small businesses. Would love feedback from the community!",
            234,
            23,
        ),
        entry(
            "seo-analytics-dashboard",
            "SEO Analytics Dashboard - Track Your Rankings",
            "https://www.producthunt.com/posts/seo-analytics-dashboard",
            "New SEO tool that provides comprehensive ranking analytics and competitor insights. Free tier available for small businesses.",
            189,
            34,
        ),
    ]
}
