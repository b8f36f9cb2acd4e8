//! Hacker News story catalog. Intent is not classified here.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 1;

pub(super) struct HackerNewsSource;

#[async_trait]
impl Source for HackerNewsSource {
    fn platform(&self) -> Platform {
        Platform::Hackernews
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
            Platform::Hackernews,
            MAX_RESULTS,
            &IntentRule::Omit,
        ))
    }
}

fn entry(id: &str, title: &str, url: &str, body: &str, points: u32, comments: u32) -> CandidatePost {
    CandidatePost {
        source_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        body: body.to_string(),
        meta: format!("{points} points • {comments} comments"),
    }
}

fn catalog() -> Vec<CandidatePost> {
    vec![
        entry(
            "startup-marketing-strategies",
            "Ask HN: What marketing strategies worked for your startup?",
            "https://news.ycombinator.com/item?id=startup-marketing-strategies",
            "Launching a B2B SaaS product and struggling with customer acquisition. What marketing channels have been most effective for other founders here?",
            234,
            89,
        ),
        entry(
            "web-development-tools",
            "Show HN: New web development tool for faster prototyping",
            "https://news.ycombinator.com/item?id=web-development-tools",
            "Built a tool to help developers create prototypes faster. Would love feedback from the community on features and usability.",
            156,
            45,
        ),
        entry(
            "seo-algorithm-changes",
            "Google algorithm update affecting small business websites",
            "https://news.ycombinator.com/item?id=seo-algorithm-changes",
            "Recent Google updates seem to be hurting small business visibility. Has anyone else noticed changes in their search rankings?",
            178,
            67,
        ),
    ]
}
