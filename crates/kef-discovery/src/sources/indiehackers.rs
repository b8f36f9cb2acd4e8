//! Indie Hackers post catalog. Intent is not classified here.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 1;

pub(super) struct IndieHackersSource;

#[async_trait]
impl Source for IndieHackersSource {
    fn platform(&self) -> Platform {
        Platform::Indiehackers
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
            Platform::Indiehackers,
            MAX_RESULTS,
            &IntentRule::Omit,
        ))
    }
}

fn entry(id: &str, title: &str, url: &str, body: &str, likes: u32, comments: u32) -> CandidatePost {
    CandidatePost {
        source_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        body: body.to_string(),
        meta: format!("{likes} likes • {comments} comments"),
    }
}

fn catalog() -> Vec<CandidatePost> {
    vec![
        entry(
            "startup-growth-strategies",
            "What growth strategies worked for your first 1000 users?",
            "https://www.indiehackers.com/post/startup-growth-strategies",
            "Struggling to get traction for my SaaS product. What marketing channels and strategies helped you reach your first milestone?",
            67,
            23,
        ),
        entry(
            "content-marketing-indie",
            "Content marketing for indie makers - what actually works?",
            "https://www.indiehackers.com/post/content-marketing-indie",
            "Been creating content for months but not seeing much traffic or conversions. What content strategies have worked for other indie hackers?",
            89,
            34,
        ),
    ]
}
