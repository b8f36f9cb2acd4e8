//! Twitter/X post catalog, templated on the search keyword.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 5;

pub(super) struct TwitterSource;

#[async_trait]
impl Source for TwitterSource {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    async fn search(
        &self,
        keyword: &str,
        client_id: &str,
    ) -> Result<Vec<Opportunity>, DiscoveryError> {
        Ok(build_opportunities(
            catalog(keyword),
            keyword,
            client_id,
            Platform::Twitter,
            MAX_RESULTS,
            &IntentRule::ClassifyBody,
        ))
    }
}

fn catalog(keyword: &str) -> Vec<CandidatePost> {
    vec![
        CandidatePost {
            source_id: "startup-founder-tweet".to_string(),
            title: format!("Anyone have experience with {keyword}? Looking for advice 🧵"),
            url: "https://twitter.com/startupfounder/status/123456789".to_string(),
            body: format!(
                "Building our startup and need help with {keyword}. What tools or strategies have worked for other founders? Thread with your recommendations below! #startup #entrepreneur"
            ),
            meta: "23 retweets • 67 likes • 15 replies • @startupfounder".to_string(),
        },
        CandidatePost {
            source_id: "marketing-professional-tweet".to_string(),
            title: format!("What's your go-to {keyword} strategy in 2024?"),
            url: "https://twitter.com/marketingpro/status/987654321".to_string(),
            body: format!(
                "Curious about what {keyword} strategies are working best this year. Drop your top tips below! Always learning from this amazing community. #marketing #business"
            ),
            meta: "34 retweets • 89 likes • 28 replies • @marketingpro".to_string(),
        },
        CandidatePost {
            source_id: "small-business-owner-tweet".to_string(),
            title: format!("Small business owners: how do you handle {keyword}?"),
            url: "https://twitter.com/smallbizowner/status/456789123".to_string(),
            body: format!(
                "Running a small business and struggling with {keyword}. What solutions have worked for you? Budget-friendly options preferred! #smallbusiness #help"
            ),
            meta: "12 retweets • 45 likes • 23 replies • @smallbizowner".to_string(),
        },
    ]
}
