//! LinkedIn post catalog, templated on the search keyword.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 6;

pub(super) struct LinkedinSource;

#[async_trait]
impl Source for LinkedinSource {
    fn platform(&self) -> Platform {
        Platform::Linkedin
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
            Platform::Linkedin,
            MAX_RESULTS,
            &IntentRule::ClassifyBody,
        ))
    }
}

fn catalog(keyword: &str) -> Vec<CandidatePost> {
    vec![
        CandidatePost {
            source_id: "b2b-marketing-discussion".to_string(),
            title: format!("Seeking recommendations for {keyword} in B2B space"),
            url: "https://www.linkedin.com/posts/activity-123456789".to_string(),
            body: format!(
                "Looking for insights on {keyword} specifically for B2B companies. What approaches have worked well for your organisation? Would appreciate any recommendations or case studies you can share."
            ),
            meta: "67 likes • 23 comments • Marketing Director at TechCorp".to_string(),
        },
        CandidatePost {
            source_id: "startup-founder-question".to_string(),
            title: format!("How do you approach {keyword} as a startup founder?"),
            url: "https://www.linkedin.com/posts/activity-987654321".to_string(),
            body: format!(
                "As a first-time founder, I'm trying to navigate {keyword} for our growing startup. What resources or strategies would you recommend? Looking for practical advice from experienced entrepreneurs."
            ),
            meta: "89 likes • 34 comments • Founder & CEO at InnovateCo".to_string(),
        },
        CandidatePost {
            source_id: "industry-professional-insight".to_string(),
            title: format!("{keyword} best practices - what's working in 2024?"),
            url: "https://www.linkedin.com/posts/activity-456789123".to_string(),
            body: format!(
                "Interested in hearing from fellow professionals about current {keyword} best practices. What strategies are delivering the best results for your teams this year?"
            ),
            meta: "45 likes • 19 comments • Senior Marketing Manager".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ranking_positions_follow_catalog_order() {
        let results = LinkedinSource
            .search("brand awareness", "client-1")
            .await
            .expect("fixture source cannot fail");
        assert_eq!(results.len(), 3);
        let positions: Vec<u32> = results.iter().map(|o| o.ranking_position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
