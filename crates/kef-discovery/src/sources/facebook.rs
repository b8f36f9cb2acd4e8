//! Facebook group-post catalog, templated on the search keyword.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 8;

pub(super) struct FacebookSource;

#[async_trait]
impl Source for FacebookSource {
    fn platform(&self) -> Platform {
        Platform::Facebook
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
            Platform::Facebook,
            MAX_RESULTS,
            &IntentRule::ClassifyBody,
        ))
    }
}

fn catalog(keyword: &str) -> Vec<CandidatePost> {
    vec![
        CandidatePost {
            source_id: "small-business-marketing-group".to_string(),
            title: format!("Looking for advice on {keyword} for my small business"),
            url: "https://www.facebook.com/groups/smallbusinessmarketing/posts/123456789"
                .to_string(),
            body: format!(
                "Hi everyone! I'm struggling with {keyword} for my small business. Has anyone had success with this? Would love to hear your experiences and any recommendations you might have."
            ),
            meta: "23 likes • 15 comments • Small Business Marketing".to_string(),
        },
        CandidatePost {
            source_id: "entrepreneurs-network".to_string(),
            title: format!("Best {keyword} strategies for startups?"),
            url: "https://www.facebook.com/groups/entrepreneursnetwork/posts/987654321".to_string(),
            body: format!(
                "Starting a new venture and need help with {keyword}. What strategies have worked best for other entrepreneurs here? Looking for cost-effective solutions."
            ),
            meta: "34 likes • 28 comments • Entrepreneurs Network".to_string(),
        },
        CandidatePost {
            source_id: "digital-marketing-professionals".to_string(),
            title: format!("{keyword} trends for 2024 - what are your thoughts?"),
            url: "https://www.facebook.com/groups/digitalmarketingpros/posts/456789123".to_string(),
            body: format!(
                "Seeing some interesting developments in {keyword} lately. What trends are you noticing? How are you adapting your strategies?"
            ),
            meta: "45 likes • 32 comments • Digital Marketing Professionals".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use kef_core::Intent;

    use super::*;

    #[tokio::test]
    async fn templated_posts_always_match_their_keyword() {
        let results = FacebookSource
            .search("link building", "client-1")
            .await
            .expect("fixture source cannot fail");
        assert_eq!(results.len(), 3);
        assert!(results[0].title.contains("link building"));
        // The catalog bodies all ask questions, so intent classifies as such.
        assert_eq!(results[0].intent, Some(Intent::Question));
    }
}
