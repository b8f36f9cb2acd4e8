//! Quora question catalog.
//!
//! Quora exposes no public search API, so this source serves a curated set
//! of evergreen marketing questions. All entries are questions by nature.

use async_trait::async_trait;
use kef_core::{Intent, Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 5;

pub(super) struct QuoraSource;

#[async_trait]
impl Source for QuoraSource {
    fn platform(&self) -> Platform {
        Platform::Quora
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
            Platform::Quora,
            MAX_RESULTS,
            &IntentRule::Fixed(Intent::Question),
        ))
    }
}

fn entry(id: &str, title: &str, url: &str, body: &str, answers: u32, followers: u32) -> CandidatePost {
    CandidatePost {
        source_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        body: body.to_string(),
        meta: format!("{answers} answers • {followers} followers"),
    }
}

fn catalog() -> Vec<CandidatePost> {
    vec![
        entry(
            "what-is-best-seo-strategy",
            "What is the best SEO strategy for small businesses in 2024?",
            "https://www.quora.com/What-is-the-best-SEO-strategy-for-small-businesses-in-2024",
            "I run a small local business and want to improve my online visibility. What SEO strategies actually work for small businesses with limited budgets? Looking for practical advice that I can implement myself.",
            23,
            156,
        ),
        entry(
            "digital-marketing-tools",
            "What are the most effective digital marketing tools for startups?",
            "https://www.quora.com/What-are-the-most-effective-digital-marketing-tools-for-startups",
            "Starting a new business and need to establish an online presence. What digital marketing tools would you recommend for someone just getting started? Budget is tight so looking for cost-effective solutions.",
            34,
            289,
        ),
        entry(
            "web-design-trends",
            "What web design trends should I follow in 2024?",
            "https://www.quora.com/What-web-design-trends-should-I-follow-in-2024",
            "Redesigning my company website and want to make sure it looks modern and professional. What design trends are worth following this year? What should I avoid?",
            18,
            203,
        ),
        entry(
            "content-marketing-strategy",
            "How do I create a content marketing strategy that actually works?",
            "https://www.quora.com/How-do-I-create-a-content-marketing-strategy-that-actually-works",
            "Been creating content for months but not seeing much engagement or leads. What am I missing? How do successful companies approach content marketing?",
            27,
            178,
        ),
        entry(
            "social-media-marketing",
            "Which social media platforms should I focus on for B2B marketing?",
            "https://www.quora.com/Which-social-media-platforms-should-I-focus-on-for-B2B-marketing",
            "Running a B2B company and trying to figure out where to spend my social media efforts. LinkedIn seems obvious, but what about other platforms? Where do you see the best ROI?",
            19,
            145,
        ),
        entry(
            "email-marketing-tips",
            "What are the best email marketing practices for small businesses?",
            "https://www.quora.com/What-are-the-best-email-marketing-practices-for-small-businesses",
            "Want to start email marketing but not sure where to begin. What platforms work best? How often should I send emails? What content gets the best response rates?",
            31,
            267,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seo_keyword_finds_the_seo_question_first() {
        let results = QuoraSource
            .search("seo", "client-1")
            .await
            .expect("fixture source cannot fail");
        assert!(!results.is_empty());
        assert_eq!(results[0].ranking_position, 1);
        assert!(results[0].title.contains("SEO"));
        assert_eq!(results[0].intent, Some(Intent::Question));
    }

    #[tokio::test]
    async fn unrelated_keyword_yields_nothing() {
        let results = QuoraSource
            .search("quantum chromodynamics", "client-1")
            .await
            .expect("fixture source cannot fail");
        assert!(results.is_empty());
    }
}
