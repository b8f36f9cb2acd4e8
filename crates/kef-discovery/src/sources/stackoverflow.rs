//! Stack Overflow question catalog. Intent is not classified here.

use async_trait::async_trait;
use kef_core::{Opportunity, Platform};

use super::matching::{build_opportunities, CandidatePost, IntentRule};
use super::Source;
use crate::error::DiscoveryError;

const MAX_RESULTS: usize = 1;

pub(super) struct StackOverflowSource;

#[async_trait]
impl Source for StackOverflowSource {
    fn platform(&self) -> Platform {
        Platform::Stackoverflow
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
            Platform::Stackoverflow,
            MAX_RESULTS,
            &IntentRule::Omit,
        ))
    }
}

fn entry(id: &str, title: &str, url: &str, body: &str, votes: u32, answers: u32) -> CandidatePost {
    CandidatePost {
        source_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        body: body.to_string(),
        meta: format!("{votes} votes • {answers} answers"),
    }
}

fn catalog() -> Vec<CandidatePost> {
    vec![
        entry(
            "react-performance-optimization",
            "How to optimize React app performance for large datasets?",
            "https://stackoverflow.com/questions/react-performance-optimization-large-datasets",
            "My React application is becoming slow when handling large amounts of data. What are the best practices for optimization? Looking for practical solutions.",
            45,
            8,
        ),
        entry(
            "javascript-seo-best-practices",
            "SEO best practices for JavaScript-heavy websites",
            "https://stackoverflow.com/questions/seo-best-practices-javascript-websites",
            "Building a SPA and concerned about SEO. What are the current best practices for making JavaScript applications search engine friendly?",
            67,
            12,
        ),
        entry(
            "api-design-patterns",
            "What are the best API design patterns for scalable web applications?",
            "https://stackoverflow.com/questions/api-design-patterns-scalable-web-applications",
            "Designing APIs for a growing application. What patterns and practices should I follow to ensure scalability and maintainability?",
            89,
            15,
        ),
    ]
}
