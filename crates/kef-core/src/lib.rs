use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod app_config;
mod config;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

/// A tracked client: a business whose keywords are searched for engagement
/// opportunities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub website_url: String,
    /// Target keywords in priority order. Storage does not enforce
    /// uniqueness; the UI prevents duplicate insertion.
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Discussion platform a post was discovered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Reddit,
    Quora,
    Facebook,
    Linkedin,
    Twitter,
    Stackoverflow,
    Hackernews,
    Producthunt,
    Indiehackers,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Reddit => "reddit",
            Platform::Quora => "quora",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Stackoverflow => "stackoverflow",
            Platform::Hackernews => "hackernews",
            Platform::Producthunt => "producthunt",
            Platform::Indiehackers => "indiehackers",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reddit" => Ok(Platform::Reddit),
            "quora" => Ok(Platform::Quora),
            "facebook" => Ok(Platform::Facebook),
            "linkedin" => Ok(Platform::Linkedin),
            "twitter" => Ok(Platform::Twitter),
            "stackoverflow" => Ok(Platform::Stackoverflow),
            "hackernews" => Ok(Platform::Hackernews),
            "producthunt" => Ok(Platform::Producthunt),
            "indiehackers" => Ok(Platform::Indiehackers),
            other => Err(CoreError::InvalidPlatform(other.to_string())),
        }
    }
}

/// Coarse sentiment/question classification of an opportunity's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Positive,
    Negative,
    Neutral,
    Question,
}

impl Intent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Positive => "positive",
            Intent::Negative => "negative",
            Intent::Neutral => "neutral",
            Intent::Question => "question",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered post or thread matching a client keyword, eligible for
/// outreach engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Derived from `{client_id}-{keyword}-{platform}-{source_record_id}-{ms}`.
    /// Collisions within one millisecond tick for an identical source record
    /// are accepted.
    pub id: String,
    pub client_id: String,
    pub keyword: String,
    pub platform: Platform,
    /// Deduplication key: at most one stored opportunity per distinct URL.
    pub url: String,
    pub title: String,
    pub snippet: String,
    /// Not every source classifies intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// 1-based position within the source's own result list for the keyword,
    /// never a cross-platform rank.
    pub ranking_position: u32,
    pub discovered_at: DateTime<Utc>,
    /// Monotonic: set true by user action, never cleared.
    pub visited: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Authenticated dashboard user. The role only gates client mutation in the
/// UI; the discovery core is role-unaware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid platform: {0}")]
    InvalidPlatform(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_round_trips_through_str() {
        for platform in [
            Platform::Reddit,
            Platform::Quora,
            Platform::Facebook,
            Platform::Linkedin,
            Platform::Twitter,
            Platform::Stackoverflow,
            Platform::Hackernews,
            Platform::Producthunt,
            Platform::Indiehackers,
        ] {
            let parsed: Platform = platform.as_str().parse().expect("should parse");
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn platform_rejects_unknown_name() {
        let result = "myspace".parse::<Platform>();
        assert!(
            matches!(result, Err(CoreError::InvalidPlatform(ref p)) if p == "myspace"),
            "expected InvalidPlatform, got: {result:?}"
        );
    }

    #[test]
    fn opportunity_serializes_with_camel_case_keys() {
        let opp = Opportunity {
            id: "c1-seo-reddit-abc-1".to_string(),
            client_id: "c1".to_string(),
            keyword: "seo".to_string(),
            platform: Platform::Reddit,
            url: "https://www.reddit.com/r/seo/1".to_string(),
            title: "title".to_string(),
            snippet: "snippet".to_string(),
            intent: Some(Intent::Question),
            ranking_position: 1,
            discovered_at: Utc::now(),
            visited: false,
        };
        let json = serde_json::to_value(&opp).expect("should serialize");
        assert_eq!(json["clientId"], "c1");
        assert_eq!(json["rankingPosition"], 1);
        assert_eq!(json["intent"], "question");
        assert!(json.get("client_id").is_none());
    }

    #[test]
    fn absent_intent_is_omitted_from_json() {
        let opp = Opportunity {
            id: "c1-seo-hackernews-abc-1".to_string(),
            client_id: "c1".to_string(),
            keyword: "seo".to_string(),
            platform: Platform::Hackernews,
            url: "https://news.ycombinator.com/item?id=1".to_string(),
            title: "title".to_string(),
            snippet: "snippet".to_string(),
            intent: None,
            ranking_position: 1,
            discovered_at: Utc::now(),
            visited: false,
        };
        let json = serde_json::to_value(&opp).expect("should serialize");
        assert!(json.get("intent").is_none());
    }
}
