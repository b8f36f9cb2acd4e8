//! Integration tests for the live Reddit source using wiremock HTTP mocks.

use kef_discovery::{RedditSource, Source};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_source(base_url: &str) -> RedditSource {
    RedditSource::new(base_url, "kef-test/1.0", 5).expect("source construction should not fail")
}

fn listing_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "children": [
                {
                    "data": {
                        "id": "abc1",
                        "title": "Anyone found good seo tools lately?",
                        "selftext": "",
                        "permalink": "/r/seo/comments/abc1/anyone_found_good_seo_tools/",
                        "subreddit": "seo",
                        "num_comments": 12,
                        "score": 88
                    }
                },
                {
                    "data": {
                        "id": "spon",
                        "title": "Sponsored: buy our seo tools",
                        "selftext": "",
                        "permalink": "/r/seo/comments/spon/sponsored/",
                        "subreddit": "seo",
                        "num_comments": 0,
                        "score": 1,
                        "is_sponsored": true
                    }
                },
                {
                    "data": {
                        "id": "gone",
                        "title": "Removed thread",
                        "selftext": "",
                        "permalink": "/r/seo/comments/gone/removed/",
                        "subreddit": "seo",
                        "num_comments": 3,
                        "score": 5,
                        "removed_by_category": "moderator"
                    }
                },
                {
                    "data": {
                        "id": "def2",
                        "title": "My seo tools setup",
                        "selftext": "I love this stack and can only recommend it to everyone running a small agency because it saves hours every week",
                        "permalink": "/r/marketing/comments/def2/my_seo_tools_setup/",
                        "subreddit": "marketing",
                        "num_comments": 40,
                        "score": 210
                    }
                }
            ]
        }
    })
}

#[tokio::test]
async fn live_search_parses_listing_and_skips_flagged_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "seo tools"))
        .and(query_param("sort", "relevance"))
        .and(query_param("limit", "50"))
        .and(query_param("type", "link"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let results = source
        .search("seo tools", "client-1")
        .await
        .expect("live source search should not error");

    assert_eq!(results.len(), 2, "sponsored and removed posts are skipped");

    // Ranking positions track the raw response slot, so skipped posts leave
    // gaps.
    assert_eq!(results[0].ranking_position, 1);
    assert_eq!(results[1].ranking_position, 4);

    assert_eq!(
        results[0].url,
        "https://www.reddit.com/r/seo/comments/abc1/anyone_found_good_seo_tools/"
    );
    assert_eq!(
        results[0].snippet,
        "Posted in r/seo • 12 comments • 88 upvotes"
    );
    assert_eq!(
        results[0].intent,
        Some(kef_core::Intent::Question),
        "title ends in a question mark"
    );

    assert!(results[1].snippet.ends_with("..."));
    assert_eq!(results[1].intent, Some(kef_core::Intent::Positive));
}

#[tokio::test]
async fn non_success_status_falls_back_to_curated_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let results = source
        .search("seo tools", "client-1")
        .await
        .expect("fallback never errors");

    assert_eq!(results.len(), 2);
    assert!(results[0].title.contains("seo tools"));
    assert!(results[0].url.contains("/r/entrepreneur/"));
    assert!(results.iter().all(|o| o.intent.is_none()));
}

#[tokio::test]
async fn malformed_body_falls_back_to_curated_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let results = source
        .search("seo tools", "client-1")
        .await
        .expect("fallback never errors");

    assert_eq!(results.len(), 2);
    assert!(results[1].url.contains("/r/smallbusiness/"));
}
