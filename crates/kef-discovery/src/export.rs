//! CSV rendering of a filtered/sorted opportunity view.

use kef_core::{Client, Opportunity};

const HEADERS: [&str; 9] = [
    "Client Name",
    "Keyword",
    "Platform",
    "URL",
    "Title",
    "Intent",
    "Ranking Position",
    "Discovered At",
    "Visited",
];

/// Render opportunities as CSV, resolving client names through `clients`.
///
/// Every field is quoted (embedded quotes doubled). Unknown clients export
/// as `Unknown`; an absent intent exports as an empty field.
#[must_use]
pub fn to_csv(opportunities: &[Opportunity], clients: &[Client]) -> String {
    let mut lines = Vec::with_capacity(opportunities.len() + 1);
    lines.push(csv_row(HEADERS.iter().map(ToString::to_string)));

    for opp in opportunities {
        let client_name = clients
            .iter()
            .find(|client| client.id == opp.client_id)
            .map_or_else(|| "Unknown".to_string(), |client| client.name.clone());

        lines.push(csv_row(
            [
                client_name,
                opp.keyword.clone(),
                opp.platform.to_string(),
                opp.url.clone(),
                opp.title.clone(),
                opp.intent.map_or_else(String::new, |intent| intent.to_string()),
                opp.ranking_position.to_string(),
                opp.discovered_at.format("%-m/%-d/%Y").to_string(),
                if opp.visited { "Yes" } else { "No" }.to_string(),
            ]
            .into_iter(),
        ));
    }

    lines.join("\n")
}

fn csv_row(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use kef_core::{Intent, Platform};

    use super::*;

    fn opp() -> Opportunity {
        Opportunity {
            id: "c1-seo-reddit-abc-1".to_string(),
            client_id: "c1".to_string(),
            keyword: "seo".to_string(),
            platform: Platform::Reddit,
            url: "https://www.reddit.com/r/seo/1".to_string(),
            title: "Need \"real\" SEO advice".to_string(),
            snippet: "snippet".to_string(),
            intent: Some(Intent::Question),
            ranking_position: 3,
            discovered_at: Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap(),
            visited: true,
        }
    }

    fn acme() -> Client {
        Client {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            website_url: "https://acme.test".to_string(),
            keywords: vec!["seo".to_string()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn header_row_lists_all_columns_quoted() {
        let csv = to_csv(&[], &[]);
        assert_eq!(
            csv,
            "\"Client Name\",\"Keyword\",\"Platform\",\"URL\",\"Title\",\"Intent\",\"Ranking Position\",\"Discovered At\",\"Visited\""
        );
    }

    #[test]
    fn row_resolves_client_name_and_formats_fields() {
        let csv = to_csv(&[opp()], &[acme()]);
        let row = csv.lines().nth(1).expect("data row");
        assert!(row.starts_with("\"Acme\",\"seo\",\"reddit\""));
        assert!(row.contains("\"question\""));
        assert!(row.contains("\"3\""));
        assert!(row.contains("\"3/7/2024\""));
        assert!(row.ends_with("\"Yes\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = to_csv(&[opp()], &[acme()]);
        assert!(csv.contains("\"Need \"\"real\"\" SEO advice\""));
    }

    #[test]
    fn unknown_client_and_absent_intent_have_placeholders() {
        let mut record = opp();
        record.intent = None;
        record.visited = false;
        let csv = to_csv(&[record], &[]);
        let row = csv.lines().nth(1).expect("data row");
        assert!(row.starts_with("\"Unknown\""));
        assert!(row.contains(",\"\",\"3\","));
        assert!(row.ends_with("\"No\""));
    }
}
