//! Keyword-list intent classifier for opportunity text.

use kef_core::Intent;

const POSITIVE_WORDS: &[&str] = &[
    "recommend",
    "love",
    "great",
    "excellent",
    "amazing",
    "fantastic",
    "perfect",
    "brilliant",
    "outstanding",
    "superb",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "worst",
    "horrible",
    "useless",
    "rubbish",
    "disappointing",
    "poor",
    "bad",
];

const QUESTION_WORDS: &[&str] = &[
    "how",
    "what",
    "where",
    "when",
    "why",
    "which",
    "help",
    "advice",
    "suggestion",
    "recommendation",
];

/// Classify free text into a coarse engagement intent.
///
/// Matching is plain case-insensitive substring containment, and a literal
/// `?` counts as a question indicator. Precedence: question indicators
/// dominate; text carrying both positive and negative words with no question
/// indicator is neutral (an intentional tie-break).
#[must_use]
pub fn classify_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();

    let has_positive = POSITIVE_WORDS.iter().any(|word| lower.contains(word));
    let has_negative = NEGATIVE_WORDS.iter().any(|word| lower.contains(word));
    let has_question =
        QUESTION_WORDS.iter().any(|word| lower.contains(word)) || lower.contains('?');

    if has_question {
        Intent::Question
    } else if has_negative && !has_positive {
        Intent::Negative
    } else if has_positive && !has_negative {
        Intent::Positive
    } else {
        Intent::Neutral
    }
}
