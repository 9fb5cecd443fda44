//! Keyword-tally sentiment for news headlines.

use dalal_types::Sentiment;

/// Words that add one point when they occur anywhere in the text.
pub const POSITIVE_TRIGGERS: [&str; 13] = [
    "gain", "profit", "growth", "surge", "rally", "boost", "strong", "positive", "up", "rise",
    "success", "record", "high",
];

/// Words that remove one point when they occur anywhere in the text.
pub const NEGATIVE_TRIGGERS: [&str; 12] = [
    "loss", "decline", "fall", "crash", "weak", "negative", "down", "drop", "concern", "risk",
    "low", "warning",
];

/// Raw tally: +1 per positive trigger present, -1 per negative trigger present.
///
/// Matching is case-insensitive and by substring, so "lowrider" counts as "low"
/// and "upgrade" counts as "up". Each trigger counts at most once.
#[must_use]
pub fn score(text: &str) -> i32 {
    let lower = text.to_lowercase();
    let hits = |words: &[&str]| {
        words
            .iter()
            .filter(|w| lower.contains(**w))
            .count()
    };
    let pos = i32::try_from(hits(&POSITIVE_TRIGGERS)).unwrap_or(i32::MAX);
    let neg = i32::try_from(hits(&NEGATIVE_TRIGGERS)).unwrap_or(i32::MAX);
    pos - neg
}

/// Classify free text by the sign of [`score`].
#[must_use]
pub fn classify(text: &str) -> Sentiment {
    match score(text) {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Sentiment of a headline plus its optional teaser, joined by a single space.
#[must_use]
pub fn classify_article(title: &str, description: Option<&str>) -> Sentiment {
    classify(&format!("{title} {}", description.unwrap_or_default()))
}
