use dalal_core::NewsArticle;
use dalal_core::sentiment::classify_article;

const HEADLINES: &[(&str, Option<&str>, &str)] = &[
    (
        "Sensex extends rally as IT majors post record profit",
        Some("Strong growth in deal wins lifts sentiment across the board."),
        "Mint",
    ),
    (
        "Banking stocks decline on asset quality concern",
        Some("Analysts flag risk from unsecured lending."),
        "Business Standard",
    ),
    (
        "SEBI publishes quarterly filing calendar",
        None,
        "Economic Times",
    ),
];

pub fn search(query: &str, page_size: u8) -> Vec<NewsArticle> {
    HEADLINES
        .iter()
        .take(usize::from(page_size))
        .enumerate()
        .map(|(i, (headline, description, source))| {
            let title = format!("{headline} ({query})");
            NewsArticle {
                sentiment: classify_article(&title, *description),
                title,
                description: description.map(str::to_string),
                url: format!("https://news.example.invalid/{i}"),
                source: (*source).to_string(),
                published_at: format!("2024-06-0{}T09:30:00Z", i + 1),
                image_url: None,
            }
        })
        .collect()
}
