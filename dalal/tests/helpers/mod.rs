// Re-export helpers so tests can `use crate::helpers::*;`
#![allow(dead_code)]

pub mod mock_connector;

pub use mock_connector::{Call, MockConnector, MockConnectorBuilder};

use dalal_core::{CompanyQuote, NewsArticle, SectorCatalog, SectorPerformance, Sentiment};

/// Quote with just enough fields for ordering and checklist assertions.
pub fn quote(symbol: &str, price: f64, change_percent: f64) -> CompanyQuote {
    CompanyQuote {
        symbol: symbol.to_string(),
        name: format!("{symbol} Ltd"),
        price,
        change_percent,
        ..CompanyQuote::default()
    }
}

pub fn article(title: &str) -> NewsArticle {
    NewsArticle {
        title: title.to_string(),
        description: None,
        url: format!("https://news.example.invalid/{}", title.len()),
        source: "Test Wire".to_string(),
        published_at: "2024-06-01T09:30:00Z".to_string(),
        image_url: None,
        sentiment: Sentiment::Neutral,
    }
}

/// Seven-symbol sector plus two small ones.
pub fn catalog() -> SectorCatalog {
    SectorCatalog::empty()
        .with_sector(
            "Big",
            ["S1.BSE", "S2.BSE", "S3.BSE", "S4.BSE", "S5.BSE", "S6.BSE", "S7.BSE"],
        )
        .with_sector("Alpha", ["A1.BSE", "A2.BSE"])
        .with_sector("Beta", ["B1.BSE"])
        .with_name("A1.BSE", "Alpha One")
        .with_name("B1.BSE", "Beta One")
}

/// Sector rows for every catalog sector plus one the catalog does not map.
pub fn sectors() -> Vec<SectorPerformance> {
    vec![
        SectorPerformance::new("Big", 0.4),
        SectorPerformance::new("Alpha", 1.2),
        SectorPerformance::new("Beta", -0.4),
        SectorPerformance::new("Gold", 0.1),
    ]
}

pub fn quote_args(calls: &[Call]) -> Vec<String> {
    calls
        .iter()
        .filter(|c| c.capability == "quote")
        .map(|c| c.arg.clone())
        .collect()
}
