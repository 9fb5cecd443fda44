//! Normalized records produced by connectors and consumed by the dashboard.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Real-time performance of one market sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    /// Sector label as reported by the feed (e.g. "Energy").
    pub name: String,
    /// Percentage change; `1.23` means +1.23%.
    pub performance: f64,
}

impl SectorPerformance {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, performance: f64) -> Self {
        Self {
            name: name.into(),
            performance,
        }
    }
}

/// Point-in-time quote for a single listed company.
///
/// Numeric fields are `0` when the upstream omitted them or sent something
/// unparseable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuote {
    /// Catalog symbol including exchange suffix (e.g. `TCS.BSE`).
    pub symbol: String,
    /// Display name from the static catalog, or the raw symbol.
    pub name: String,
    /// Last traded price.
    pub price: f64,
    /// Absolute change versus previous close.
    pub change: f64,
    /// Percentage change versus previous close.
    pub change_percent: f64,
    /// Traded volume.
    pub volume: u64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Previous session close.
    pub previous_close: f64,
    /// Price/earnings ratio, when the provider includes it with the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    /// 52-week high, when the provider includes it with the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_high: Option<f64>,
    /// 52-week low, when the provider includes it with the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_low: Option<f64>,
}

/// Company fundamentals used to enrich the checklist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOverview {
    /// Market capitalization in the listing currency.
    pub market_cap: u64,
    /// Price/earnings ratio.
    pub pe_ratio: f64,
    /// Price/book ratio.
    pub pb_ratio: f64,
    /// Dividend yield as a fraction.
    pub dividend_yield: f64,
    /// Earnings per share.
    pub eps: f64,
    /// Beta versus the benchmark.
    pub beta: f64,
    /// 52-week high.
    pub week52_high: f64,
    /// 52-week low.
    pub week52_low: f64,
}

/// Three-way tone of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Net positive trigger count.
    Positive,
    /// Net negative trigger count.
    Negative,
    /// Balanced or no triggers.
    #[default]
    Neutral,
}

impl Sentiment {
    /// Lowercase label used in badges and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A news headline with its computed sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Headline.
    pub title: String,
    /// Optional teaser text.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full article.
    pub url: String,
    /// Publisher name.
    pub source: String,
    /// Publication timestamp as sent by the feed (RFC 3339).
    pub published_at: String,
    /// Optional lead image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Sentiment of `title + " " + description`.
    pub sentiment: Sentiment,
}
