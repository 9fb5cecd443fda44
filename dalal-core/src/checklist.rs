//! Threshold classification of price and valuation metrics into checklist items.
//!
//! Every classifier is total: missing inputs arrive as `0` and fall into the
//! neutral or "Moderate" buckets. Callers decide whether to show "Data not
//! available" by looking at the inputs, not at the status.

use serde::{Deserialize, Serialize};

use crate::format::{format_inr, format_percentage};
use dalal_types::{CompanyOverview, CompanyQuote};

/// Colour family of a checklist badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Favourable reading.
    Positive,
    /// Unfavourable reading.
    Negative,
    /// Worth a second look.
    Warning,
    /// No signal.
    Neutral,
}

/// Qualitative label for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MetricStatus {
    /// Day change above +5%.
    StrongGain,
    /// Day change below -5%.
    SignificantLoss,
    /// Day change within ±5%.
    Stable,
    /// Within 10% of the 52-week high.
    NearHigh,
    /// More than 30% below the 52-week high.
    FarFromHigh,
    /// Middle band for either 52-week distance.
    Moderate,
    /// More than 50% above the 52-week low.
    StrongRecovery,
    /// Less than 10% above the 52-week low.
    NearLow,
    /// P/E strictly between 0 and 20.
    FairValue,
    /// P/E above 30.
    HighPe,
    /// P/B strictly between 0 and 3.
    Reasonable,
    /// P/B above 5.
    HighPb,
    /// Valuation ratio outside both bands, or absent.
    Neutral,
    /// Fixed prompt to read the news panel.
    ReviewNews,
}

impl MetricStatus {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongGain => "Strong Gain",
            Self::SignificantLoss => "Significant Loss",
            Self::Stable => "Stable",
            Self::NearHigh => "Near High",
            Self::FarFromHigh => "Far from High",
            Self::Moderate => "Moderate",
            Self::StrongRecovery => "Strong Recovery",
            Self::NearLow => "Near Low",
            Self::FairValue => "Fair Value",
            Self::HighPe => "High P/E",
            Self::Reasonable => "Reasonable",
            Self::HighPb => "High P/B",
            Self::Neutral => "Neutral",
            Self::ReviewNews => "Review News",
        }
    }
}

impl core::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Day-change bucket.
#[must_use]
pub fn price_movement(change_percent: f64) -> MetricStatus {
    if change_percent > 5.0 {
        MetricStatus::StrongGain
    } else if change_percent < -5.0 {
        MetricStatus::SignificantLoss
    } else {
        MetricStatus::Stable
    }
}

/// Percentage distance of `price` from `reference`; `0` when the reference is `0`.
#[must_use]
pub fn distance_pct(price: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        (price - reference) / reference * 100.0
    }
}

/// Bucket for the distance from the 52-week high.
#[must_use]
pub fn distance_from_high(price: f64, week_high: f64) -> MetricStatus {
    let d = distance_pct(price, week_high);
    if d > -10.0 {
        MetricStatus::NearHigh
    } else if d < -30.0 {
        MetricStatus::FarFromHigh
    } else {
        MetricStatus::Moderate
    }
}

/// Bucket for the distance from the 52-week low.
#[must_use]
pub fn distance_from_low(price: f64, week_low: f64) -> MetricStatus {
    let d = distance_pct(price, week_low);
    if d > 50.0 {
        MetricStatus::StrongRecovery
    } else if d < 10.0 {
        MetricStatus::NearLow
    } else {
        MetricStatus::Moderate
    }
}

/// Price/earnings bucket.
#[must_use]
pub fn pe_status(pe: f64) -> MetricStatus {
    if pe > 0.0 && pe < 20.0 {
        MetricStatus::FairValue
    } else if pe > 30.0 {
        MetricStatus::HighPe
    } else {
        MetricStatus::Neutral
    }
}

/// Price/book bucket.
#[must_use]
pub fn pb_status(pb: f64) -> MetricStatus {
    if pb > 0.0 && pb < 3.0 {
        MetricStatus::Reasonable
    } else if pb > 5.0 {
        MetricStatus::HighPb
    } else {
        MetricStatus::Neutral
    }
}

/// Which check a [`ChecklistItem`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Day change.
    PriceMovement,
    /// Distance from the 52-week high.
    WeekHighDistance,
    /// Distance from the 52-week low.
    WeekLowDistance,
    /// Price/earnings.
    PeRatio,
    /// Price/book.
    PbRatio,
    /// News reminder.
    NewsSentiment,
}

/// Tone of a status within the context of the metric it was produced for.
///
/// "Moderate" is a warning for both 52-week distances; every other status maps
/// to a single tone.
#[must_use]
pub const fn tone(kind: MetricKind, status: MetricStatus) -> Tone {
    match (kind, status) {
        (_, MetricStatus::StrongGain | MetricStatus::NearHigh | MetricStatus::StrongRecovery) => {
            Tone::Positive
        }
        (_, MetricStatus::FairValue | MetricStatus::Reasonable) => Tone::Positive,
        (_, MetricStatus::SignificantLoss | MetricStatus::FarFromHigh | MetricStatus::NearLow) => {
            Tone::Negative
        }
        (_, MetricStatus::HighPe | MetricStatus::HighPb) => Tone::Warning,
        (MetricKind::WeekHighDistance | MetricKind::WeekLowDistance, MetricStatus::Moderate) => {
            Tone::Warning
        }
        _ => Tone::Neutral,
    }
}

/// One row of the checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    /// Metric this row reports on.
    pub kind: MetricKind,
    /// Row heading.
    pub title: &'static str,
    /// One-line reading of the underlying numbers.
    pub description: String,
    /// Classified status.
    pub status: MetricStatus,
    /// Badge colour.
    pub tone: Tone,
}

impl ChecklistItem {
    fn new(kind: MetricKind, title: &'static str, description: String, status: MetricStatus) -> Self {
        Self {
            kind,
            title,
            description,
            status,
            tone: tone(kind, status),
        }
    }
}

const DATA_NOT_AVAILABLE: &str = "Data not available";

/// Derived hold/sell checklist for one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checklist {
    /// `"<name> (<symbol>)"`.
    pub heading: String,
    /// Subtitle under the heading.
    pub subtitle: &'static str,
    /// Rows in display order.
    pub items: Vec<ChecklistItem>,
    /// Closing disclaimer naming the company.
    pub summary: String,
}

impl Checklist {
    /// Build the checklist from a quote, preferring overview fundamentals when present.
    ///
    /// The 52-week band and the valuation ratios come from the overview when one is
    /// given and non-zero, and otherwise from the optional fields on the quote.
    #[must_use]
    pub fn evaluate(quote: &CompanyQuote, overview: Option<&CompanyOverview>) -> Self {
        let pick = |from_overview: Option<f64>, from_quote: Option<f64>| {
            from_overview
                .filter(|v| *v != 0.0)
                .or(from_quote)
                .unwrap_or(0.0)
        };
        let week_high = pick(overview.map(|o| o.week52_high), quote.week_high);
        let week_low = pick(overview.map(|o| o.week52_low), quote.week_low);
        let pe = pick(overview.map(|o| o.pe_ratio), quote.pe_ratio);
        let pb = overview.map_or(0.0, |o| o.pb_ratio);
        let price = quote.price;

        let items = vec![
            ChecklistItem::new(
                MetricKind::PriceMovement,
                "Recent Price Movement",
                format!("Current change: {}", format_percentage(quote.change_percent)),
                price_movement(quote.change_percent),
            ),
            ChecklistItem::new(
                MetricKind::WeekHighDistance,
                "52-Week High Distance",
                if week_high == 0.0 {
                    DATA_NOT_AVAILABLE.to_string()
                } else {
                    format!(
                        "Price is {} from 52-week high ({})",
                        format_percentage(distance_pct(price, week_high)),
                        format_inr(week_high)
                    )
                },
                distance_from_high(price, week_high),
            ),
            ChecklistItem::new(
                MetricKind::WeekLowDistance,
                "52-Week Low Distance",
                if week_low == 0.0 {
                    DATA_NOT_AVAILABLE.to_string()
                } else {
                    format!(
                        "Price is {} from 52-week low ({})",
                        format_percentage(distance_pct(price, week_low)),
                        format_inr(week_low)
                    )
                },
                distance_from_low(price, week_low),
            ),
            ChecklistItem::new(
                MetricKind::PeRatio,
                "Valuation - P/E Ratio",
                if pe == 0.0 {
                    DATA_NOT_AVAILABLE.to_string()
                } else {
                    format!("Current P/E: {pe:.2}")
                },
                pe_status(pe),
            ),
            ChecklistItem::new(
                MetricKind::PbRatio,
                "Valuation - P/B Ratio",
                if pb == 0.0 {
                    DATA_NOT_AVAILABLE.to_string()
                } else {
                    format!("Current P/B: {pb:.2}")
                },
                pb_status(pb),
            ),
            ChecklistItem::new(
                MetricKind::NewsSentiment,
                "Recent News Sentiment",
                "Check the News & Sentiment section above for latest updates".to_string(),
                MetricStatus::ReviewNews,
            ),
        ];

        Self {
            heading: format!("{} ({})", quote.name, quote.symbol),
            subtitle: "Analytical metrics to inform your decision-making process",
            items,
            summary: format!(
                "This checklist presents key metrics for {}. Review each indicator along with \
                 recent news sentiment to make an informed decision. Remember: This is data for \
                 analysis purposes only and does not constitute investment advice. Always consult \
                 with a qualified financial advisor before making investment decisions.",
                quote.name
            ),
        }
    }

    /// Row for a given metric, if present.
    #[must_use]
    pub fn item(&self, kind: MetricKind) -> Option<&ChecklistItem> {
        self.items.iter().find(|i| i.kind == kind)
    }
}
