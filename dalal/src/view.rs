//! Pure projection of a [`SelectionState`] into what a renderer should draw.
//!
//! Nothing here performs I/O. Formatting follows Indian conventions (lakh
//! grouping, rupee sign) through `dalal_core::format`.

use chrono::{DateTime, Utc};
use dalal_core::format::{format_inr, format_number, format_percentage, time_ago};
use dalal_core::{Checklist, Sentiment, Theme, Tone};
use serde::Serialize;

use crate::state::{PanelStatus, SelectionState};

const SECTORS_LOADING: &str = "Loading sector data...";
const COMPANIES_PLACEHOLDER: &str = "Select a sector to view companies";
const COMPANIES_LOADING: &str = "Loading companies...";
const COMPANIES_EMPTY: &str = "No company data available. This may be due to API limitations.";
const CHECKLIST_PLACEHOLDER: &str = "Select a company to view its checklist";
const CHECKLIST_LOADING: &str = "Loading metrics...";
const NEWS_PLACEHOLDER: &str = "Select a sector or company to view related news";
const NEWS_LOADING: &str = "Loading news...";
const NEWS_EMPTY: &str = "No recent news available";
const NO_DESCRIPTION: &str = "No description available.";

/// One panel of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Panel<T> {
    /// Hint text shown before anything was requested, or when a result is empty.
    Placeholder(&'static str),
    /// Spinner caption.
    Loading(&'static str),
    /// User-facing error line.
    Error(String),
    /// Content to draw.
    Ready(T),
}

impl<T> Panel<T> {
    /// Content, if ready.
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Error line, if failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Sector tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorCard {
    /// Sector label.
    pub name: String,
    /// Signed percentage, e.g. `+1.23%`.
    pub performance: String,
    /// Positive for flat or rising sectors.
    pub tone: Tone,
    /// Whether this is the selected sector.
    pub selected: bool,
}

/// Company tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyCard {
    /// Catalog symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Last price in rupees.
    pub price: String,
    /// Day change, signed percentage.
    pub change: String,
    /// Positive for flat or rising prices.
    pub tone: Tone,
    /// Day high.
    pub high: String,
    /// Day low.
    pub low: String,
    /// Grouped share volume.
    pub volume: String,
    /// Whether this is the selected company.
    pub selected: bool,
}

/// News item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsCard {
    /// Headline.
    pub title: String,
    /// Lede or a fixed fallback.
    pub description: String,
    /// Link to the article.
    pub url: String,
    /// Publisher.
    pub source: String,
    /// Relative publication time.
    pub published: String,
    /// Lead image.
    pub image_url: Option<String>,
    /// Headline sentiment.
    pub sentiment: Sentiment,
}

/// Full description of the dashboard at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Colour scheme.
    pub theme: Theme,
    /// Heading above the companies panel.
    pub selected_sector: Option<String>,
    /// Sector tiles.
    pub sectors: Panel<Vec<SectorCard>>,
    /// Company tiles.
    pub companies: Panel<Vec<CompanyCard>>,
    /// Checklist for the selected company.
    pub checklist: Panel<Checklist>,
    /// News items.
    pub news: Panel<Vec<NewsCard>>,
    /// Whether a manual news refresh is available.
    pub can_refresh_news: bool,
}

const fn sign_tone(v: f64) -> Tone {
    if v >= 0.0 { Tone::Positive } else { Tone::Negative }
}

fn panel<T>(
    status: &PanelStatus,
    loading: &'static str,
    placeholder: &'static str,
    content: impl FnOnce() -> Option<T>,
) -> Panel<T> {
    match status {
        PanelStatus::Placeholder => Panel::Placeholder(placeholder),
        PanelStatus::Loading => Panel::Loading(loading),
        PanelStatus::Error(msg) => Panel::Error(msg.clone()),
        PanelStatus::Ready => content().map_or(Panel::Placeholder(placeholder), Panel::Ready),
    }
}

impl DashboardView {
    /// Project `state` at time `now` (used for relative news timestamps).
    #[must_use]
    pub fn from_state(state: &SelectionState, now: DateTime<Utc>) -> Self {
        let selected_sector = state.selected_sector.as_deref();
        let selected_symbol = state.selected_company.as_ref().map(|c| c.symbol.as_str());

        let sectors = panel(&state.sectors_status, SECTORS_LOADING, SECTORS_LOADING, || {
            state.sector_data.as_ref().map(|rows| {
                rows.iter()
                    .map(|s| SectorCard {
                        name: s.name.clone(),
                        performance: format_percentage(s.performance),
                        tone: sign_tone(s.performance),
                        selected: selected_sector == Some(s.name.as_str()),
                    })
                    .collect()
            })
        });

        let companies = panel(
            &state.companies_status,
            COMPANIES_LOADING,
            if state.selected_sector.is_some() {
                COMPANIES_EMPTY
            } else {
                COMPANIES_PLACEHOLDER
            },
            || {
                (!state.companies_data.is_empty()).then(|| {
                    state
                        .companies_data
                        .iter()
                        .map(|c| CompanyCard {
                            symbol: c.symbol.clone(),
                            name: c.name.clone(),
                            price: format_inr(c.price),
                            change: format_percentage(c.change_percent),
                            tone: sign_tone(c.change_percent),
                            high: format_inr(c.high),
                            low: format_inr(c.low),
                            volume: format_number(c.volume),
                            selected: selected_symbol == Some(c.symbol.as_str()),
                        })
                        .collect()
                })
            },
        );

        let checklist = panel(
            &state.checklist_status,
            CHECKLIST_LOADING,
            CHECKLIST_PLACEHOLDER,
            || state.checklist.clone(),
        );

        let news = panel(
            &state.news_status,
            NEWS_LOADING,
            if state.news_query.is_some() {
                NEWS_EMPTY
            } else {
                NEWS_PLACEHOLDER
            },
            || {
                (!state.news_data.is_empty()).then(|| {
                    state
                        .news_data
                        .iter()
                        .map(|a| NewsCard {
                            title: a.title.clone(),
                            description: a
                                .description
                                .clone()
                                .filter(|d| !d.is_empty())
                                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                            url: a.url.clone(),
                            source: a.source.clone(),
                            published: time_ago(&a.published_at, now),
                            image_url: a.image_url.clone(),
                            sentiment: a.sentiment,
                        })
                        .collect()
                })
            },
        );

        Self {
            theme: state.theme,
            selected_sector: state.selected_sector.clone(),
            sectors,
            companies,
            checklist,
            news,
            can_refresh_news: state.selected_company.is_some() || state.selected_sector.is_some(),
        }
    }
}
