//! Mock dalal connectors for tests and examples.
//!
//! [`MockConnector`] serves deterministic fixtures for every capability. A few
//! reserved inputs exercise failure paths:
//!
//! - symbol or query `FAIL`: connector error
//! - symbol or query `TIMEOUT`: answers after a 200 ms delay
//! - symbol `RATELIMIT`: upstream rate-limit error
use std::time::Duration;

use async_trait::async_trait;
use dalal_core::connector::{
    DalalConnector, NewsProvider, OverviewProvider, QuoteProvider, SectorProvider,
};
use dalal_core::{CompanyOverview, CompanyQuote, DalalError, NewsArticle, SectorPerformance};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

const NAME: &str = "dalal-mock";

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(input: &str, capability: &'static str) -> Result<(), DalalError> {
        match input {
            "FAIL" => Err(DalalError::connector(
                NAME,
                format!("forced failure: {capability}"),
            )),
            "RATELIMIT" => Err(DalalError::rate_limited(
                NAME,
                "API rate limit reached. Please wait and try again.",
            )),
            "TIMEOUT" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DalalConnector for MockConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_sector_provider(&self) -> Option<&dyn SectorProvider> {
        Some(self as &dyn SectorProvider)
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
    fn as_overview_provider(&self) -> Option<&dyn OverviewProvider> {
        Some(self as &dyn OverviewProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl SectorProvider for MockConnector {
    async fn sector_performance(&self) -> Result<Vec<SectorPerformance>, DalalError> {
        Ok(fixtures::sectors::all())
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &str) -> Result<Option<CompanyQuote>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "quote").await?;
        Ok(fixtures::quotes::by_symbol(symbol))
    }
}

#[async_trait]
impl OverviewProvider for MockConnector {
    async fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "overview").await?;
        Ok(fixtures::overview::by_symbol(symbol))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, query: &str, page_size: u8) -> Result<Vec<NewsArticle>, DalalError> {
        Self::maybe_fail_or_timeout(query, "news").await?;
        Ok(fixtures::news::search(query, page_size))
    }
}
