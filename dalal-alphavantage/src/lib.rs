//! dalal-alphavantage
//!
//! Connector that implements `DalalConnector` on top of the Alpha Vantage REST
//! API. Exposes sector performance (`SECTOR`), quotes (`GLOBAL_QUOTE`) and
//! company overviews (`OVERVIEW`) for BSE-listed symbols.
#![warn(missing_docs)]

/// Transport adapters and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
/// Pure conversions from raw bodies to dalal records.
pub mod normalize;

use std::sync::Arc;

use adapter::{AvOverview, AvQuotes, AvSector, DEFAULT_BASE_URL, RealAdapter};
use async_trait::async_trait;
use dalal_core::{
    CompanyOverview, CompanyQuote, DalalError, SectorCatalog, SectorPerformance,
    connector::{
        ConnectorKey, DalalConnector, OverviewProvider, QuoteProvider, SectorProvider,
        require_api_key,
    },
    strip_exchange_suffix,
};

pub use builder::AlphaVantageConnectorBuilder;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
/// Placeholder shipped in sample configuration; treated as missing.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_ALPHA_VANTAGE_API_KEY";

/// Public connector type. Production users will construct with
/// [`AlphaVantageConnector::from_env`] or [`AlphaVantageConnector::rate_limited`].
pub struct AlphaVantageConnector {
    sector: Arc<dyn AvSector>,
    quotes: Arc<dyn AvQuotes>,
    overview: Arc<dyn AvOverview>,
    catalog: SectorCatalog,
}

impl AlphaVantageConnector {
    /// Static connector key for orchestrator configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("dalal-alphavantage");

    /// Connector against the public endpoint with an explicit key.
    ///
    /// # Errors
    /// `MissingApiKey` for an empty or placeholder key.
    pub fn with_api_key(api_key: &str) -> Result<Self, DalalError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Connector using `ALPHA_VANTAGE_API_KEY`.
    ///
    /// # Errors
    /// `MissingApiKey` when the variable is unset, empty or still the placeholder.
    pub fn from_env() -> Result<Self, DalalError> {
        let key = std::env::var(API_KEY_ENV).ok();
        Self::with_api_key(key.as_deref().unwrap_or_default())
    }

    /// Connector against an alternative endpoint root (tests, proxies).
    ///
    /// # Errors
    /// `MissingApiKey` for an empty or placeholder key, or `Connector` when the
    /// HTTP client cannot be built.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, DalalError> {
        let key = require_api_key(Some(api_key), API_KEY_PLACEHOLDER, Self::KEY.as_str())?;
        let real = Arc::new(RealAdapter::new(base_url, key)?);
        Ok(Self::from_adapters(real.clone(), real.clone(), real))
    }

    /// Build from injected adapters. Useful in tests.
    pub fn from_adapters(
        sector: Arc<dyn AvSector>,
        quotes: Arc<dyn AvQuotes>,
        overview: Arc<dyn AvOverview>,
    ) -> Self {
        Self {
            sector,
            quotes,
            overview,
            catalog: SectorCatalog::default(),
        }
    }

    /// Replace the catalog used to attach display names.
    #[must_use]
    pub fn with_catalog(mut self, catalog: SectorCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

#[async_trait]
impl SectorProvider for AlphaVantageConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal_alphavantage::sector_performance",
            skip(self),
            fields(connector = "dalal-alphavantage"),
        )
    )]
    async fn sector_performance(&self) -> Result<Vec<SectorPerformance>, DalalError> {
        let body = self.sector.sector().await?;
        let sectors = normalize::sector_performance(&body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = sectors.len(), "sector performance normalized");
        Ok(sectors)
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal_alphavantage::quote",
            skip(self),
            fields(connector = "dalal-alphavantage"),
        )
    )]
    async fn quote(&self, symbol: &str) -> Result<Option<CompanyQuote>, DalalError> {
        let upstream = strip_exchange_suffix(symbol);
        let body = self.quotes.global_quote(&upstream).await?;
        Ok(normalize::company_quote(symbol, &body, &self.catalog))
    }
}

#[async_trait]
impl OverviewProvider for AlphaVantageConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal_alphavantage::overview",
            skip(self),
            fields(connector = "dalal-alphavantage"),
        )
    )]
    async fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>, DalalError> {
        let upstream = strip_exchange_suffix(symbol);
        let body = self.overview.overview(&upstream).await?;
        Ok(normalize::company_overview(symbol, &body))
    }
}

impl DalalConnector for AlphaVantageConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Alpha Vantage"
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
}
