//! dalal-newsapi
//!
//! Connector that implements `DalalConnector` on top of the NewsAPI
//! `everything` search. Every article is tagged with a keyword sentiment.
#![warn(missing_docs)]

/// Transport adapter and the production adapter backed by `reqwest`.
pub mod adapter;
/// Pure mapping from raw bodies to dalal records.
pub mod normalize;

use std::sync::Arc;
use std::time::Duration;

use adapter::{DEFAULT_BASE_URL, NewsSearch, RealAdapter};
use async_trait::async_trait;
use dalal_core::connector::{ConnectorKey, DalalConnector, NewsProvider, require_api_key};
use dalal_core::{DalalError, NewsArticle};
use dalal_middleware::ConnectorBuilder;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "NEWS_API_KEY";
/// Placeholder shipped in sample configuration; treated as missing.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_NEWS_API_KEY";

/// Public connector type.
pub struct NewsApiConnector {
    search: Arc<dyn NewsSearch>,
}

impl NewsApiConnector {
    /// Static connector key for orchestrator configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("dalal-newsapi");

    /// Connector against the public endpoint with an explicit key.
    ///
    /// # Errors
    /// `MissingApiKey` for an empty or placeholder key.
    pub fn with_api_key(api_key: &str) -> Result<Self, DalalError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Connector using `NEWS_API_KEY`.
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
        Ok(Self::from_adapter(Arc::new(RealAdapter::new(base_url, key)?)))
    }

    /// Build from an injected adapter. Useful in tests.
    pub fn from_adapter(search: Arc<dyn NewsSearch>) -> Self {
        Self { search }
    }

    /// Builder spacing searches one second apart.
    ///
    /// # Errors
    /// `MissingApiKey` when `NEWS_API_KEY` is not usable.
    pub fn paced() -> Result<ConnectorBuilder, DalalError> {
        let raw: Arc<dyn DalalConnector> = Arc::new(Self::from_env()?);
        Ok(ConnectorBuilder::new(raw).with_pacing(Duration::from_secs(1)))
    }
}

#[async_trait]
impl NewsProvider for NewsApiConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal_newsapi::news",
            skip(self),
            fields(connector = "dalal-newsapi"),
        )
    )]
    async fn news(&self, query: &str, page_size: u8) -> Result<Vec<NewsArticle>, DalalError> {
        let body = self.search.everything(query, page_size).await?;
        let articles = normalize::articles(body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = articles.len(), "news normalized");
        Ok(articles)
    }
}

impl DalalConnector for NewsApiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}
