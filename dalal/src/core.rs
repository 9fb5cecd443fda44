use std::sync::Arc;
use std::time::Duration;

use dalal_core::types::{DalalConfig, FetchStrategy};
use dalal_core::{Capability, DalalConnector, DalalError, SectorCatalog};

/// Orchestrator that routes capability calls to registered connectors.
pub struct Dalal {
    pub(crate) connectors: Vec<Arc<dyn DalalConnector>>,
    pub(crate) cfg: DalalConfig,
    pub(crate) catalog: SectorCatalog,
}

/// Builder for constructing a `Dalal` orchestrator with custom configuration.
pub struct DalalBuilder {
    connectors: Vec<Arc<dyn DalalConnector>>,
    cfg: DalalConfig,
    catalog: SectorCatalog,
}

impl Default for DalalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DalalBuilder {
    /// Create a new builder with the built-in BSE catalog and default configuration.
    ///
    /// Behavior:
    /// - Starts with no connectors; register at least one via [`with_connector`](Self::with_connector).
    /// - Defaults: paced batch fetches one second apart, at most five companies per
    ///   sector, a 15 s per-call timeout, ten news articles, overview enrichment on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DalalConfig::default(),
            catalog: SectorCatalog::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order matters: each capability is served by the first
    /// registered connector that advertises it.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DalalConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DalalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the sector-to-company catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: SectorCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Select how per-sector quote batches are issued.
    ///
    /// - `Paced`: one symbol at a time with [`request_interval`](Self::request_interval)
    ///   between consecutive calls; friendly to free-tier rate limits.
    /// - `Concurrent`: up to [`max_concurrency`](Self::max_concurrency) calls in flight;
    ///   results still come back in catalog order.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Delay between consecutive quote calls under `Paced`.
    #[must_use]
    pub const fn request_interval(mut self, interval: Duration) -> Self {
        self.cfg.request_interval = interval;
        self
    }

    /// In-flight bound under `Concurrent`. Zero is treated as one.
    #[must_use]
    pub const fn max_concurrency(mut self, n: usize) -> Self {
        self.cfg.max_concurrency = n;
        self
    }

    /// How many catalog symbols a sector selection queries.
    #[must_use]
    pub const fn max_companies_per_sector(mut self, n: usize) -> Self {
        self.cfg.max_companies_per_sector = n;
        self
    }

    /// Set the per-provider call timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Let provider calls run as long as the connector takes.
    #[must_use]
    pub const fn without_provider_timeout(mut self) -> Self {
        self.cfg.provider_timeout = None;
        self
    }

    /// Articles requested per news search.
    #[must_use]
    pub const fn news_page_size(mut self, n: u8) -> Self {
        self.cfg.news_page_size = n;
        self
    }

    /// Toggle the overview fetch performed when a company is selected.
    #[must_use]
    pub const fn enrich_with_overview(mut self, yes: bool) -> Self {
        self.cfg.enrich_with_overview = yes;
        self
    }

    /// Build the `Dalal` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, or if the news
    /// page size is zero.
    pub fn build(self) -> Result<Dalal, DalalError> {
        if self.connectors.is_empty() {
            return Err(DalalError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.news_page_size == 0 {
            return Err(DalalError::InvalidArg(
                "news_page_size must be at least 1".to_string(),
            ));
        }
        Ok(Dalal {
            connectors: self.connectors,
            cfg: self.cfg,
            catalog: self.catalog,
        })
    }
}

impl Dalal {
    /// Wrap a provider future with an optional timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, DalalError>
    where
        Fut: core::future::Future<Output = Result<T, DalalError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await).unwrap_or_else(|_| {
                Err(DalalError::provider_timeout(connector_name, capability.as_str()))
            }),
            None => fut.await,
        }
    }

    /// Start building a new `Dalal` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use dalal_alphavantage::AlphaVantageConnector;
    /// use dalal_newsapi::NewsApiConnector;
    ///
    /// let av = AlphaVantageConnector::rate_limited()?.build();
    /// let news = Arc::new(NewsApiConnector::from_env()?);
    ///
    /// let dalal = dalal::Dalal::builder()
    ///     .with_connector(av)
    ///     .with_connector(news)
    ///     .fetch_strategy(dalal::FetchStrategy::Paced)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DalalBuilder {
        DalalBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DalalConfig {
        &self.cfg
    }

    /// Catalog used to resolve sectors and display names.
    #[must_use]
    pub const fn catalog(&self) -> &SectorCatalog {
        &self.catalog
    }

    /// Registered connectors in registration order.
    #[must_use]
    pub fn connectors(&self) -> &[Arc<dyn DalalConnector>] {
        &self.connectors
    }
}
