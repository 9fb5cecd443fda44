#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dalal_core::connector::{
    DalalConnector, NewsProvider, OverviewProvider, QuoteProvider, SectorProvider,
};
use dalal_core::{CompanyOverview, CompanyQuote, DalalError, NewsArticle, SectorPerformance};
use tokio::time::{Duration, Instant, sleep};

type SectorFn = Arc<dyn Fn() -> Result<Vec<SectorPerformance>, DalalError> + Send + Sync>;
type QuoteFn = Arc<dyn Fn(&str) -> Result<Option<CompanyQuote>, DalalError> + Send + Sync>;
type OverviewFn = Arc<dyn Fn(&str) -> Result<Option<CompanyOverview>, DalalError> + Send + Sync>;
type NewsFn = Arc<dyn Fn(&str, u8) -> Result<Vec<NewsArticle>, DalalError> + Send + Sync>;

/// One recorded provider call.
#[derive(Debug, Clone)]
pub struct Call {
    pub capability: &'static str,
    pub arg: String,
    pub at: Instant,
}

/// Closure-driven connector used by integration tests.
///
/// A capability is advertised only when its closure is set.
pub struct MockConnector {
    pub name: &'static str,
    pub delay: Duration,
    pub delay_for: HashMap<String, Duration>,
    pub sector_fn: Option<SectorFn>,
    pub quote_fn: Option<QuoteFn>,
    pub overview_fn: Option<OverviewFn>,
    pub news_fn: Option<NewsFn>,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    async fn enter(&self, capability: &'static str, arg: &str) {
        self.calls.lock().unwrap().push(Call {
            capability,
            arg: arg.to_string(),
            at: Instant::now(),
        });
        let d = self.delay_for.get(arg).copied().unwrap_or(self.delay);
        if !d.is_zero() {
            sleep(d).await;
        }
    }
}

pub struct MockConnectorBuilder {
    inner: MockConnector,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            inner: MockConnector {
                name: "mock",
                delay: Duration::ZERO,
                delay_for: HashMap::new(),
                sector_fn: None,
                quote_fn: None,
                overview_fn: None,
                news_fn: None,
                calls: Arc::new(Mutex::new(Vec::new())),
            },
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.inner.delay = d;
        self
    }

    pub fn delay_for(mut self, arg: &str, d: Duration) -> Self {
        self.inner.delay_for.insert(arg.to_string(), d);
        self
    }

    pub fn with_sector_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Vec<SectorPerformance>, DalalError> + Send + Sync + 'static,
    {
        self.inner.sector_fn = Some(Arc::new(f));
        self
    }

    pub fn with_quote_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Option<CompanyQuote>, DalalError> + Send + Sync + 'static,
    {
        self.inner.quote_fn = Some(Arc::new(f));
        self
    }

    pub fn with_overview_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Option<CompanyOverview>, DalalError> + Send + Sync + 'static,
    {
        self.inner.overview_fn = Some(Arc::new(f));
        self
    }

    pub fn with_news_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, u8) -> Result<Vec<NewsArticle>, DalalError> + Send + Sync + 'static,
    {
        self.inner.news_fn = Some(Arc::new(f));
        self
    }

    /// Shared call log, readable after the connector moved into an orchestrator.
    pub fn calls(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.inner.calls)
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(self.inner)
    }
}

#[async_trait]
impl SectorProvider for MockConnector {
    async fn sector_performance(&self) -> Result<Vec<SectorPerformance>, DalalError> {
        self.enter("sector-performance", "").await;
        (self.sector_fn.as_ref().unwrap())()
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &str) -> Result<Option<CompanyQuote>, DalalError> {
        self.enter("quote", symbol).await;
        (self.quote_fn.as_ref().unwrap())(symbol)
    }
}

#[async_trait]
impl OverviewProvider for MockConnector {
    async fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>, DalalError> {
        self.enter("overview", symbol).await;
        (self.overview_fn.as_ref().unwrap())(symbol)
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, query: &str, page_size: u8) -> Result<Vec<NewsArticle>, DalalError> {
        self.enter("news", query).await;
        (self.news_fn.as_ref().unwrap())(query, page_size)
    }
}

impl DalalConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_sector_provider(&self) -> Option<&dyn SectorProvider> {
        self.sector_fn.as_ref().map(|_| self as &dyn SectorProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.quote_fn.as_ref().map(|_| self as &dyn QuoteProvider)
    }

    fn as_overview_provider(&self) -> Option<&dyn OverviewProvider> {
        self.overview_fn.as_ref().map(|_| self as &dyn OverviewProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.news_fn.as_ref().map(|_| self as &dyn NewsProvider)
    }
}
