use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dalal_core::connector::{
    DalalConnector, NewsProvider, OverviewProvider, QuoteProvider, SectorProvider,
};
use dalal_core::{CompanyOverview, CompanyQuote, DalalError, NewsArticle, SectorPerformance};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DalalError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    sector_rule: Option<MockBehavior<Vec<SectorPerformance>>>,
    quote_rules: HashMap<String, MockBehavior<Option<CompanyQuote>>>,
    overview_rules: HashMap<String, MockBehavior<Option<CompanyOverview>>>,
    news_rules: HashMap<String, MockBehavior<Vec<NewsArticle>>>,
    calls: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `sector_performance` calls.
    pub async fn set_sector_behavior(&self, behavior: MockBehavior<Vec<SectorPerformance>>) {
        self.state.lock().await.sector_rule = Some(behavior);
    }

    /// Set the behavior for `quote` calls for a specific symbol.
    pub async fn set_quote_behavior(
        &self,
        symbol: impl Into<String>,
        behavior: MockBehavior<Option<CompanyQuote>>,
    ) {
        self.state
            .lock()
            .await
            .quote_rules
            .insert(symbol.into(), behavior);
    }

    /// Set the behavior for `overview` calls for a specific symbol.
    pub async fn set_overview_behavior(
        &self,
        symbol: impl Into<String>,
        behavior: MockBehavior<Option<CompanyOverview>>,
    ) {
        self.state
            .lock()
            .await
            .overview_rules
            .insert(symbol.into(), behavior);
    }

    /// Set the behavior for `news` calls for a specific query.
    pub async fn set_news_behavior(
        &self,
        query: impl Into<String>,
        behavior: MockBehavior<Vec<NewsArticle>>,
    ) {
        self.state
            .lock()
            .await
            .news_rules
            .insert(query.into(), behavior);
    }

    /// Calls observed so far, formatted as `"<capability>:<input>"`.
    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.sector_rule = None;
        guard.quote_rules.clear();
        guard.overview_rules.clear();
        guard.news_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Inputs without a configured rule answer with "no data".
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DalalConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DalalConnector>, controller)
    }

    async fn run<T>(behavior: Option<MockBehavior<T>>, default: T) -> Result<T, DalalError> {
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(default),
        }
    }
}

#[async_trait]
impl DalalConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl SectorProvider for DynamicMockConnector {
    async fn sector_performance(&self) -> Result<Vec<SectorPerformance>, DalalError> {
        // Snapshot the rule without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push("sector-performance".to_string());
            guard.sector_rule.clone()
        };
        Self::run(behavior, Vec::new()).await
    }
}

#[async_trait]
impl QuoteProvider for DynamicMockConnector {
    async fn quote(&self, symbol: &str) -> Result<Option<CompanyQuote>, DalalError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(format!("quote:{symbol}"));
            guard.quote_rules.get(symbol).cloned()
        };
        Self::run(behavior, None).await
    }
}

#[async_trait]
impl OverviewProvider for DynamicMockConnector {
    async fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>, DalalError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(format!("overview:{symbol}"));
            guard.overview_rules.get(symbol).cloned()
        };
        Self::run(behavior, None).await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, query: &str, _page_size: u8) -> Result<Vec<NewsArticle>, DalalError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(format!("news:{query}"));
            guard.news_rules.get(query).cloned()
        };
        Self::run(behavior, Vec::new()).await
    }
}
