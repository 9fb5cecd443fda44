//! Configuration types shared across orchestrators and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Strategy for fetching a batch of per-symbol quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// One request at a time with a fixed pause between consecutive requests.
    #[default]
    Paced,
    /// Up to `max_concurrency` requests in flight; results keep the input order.
    Concurrent,
}

/// Strategy for consuming units from a quota when handling requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum QuotaConsumptionStrategy {
    /// Each request deducts exactly one unit from the window budget.
    #[default]
    Unit,
    /// The window is split into 24 slices and each slice gets an even share.
    EvenSpread,
}

/// Configuration for a token-like quota budget over a fixed window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Maximum number of units that may be consumed within a single window.
    pub limit: u64,
    /// Duration of the accounting window.
    pub window: Duration,
    /// Strategy for how requests consume units from the budget.
    pub strategy: QuotaConsumptionStrategy,
}

impl Default for QuotaConfig {
    /// Alpha Vantage free tier: 25 requests per day.
    fn default() -> Self {
        Self {
            limit: 25,
            window: Duration::from_secs(24 * 60 * 60),
            strategy: QuotaConsumptionStrategy::Unit,
        }
    }
}

/// Snapshot of a quota budget at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaState {
    /// Configured maximum units per window.
    pub limit: u64,
    /// Remaining units available in the current window.
    pub remaining: u64,
    /// Time remaining until the current window resets.
    pub reset_in: Duration,
}

/// Fixed-interval gate applied in front of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Minimum spacing between the starts of two consecutive upstream calls.
    pub interval: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
        }
    }
}

/// Global configuration for the `Dalal` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DalalConfig {
    /// How per-sector quote batches are issued.
    pub fetch_strategy: FetchStrategy,
    /// Pause between consecutive requests under [`FetchStrategy::Paced`].
    pub request_interval: Duration,
    /// In-flight request cap under [`FetchStrategy::Concurrent`].
    pub max_concurrency: usize,
    /// Only the first N mapped symbols of a sector are queried.
    pub max_companies_per_sector: usize,
    /// Timeout for individual provider requests; `None` waits forever.
    pub provider_timeout: Option<Duration>,
    /// Number of articles requested per news query.
    pub news_page_size: u8,
    /// Fetch a company overview to enrich the checklist on company selection.
    pub enrich_with_overview: bool,
}

impl Default for DalalConfig {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            request_interval: Duration::from_millis(1000),
            max_concurrency: 2,
            max_companies_per_sector: 5,
            provider_timeout: Some(Duration::from_secs(15)),
            news_page_size: 10,
            enrich_with_overview: true,
        }
    }
}
