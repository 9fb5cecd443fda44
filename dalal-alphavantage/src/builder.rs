use std::sync::Arc;
use std::time::Duration;

use dalal_core::DalalError;
use dalal_core::connector::DalalConnector;
use dalal_middleware::ConnectorBuilder as GenericConnectorBuilder;
use dalal_types::{QuotaConfig, QuotaConsumptionStrategy};

use crate::AlphaVantageConnector;

/// Builder type alias specialized for Alpha Vantage connectors.
pub type AlphaVantageConnectorBuilder = GenericConnectorBuilder;

/// Free-tier daily allowance.
const FREE_TIER_DAILY_LIMIT: u64 = 25;

impl AlphaVantageConnector {
    /// Returns an unconfigured builder around an env-configured connector.
    ///
    /// Customize with the builder methods before calling `.build()`.
    ///
    /// # Errors
    /// `MissingApiKey` when `ALPHA_VANTAGE_API_KEY` is not usable.
    pub fn builder() -> Result<AlphaVantageConnectorBuilder, DalalError> {
        let raw: Arc<dyn DalalConnector> = Arc::new(Self::from_env()?);
        Ok(GenericConnectorBuilder::new(raw))
    }

    /// Returns a builder sized for the free tier: one call per second and 25 per day.
    ///
    /// Users can further customize before calling `.build()`.
    ///
    /// # Errors
    /// `MissingApiKey` when `ALPHA_VANTAGE_API_KEY` is not usable.
    pub fn rate_limited() -> Result<AlphaVantageConnectorBuilder, DalalError> {
        let raw: Arc<dyn DalalConnector> = Arc::new(Self::from_env()?);
        Ok(Self::free_tier(raw))
    }

    /// Wrap an already constructed connector with the free-tier layers.
    #[must_use]
    pub fn free_tier(raw: Arc<dyn DalalConnector>) -> AlphaVantageConnectorBuilder {
        let cfg = QuotaConfig {
            limit: FREE_TIER_DAILY_LIMIT,
            window: Duration::from_secs(24 * 60 * 60),
            strategy: QuotaConsumptionStrategy::Unit,
        };
        GenericConnectorBuilder::new(raw)
            .with_pacing(Duration::from_secs(1))
            .with_quota(&cfg)
    }
}
