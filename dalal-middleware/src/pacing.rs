//! Fixed-interval gate in front of a connector.
//!
//! Consecutive calls through the same wrapper start at least `interval` apart,
//! whatever capability they hit. The first call is never delayed. Waiting callers
//! are served in lock order.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dalal_core::connector::DalalConnector;
use dalal_core::{CallContext, CallHooks, DalalError, Middleware};
use dalal_types::PacingConfig;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Wrapper that spaces upstream calls by a fixed interval.
pub struct PacedConnector {
    inner: Arc<dyn DalalConnector>,
    interval: Duration,
    last_start: Mutex<Option<Instant>>,
}

impl PacedConnector {
    /// Create a new pacing wrapper around an existing connector.
    pub fn new(inner: Arc<dyn DalalConnector>, config: PacingConfig) -> Self {
        Self {
            inner,
            interval: config.interval,
            last_start: Mutex::new(None),
        }
    }

    /// Access the inner connector.
    pub fn inner(&self) -> &Arc<dyn DalalConnector> {
        &self.inner
    }

    /// Configured spacing.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next slot is free, then claim it.
    pub async fn acquire(&self) {
        let mut last = self.last_start.lock().await;
        if let Some(prev) = *last {
            let next = prev + self.interval;
            if Instant::now() < next {
                tokio::time::sleep_until(next).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Middleware config for constructing a [`PacedConnector`].
pub struct PacingMiddleware {
    /// Spacing applied by the wrapper.
    pub config: PacingConfig,
}

impl PacingMiddleware {
    /// Pace connectors with the given spacing.
    #[must_use]
    pub const fn new(config: PacingConfig) -> Self {
        Self { config }
    }
}

impl Middleware for PacingMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn DalalConnector>) -> Arc<dyn DalalConnector> {
        Arc::new(PacedConnector::new(inner, self.config))
    }

    fn name(&self) -> &'static str {
        "PacedConnector"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "interval_ms": u64::try_from(self.config.interval.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

#[async_trait]
impl CallHooks for PacedConnector {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    async fn pre_call(&self, ctx: &CallContext) -> Result<(), DalalError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            connector = self.inner.name(),
            capability = %ctx.capability(),
            "waiting for pacing slot"
        );
        self.acquire().await;
        Ok(())
    }
}

impl DalalConnector for PacedConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    dalal_core::dalal_connector_accessors!(inner);
}

dalal_core::dalal_delegate_provider_impls!(PacedConnector, inner);
