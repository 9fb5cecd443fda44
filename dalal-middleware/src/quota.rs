//! Quota-aware connector wrapper and implementations.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use dalal_core::connector::DalalConnector;
use dalal_core::{CallContext, CallHooks, DalalError, Middleware};
use dalal_types::{QuotaConfig, QuotaConsumptionStrategy, QuotaState};
use tokio::time::Instant;

/// Slices per window under [`QuotaConsumptionStrategy::EvenSpread`].
const SPREAD_SLICES: u64 = 24;

/// Wrapper that enforces a local request budget in front of a connector.
pub struct QuotaAwareConnector {
    inner: Arc<dyn DalalConnector>,
    config: QuotaConfig,
    runtime: Mutex<QuotaRuntime>,
}

struct QuotaRuntime {
    calls_made_in_window: u64,
    window_start: Instant,

    // even-spread tracking
    allowed_per_slice: u64,
    slice_duration: Duration,
    calls_made_in_slice: u64,
    slice_start: Instant,
}

/// Advance `start` to the most recent boundary when `period` has elapsed.
///
/// Returns true when a reset happened.
fn align(start: &mut Instant, now: Instant, period: Duration) -> bool {
    let elapsed = now.duration_since(*start);
    if period.is_zero() || elapsed < period {
        return false;
    }
    let periods = elapsed.as_nanos() / period.as_nanos();
    let offset = u64::try_from(periods * period.as_nanos()).unwrap_or(u64::MAX);
    *start += Duration::from_nanos(offset);
    true
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl QuotaAwareConnector {
    /// Create a new quota-aware wrapper around an existing connector.
    pub fn new(inner: Arc<dyn DalalConnector>, config: QuotaConfig) -> Self {
        let (allowed_per_slice, slice_duration) = match config.strategy {
            QuotaConsumptionStrategy::EvenSpread => {
                let per_slice = std::cmp::max(1, config.limit / SPREAD_SLICES);
                let slice_ms = std::cmp::max(1, millis(config.window) / SPREAD_SLICES);
                (per_slice, Duration::from_millis(slice_ms))
            }
            _ => (0, Duration::ZERO),
        };
        let now = Instant::now();
        Self {
            inner,
            config,
            runtime: Mutex::new(QuotaRuntime {
                calls_made_in_window: 0,
                window_start: now,
                allowed_per_slice,
                slice_duration,
                calls_made_in_slice: 0,
                slice_start: now,
            }),
        }
    }

    /// Access the inner connector.
    pub fn inner(&self) -> &Arc<dyn DalalConnector> {
        &self.inner
    }

    /// Current budget without consuming a unit.
    pub fn state(&self) -> QuotaState {
        let mut rt = self
            .runtime
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if align(&mut rt.window_start, now, self.config.window) {
            rt.calls_made_in_window = 0;
        }
        QuotaState {
            limit: self.config.limit,
            remaining: self.config.limit.saturating_sub(rt.calls_made_in_window),
            reset_in: self
                .config
                .window
                .saturating_sub(now.duration_since(rt.window_start)),
        }
    }

    /// Check whether a call should be allowed and consume a unit if so.
    ///
    /// # Errors
    /// Returns `DalalError::QuotaExceeded` when the slice (for `EvenSpread`) or the
    /// overall window budget is exhausted. A slice block reports the units still
    /// left in the window and the time to the next slice boundary.
    pub fn should_allow_call(&self) -> Result<(), DalalError> {
        let mut rt = self
            .runtime
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let limit = self.config.limit;
        let spread = matches!(self.config.strategy, QuotaConsumptionStrategy::EvenSpread);

        if align(&mut rt.window_start, now, self.config.window) {
            rt.calls_made_in_window = 0;
        }

        if spread {
            let slice = rt.slice_duration;
            if align(&mut rt.slice_start, now, slice) {
                rt.calls_made_in_slice = 0;
            }
            if rt.calls_made_in_slice >= rt.allowed_per_slice && rt.calls_made_in_window < limit {
                let reset_in = slice.saturating_sub(now.duration_since(rt.slice_start));
                return Err(DalalError::QuotaExceeded {
                    remaining: limit.saturating_sub(rt.calls_made_in_window),
                    reset_in_ms: millis(reset_in),
                });
            }
        }

        if rt.calls_made_in_window < limit {
            rt.calls_made_in_window += 1;
            if spread {
                rt.calls_made_in_slice += 1;
            }
            return Ok(());
        }

        let reset_in = self
            .config
            .window
            .saturating_sub(now.duration_since(rt.window_start));
        Err(DalalError::QuotaExceeded {
            remaining: 0,
            reset_in_ms: millis(reset_in),
        })
    }
}

/// Middleware config for constructing a [`QuotaAwareConnector`].
pub struct QuotaMiddleware {
    /// Budget applied by the wrapper.
    pub config: QuotaConfig,
}

impl QuotaMiddleware {
    /// Wrap connectors with the given budget.
    #[must_use]
    pub const fn new(config: QuotaConfig) -> Self {
        Self { config }
    }
}

impl Middleware for QuotaMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn DalalConnector>) -> Arc<dyn DalalConnector> {
        Arc::new(QuotaAwareConnector::new(inner, self.config))
    }

    fn name(&self) -> &'static str {
        "QuotaAwareConnector"
    }

    fn config_json(&self) -> serde_json::Value {
        let strategy = match self.config.strategy {
            QuotaConsumptionStrategy::EvenSpread => "EvenSpread",
            _ => "Unit",
        };
        serde_json::json!({
            "limit": self.config.limit,
            "window_ms": millis(self.config.window),
            "strategy": strategy,
        })
    }
}

#[async_trait]
impl CallHooks for QuotaAwareConnector {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    async fn pre_call(&self, ctx: &CallContext) -> Result<(), DalalError> {
        self.should_allow_call().inspect_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                connector = self.inner.name(),
                capability = %ctx.capability(),
                error = %e,
                "local quota exhausted"
            );
        })
    }

    fn map_error(&self, err: DalalError, ctx: &CallContext) -> DalalError {
        if matches!(err, DalalError::RateLimited { .. }) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                connector = self.inner.name(),
                capability = %ctx.capability(),
                "upstream rate limit hit under local quota"
            );
        }
        err
    }
}

impl DalalConnector for QuotaAwareConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    dalal_core::dalal_connector_accessors!(inner);
}

dalal_core::dalal_delegate_provider_impls!(QuotaAwareConnector, inner);
