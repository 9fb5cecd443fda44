//! Builder for composing connectors with middleware layers.
//!
//! # Middleware Ordering Convention
//!
//! Middleware layers form an "onion" around the raw connector:
//!
//! ```text
//! User Request
//!     ↓
//! Outermost Middleware (e.g., Quota - rejects over-budget calls before they wait)
//!     ↓
//! Inner Middleware (e.g., Pacing - spaces the calls that were admitted)
//!     ↓
//! Raw Connector (e.g., Alpha Vantage - makes actual API calls)
//! ```
//!
//! The `layers` vector stores middleware in **outermost-first** order (last added =
//! outermost) and is **applied in reverse** during `build()`:
//!
//! ```text
//! builder.with_pacing(..).with_quota(..)
//!
//! Storage: [Quota, Pacing]
//! Applied:  Raw -> Pacing -> Quota
//! Result:   Quota(Pacing(Raw))
//! ```
//!
//! This convention matches [`MiddlewareStack`] where `layers[0]` is the outermost layer.

use std::sync::Arc;
use std::time::Duration;

use dalal_core::Middleware;
use dalal_core::connector::DalalConnector;
use dalal_types::{MiddlewareLayer, MiddlewareStack, PacingConfig, QuotaConfig, QuotaConsumptionStrategy};
use serde_json::json;

use crate::pacing::PacingMiddleware;
use crate::quota::QuotaMiddleware;

const QUOTA: &str = "QuotaAwareConnector";
const PACING: &str = "PacedConnector";

/// Generic middleware builder for composing a connector with layered wrappers.
///
/// See [module-level documentation](self) for details on middleware ordering.
pub struct ConnectorBuilder {
    raw: Arc<dyn DalalConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn DalalConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace quota configuration at the outermost position.
    #[must_use]
    pub fn with_quota(mut self, cfg: &QuotaConfig) -> Self {
        self.layers.retain(|m| m.name() != QUOTA);
        self.layers.insert(0, Box::new(QuotaMiddleware::new(cfg.clone())));
        self
    }

    /// Remove quota if present.
    #[must_use]
    pub fn without_quota(mut self) -> Self {
        self.layers.retain(|m| m.name() != QUOTA);
        self
    }

    /// Add or replace a fixed-interval pacing gate at the outermost position.
    #[must_use]
    pub fn with_pacing(mut self, interval: Duration) -> Self {
        self.layers.retain(|m| m.name() != PACING);
        self.layers
            .insert(0, Box::new(PacingMiddleware::new(PacingConfig { interval })));
        self
    }

    /// Remove pacing if present.
    #[must_use]
    pub fn without_pacing(mut self) -> Self {
        self.layers.retain(|m| m.name() != PACING);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Export the current middleware stack configuration for inspection.
    ///
    /// The raw connector is appended as the innermost "layer".
    #[must_use]
    pub fn to_stack(&self) -> MiddlewareStack {
        let mut stack = MiddlewareStack::new();
        for layer in &self.layers {
            stack.push(MiddlewareLayer::new(layer.name(), layer.config_json()));
        }
        stack.push(MiddlewareLayer::new(
            "RawConnector",
            json!({ "name": self.raw.name() }),
        ));
        stack
    }

    /// Construct a builder from a raw connector and an explicit stack.
    ///
    /// Unknown layer names are ignored. This is the inverse of [`to_stack`](Self::to_stack).
    #[must_use]
    pub fn from_stack(raw: Arc<dyn DalalConnector>, stack: &MiddlewareStack) -> Self {
        let get_u64 = |cfg: &serde_json::Value, key: &str| cfg.get(key).and_then(serde_json::Value::as_u64);
        let mut layers: Vec<Box<dyn Middleware>> = Vec::new();
        for l in &stack.layers {
            match l.name.as_str() {
                QUOTA => {
                    let defaults = QuotaConfig::default();
                    let strategy = match l.config.get("strategy").and_then(|v| v.as_str()) {
                        Some("EvenSpread") => QuotaConsumptionStrategy::EvenSpread,
                        _ => QuotaConsumptionStrategy::Unit,
                    };
                    let cfg = QuotaConfig {
                        limit: get_u64(&l.config, "limit").unwrap_or(defaults.limit),
                        window: get_u64(&l.config, "window_ms")
                            .map_or(defaults.window, Duration::from_millis),
                        strategy,
                    };
                    layers.push(Box::new(QuotaMiddleware::new(cfg)));
                }
                PACING => {
                    let interval = get_u64(&l.config, "interval_ms")
                        .map_or(PacingConfig::default().interval, Duration::from_millis);
                    layers.push(Box::new(PacingMiddleware::new(PacingConfig { interval })));
                }
                _ => {}
            }
        }
        Self { raw, layers }
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn DalalConnector> {
        let mut acc: Arc<dyn DalalConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
