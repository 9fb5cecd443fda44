//! Middleware traits for wrapping `DalalConnector` implementations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::connector::DalalConnector;
use crate::{Capability, DalalError};

/// Trait implemented by connector middleware layers.
///
/// A middleware consumes an inner `DalalConnector` and returns a wrapped connector
/// that augments or restricts behavior (e.g., pacing, quotas).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner connector and return the wrapped connector.
    fn apply(self: Box<Self>, inner: Arc<dyn DalalConnector>) -> Arc<dyn DalalConnector>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}

/// Per-call information handed to [`CallHooks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    capability: Capability,
}

impl CallContext {
    /// Context for a call to the given capability.
    #[must_use]
    pub const fn new(capability: Capability) -> Self {
        Self { capability }
    }

    /// Capability being invoked.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        self.capability
    }
}

/// Hooks run by wrapper connectors around every delegated provider call.
///
/// Used together with [`dalal_delegate_provider_impls!`](crate::dalal_delegate_provider_impls).
#[async_trait]
pub trait CallHooks: Send + Sync {
    /// Runs before the inner provider; an error short-circuits the call.
    async fn pre_call(&self, ctx: &CallContext) -> Result<(), DalalError> {
        let _ = ctx;
        Ok(())
    }

    /// Rewrites an error returned by the inner provider.
    fn map_error(&self, err: DalalError, ctx: &CallContext) -> DalalError {
        let _ = ctx;
        err
    }
}
