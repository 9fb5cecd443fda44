use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the dalal workspace.
///
/// This wraps capability mismatches, transport failures reported by connectors,
/// no-data conditions, unmapped selections and the bookkeeping errors produced by
/// the orchestrator (timeouts, quotas, superseded pipelines).
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DalalError {
    /// The requested capability is not implemented by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "overview").
        capability: String,
    },

    /// The upstream answered, but the top-level payload is malformed.
    #[error("{0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector failed at the transport level (status, network, body).
    #[error("{msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream has no usable data for the requested resource.
    #[error("no data available: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "quote for TCS.BSE".
        what: String,
    },

    /// The upstream refused the call because its own rate limit was hit.
    #[error("{msg}")]
    RateLimited {
        /// Connector name that reported the limit.
        connector: String,
        /// Message reported by the upstream, or a generic hint.
        msg: String,
    },

    /// The selected sector has no configured company symbols.
    #[error("No companies mapped for this sector")]
    UnmappedSector {
        /// The sector label that was selected.
        sector: String,
    },

    /// A sector was selected before sector performance loaded successfully.
    #[error("Sector data not loaded")]
    SectorsNotLoaded,

    /// A connector was constructed without a usable API key.
    #[error("Please configure your API keys ({connector})")]
    MissingApiKey {
        /// Connector name that is missing credentials.
        connector: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "quote", "news").
        capability: String,
    },

    /// The request exceeds the locally configured quota budget for the current window.
    #[error("quota exceeded: remaining={remaining} reset_in_ms={reset_in_ms}")]
    QuotaExceeded {
        /// Remaining units at the time of rejection.
        remaining: u64,
        /// Milliseconds until the quota window resets.
        reset_in_ms: u64,
    },

    /// A newer selection replaced the one this pipeline was started for.
    #[error("superseded by a newer selection: {what}")]
    Superseded {
        /// Which stage was discarded (e.g. "companies for Energy").
        what: String,
    },
}

/// Coarse failure taxonomy used to decide how an error propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureClass {
    /// Non-success response, network error or malformed payload. Aborts the stage.
    Transport,
    /// Well-formed response lacking the expected data. Absorbed by batch loops.
    NoData,
    /// The selection has no configured backing data. Reported immediately.
    UnmappedSelection,
    /// Local bookkeeping outcome (superseded pipeline, unsupported capability).
    Internal,
}

impl DalalError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `RateLimited` error.
    pub fn rate_limited(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::RateLimited {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `Superseded` error.
    pub fn superseded(what: impl Into<String>) -> Self {
        Self::Superseded { what: what.into() }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence, benign no-data conditions and superseded pipelines are
    /// not actionable.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(
            self,
            Self::Unsupported { .. } | Self::NotFound { .. } | Self::Superseded { .. }
        )
    }

    /// Map this error onto the propagation taxonomy.
    #[must_use]
    pub const fn class(&self) -> FailureClass {
        match self {
            Self::NotFound { .. } => FailureClass::NoData,
            Self::UnmappedSector { .. } | Self::SectorsNotLoaded => {
                FailureClass::UnmappedSelection
            }
            Self::Unsupported { .. } | Self::Superseded { .. } => FailureClass::Internal,
            Self::Data(_)
            | Self::InvalidArg(_)
            | Self::Connector { .. }
            | Self::RateLimited { .. }
            | Self::MissingApiKey { .. }
            | Self::ProviderTimeout { .. }
            | Self::QuotaExceeded { .. } => FailureClass::Transport,
        }
    }
}
