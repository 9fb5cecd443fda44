use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with the provider traits a connector can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Real-time sector performance table.
    SectorPerformance,
    /// Point-in-time quote for a single symbol.
    Quote,
    /// Company fundamentals overview (P/E, P/B, 52-week band).
    Overview,
    /// Free-text news search.
    News,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SectorPerformance => "sector-performance",
            Self::Quote => "quote",
            Self::Overview => "overview",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
