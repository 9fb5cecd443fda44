//! Re-export of foundational types from `dalal-types`.
// Consolidated re-exports so downstream crates can depend on `dalal-core` only

pub use dalal_types::{Capability, ConnectorKey, DalalError, FailureClass};

pub use dalal_types::{
    DalalConfig, FetchStrategy, PacingConfig, QuotaConfig, QuotaConsumptionStrategy, QuotaState,
};
pub use dalal_types::{MiddlewareLayer, MiddlewareStack};

pub use dalal_types::{
    CompaniesReport, CompanyOverview, CompanyQuote, NewsArticle, SectorPerformance, Sentiment,
    Theme,
};
