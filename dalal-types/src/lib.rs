//! Shared data records, configuration primitives and the error type for the dalal workspace.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod middleware;
mod model;
mod reports;
mod theme;

pub use capability::Capability;
pub use config::{
    DalalConfig, FetchStrategy, PacingConfig, QuotaConfig, QuotaConsumptionStrategy, QuotaState,
};
pub use connector::ConnectorKey;
pub use error::{DalalError, FailureClass};
pub use middleware::{MiddlewareLayer, MiddlewareStack};
pub use model::{CompanyOverview, CompanyQuote, NewsArticle, SectorPerformance, Sentiment};
pub use reports::CompaniesReport;
pub use theme::Theme;
