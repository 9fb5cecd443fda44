//! Dalal drives an Indian stock sector dashboard on top of pluggable data connectors.
//!
//! Overview
//! - [`Dalal`] routes each capability (sector performance, quotes, overviews, news)
//!   to the first registered connector that advertises it, under a per-call timeout.
//! - [`Dashboard`] owns the selection state and runs the multi-stage pipelines:
//!   sector list at startup, companies then news on sector selection, checklist
//!   then news on company selection.
//! - [`DashboardView`] is a pure description of what to draw; a [`Renderer`]
//!   receives one after every state change.
//!
//! Key behaviors and trade-offs
//! - Fetch strategy for per-sector quote batches:
//!   - `Paced`: sequential with a fixed delay between calls; gentle on free-tier
//!     quotas but a five-company sector takes four seconds of waiting.
//!   - `Concurrent`: bounded fan-out, order preserved; faster, burns quota quicker.
//! - Partial failure: a symbol that fails or has no data is skipped; the batch
//!   never fails because of one symbol.
//! - Staleness: every selection bumps per-lane epochs; a pipeline whose epoch was
//!   overtaken stops applying results and returns `Superseded`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use dalal::{Dalal, Dashboard};
//!
//! let dalal = Dalal::builder()
//!     .with_connector(Arc::new(dalal_mock::MockConnector::new()))
//!     .build()?;
//! let dashboard = Dashboard::new(Arc::new(dalal));
//!
//! dashboard.load_sector_data().await?;
//! dashboard.select_sector("Information Technology").await?;
//! dashboard.select_company("TCS.BSE").await?;
//! let view = dashboard.view();
//! ```
//!
//! See `dalal/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod dashboard;
/// Local preference storage and the persisted theme.
pub mod prefs;
/// Renderer seam.
pub mod render;
mod router;
/// Selection state and epochs.
pub mod state;
/// Pure view projection.
pub mod view;

pub use crate::core::{Dalal, DalalBuilder};
pub use dashboard::{Dashboard, company_news_query, sector_news_query};
pub use prefs::{JsonFilePreferences, MemoryPreferences, PreferenceStore, ThemePreference};
pub use render::{NullRenderer, RecordingRenderer, Renderer};
pub use state::{Epochs, Lane, PanelStatus, SelectionState, Ticket};
pub use view::{CompanyCard, DashboardView, NewsCard, Panel, SectorCard};

pub use dalal_middleware::{ConnectorBuilder, PacingMiddleware, QuotaMiddleware};

// Re-export core types for convenience
pub use dalal_core::{
    Capability, Checklist, ChecklistItem, CompaniesReport, CompanyOverview, CompanyQuote,
    DalalConfig, DalalConnector, DalalError, FailureClass, FetchStrategy, MetricKind,
    MetricStatus, NewsArticle, PacingConfig, QuotaConfig, QuotaConsumptionStrategy, QuotaState,
    SectorCatalog, SectorPerformance, Sentiment, Theme, Tone,
};
