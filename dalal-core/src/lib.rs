//! dalal-core
//!
//! Core types, traits, and pure logic shared across the dalal workspace.
//!
//! - `types`: re-exported records, configuration and the error type.
//! - `connector`: the `DalalConnector` trait and capability provider traits.
//! - `sentiment` / `checklist`: the headline and metric classifiers.
//! - `catalog`: the static BSE sector table.
//! - `format`: Indian-locale display helpers.
#![warn(missing_docs)]

/// Static sector-to-company table.
pub mod catalog;
/// Threshold classifiers and the checklist aggregate.
pub mod checklist;
/// Connector capability traits and the primary `DalalConnector` interface.
pub mod connector;
/// Display formatting helpers.
pub mod format;
/// Middleware traits implemented by connector wrappers.
pub mod middleware;
/// Keyword sentiment classifier.
pub mod sentiment;
pub mod types;

pub use catalog::{SectorCatalog, strip_exchange_suffix};
pub use checklist::{Checklist, ChecklistItem, MetricKind, MetricStatus, Tone};
pub use connector::DalalConnector;
pub use middleware::{CallContext, CallHooks, Middleware};
pub use types::*;
