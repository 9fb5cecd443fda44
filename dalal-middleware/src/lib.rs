//! dalal-middleware
//!
//! Connector wrappers that shape upstream traffic, and a builder to stack them.

mod builder;
mod pacing;
mod quota;

pub use crate::builder::ConnectorBuilder;
pub use crate::pacing::{PacedConnector, PacingMiddleware};
pub use crate::quota::{QuotaAwareConnector, QuotaMiddleware};
