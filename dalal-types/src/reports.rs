//! Report envelopes produced by orchestrators and helpers.

use serde::{Deserialize, Serialize};

use crate::error::DalalError;
use crate::model::CompanyQuote;

/// Summary of a per-sector quote batch.
///
/// `companies` keeps the order of the requested symbols with no-data entries
/// removed. Each dropped symbol leaves one entry in `warnings`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompaniesReport {
    /// Symbols that were actually queried, in request order.
    pub requested: Vec<String>,
    /// Quotes that came back with data.
    pub companies: Vec<CompanyQuote>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<DalalError>,
}

impl CompaniesReport {
    /// Number of requested symbols that produced no quote.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.requested.len().saturating_sub(self.companies.len())
    }
}
