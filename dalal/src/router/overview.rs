use dalal_core::{Capability, CompanyOverview};

use crate::Dalal;
use crate::dalal_router_method;

impl Dalal {
    dalal_router_method! {
        /// Fetch company fundamentals for a catalog symbol.
        ///
        /// `Ok(None)` means the upstream answered without usable data.
        method: overview(symbol: &str) -> Option<CompanyOverview>,
        accessor: as_overview_provider,
        capability: Capability::Overview,
        call: overview(symbol)
    }
}
