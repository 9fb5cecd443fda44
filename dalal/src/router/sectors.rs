use dalal_core::{Capability, SectorPerformance};

use crate::Dalal;
use crate::dalal_router_method;

impl Dalal {
    dalal_router_method! {
        /// Fetch the real-time performance of every sector, in feed order.
        ///
        /// Transport and payload-shape failures propagate; there is no retry.
        method: sector_performance() -> Vec<SectorPerformance>,
        accessor: as_sector_provider,
        capability: Capability::SectorPerformance,
        call: sector_performance()
    }
}
