//! Selection state owned by the dashboard.

use dalal_core::{Checklist, CompanyQuote, NewsArticle, SectorPerformance, Theme};
use serde::Serialize;

/// What a dashboard panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum PanelStatus {
    /// Nothing requested yet.
    #[default]
    Placeholder,
    /// A fetch is in flight.
    Loading,
    /// Data is current.
    Ready,
    /// The last fetch failed; the message is user-facing.
    Error(String),
}

/// Selection lane. Each lane carries its own epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lane {
    /// Sector selection and its company batch.
    Sector,
    /// Company selection and its checklist.
    Company,
    /// News searches.
    News,
}

/// Monotonic per-lane counters used to drop stale pipeline results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Epochs {
    /// Bumped by sector selection.
    pub sector: u64,
    /// Bumped by sector and company selection.
    pub company: u64,
    /// Bumped by every selection and every news query.
    pub news: u64,
}

impl Epochs {
    fn slot(&mut self, lane: Lane) -> &mut u64 {
        match lane {
            Lane::Sector => &mut self.sector,
            Lane::Company => &mut self.company,
            Lane::News => &mut self.news,
        }
    }

    /// Current value for `lane`.
    #[must_use]
    pub const fn get(&self, lane: Lane) -> u64 {
        match lane {
            Lane::Sector => self.sector,
            Lane::Company => self.company,
            Lane::News => self.news,
        }
    }

    /// Advance `lane` and return a ticket for the new epoch.
    pub fn bump(&mut self, lane: Lane) -> Ticket {
        let slot = self.slot(lane);
        *slot += 1;
        Ticket {
            lane,
            epoch: *slot,
        }
    }

    /// Whether no newer selection has happened on the ticket's lane.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        self.get(ticket.lane) == ticket.epoch
    }
}

/// Proof of which selection a pipeline stage was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// Lane the ticket belongs to.
    pub lane: Lane,
    /// Epoch captured when the stage started.
    pub epoch: u64,
}

/// Everything the dashboard knows about the current selection.
///
/// Selecting a sector clears the company, checklist and news. Selecting a company
/// never touches sector context.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Sector performance, absent until the first successful load.
    pub sector_data: Option<Vec<SectorPerformance>>,
    /// Selected sector label.
    pub selected_sector: Option<String>,
    /// Quotes for the selected sector, in catalog order.
    pub companies_data: Vec<CompanyQuote>,
    /// Selected company record.
    pub selected_company: Option<CompanyQuote>,
    /// Checklist derived for the selected company.
    pub checklist: Option<Checklist>,
    /// Articles for the last successful news query.
    pub news_data: Vec<NewsArticle>,
    /// Last query sent to the news provider.
    pub news_query: Option<String>,
    /// Sector panel status.
    pub sectors_status: PanelStatus,
    /// Companies panel status.
    pub companies_status: PanelStatus,
    /// Checklist panel status.
    pub checklist_status: PanelStatus,
    /// News panel status.
    pub news_status: PanelStatus,
    /// Active colour scheme.
    pub theme: Theme,
    /// Selection epochs.
    pub epochs: Epochs,
}

impl SelectionState {
    /// Reset the sector-dependent panels for a new sector selection.
    pub(crate) fn begin_sector(&mut self, sector: &str) -> (Ticket, Ticket) {
        let sector_ticket = self.epochs.bump(Lane::Sector);
        self.epochs.bump(Lane::Company);
        let news_ticket = self.epochs.bump(Lane::News);

        self.selected_sector = Some(sector.to_string());
        self.selected_company = None;
        self.companies_data.clear();
        self.companies_status = PanelStatus::Loading;
        self.checklist = None;
        self.checklist_status = PanelStatus::Placeholder;
        self.news_data.clear();
        self.news_query = None;
        self.news_status = PanelStatus::Placeholder;
        (sector_ticket, news_ticket)
    }

    /// Record a company selection and mark the checklist as loading.
    pub(crate) fn begin_company(&mut self, company: CompanyQuote) -> (Ticket, Ticket) {
        let company_ticket = self.epochs.bump(Lane::Company);
        let news_ticket = self.epochs.bump(Lane::News);
        self.selected_company = Some(company);
        self.checklist = None;
        self.checklist_status = PanelStatus::Loading;
        (company_ticket, news_ticket)
    }

    /// Record a news query and mark the news panel as loading.
    ///
    /// Existing articles stay in place until a newer search succeeds.
    pub(crate) fn begin_news(&mut self, query: &str) -> Ticket {
        let ticket = self.epochs.bump(Lane::News);
        self.news_query = Some(query.to_string());
        self.news_status = PanelStatus::Loading;
        ticket
    }
}
