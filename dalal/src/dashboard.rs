//! Selection-driven fetch pipelines over a [`Dalal`] orchestrator.
//!
//! The dashboard is the only place [`SelectionState`] changes. Each handler
//! captures an epoch ticket when it starts and applies results only while that
//! ticket is still current, so a quick second selection wins over a slow first.
//! The state lock is never held across an await. Views are rendered while it is
//! held, so a renderer sees them in the order the state changed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use dalal_core::{Checklist, DalalError, Theme};

use crate::Dalal;
use crate::prefs::{PreferenceStore, ThemePreference};
use crate::render::{NullRenderer, Renderer};
use crate::state::{PanelStatus, SelectionState, Ticket};
use crate::view::DashboardView;

const SECTORS_ERROR: &str = "Error: ";
const COMPANIES_ERROR: &str = "Error loading companies: ";
const METRICS_ERROR: &str = "Error loading metrics: ";
const NEWS_ERROR: &str = "Error loading news: ";

/// News query used for a sector selection.
#[must_use]
pub fn sector_news_query(sector: &str) -> String {
    format!("{sector} India stocks")
}

/// News query used for a company selection.
#[must_use]
pub fn company_news_query(company_name: &str) -> String {
    format!("{company_name} stock India")
}

/// Stateful front end: owns the selection, drives fetches, feeds the renderer.
pub struct Dashboard {
    dalal: Arc<Dalal>,
    state: Mutex<SelectionState>,
    renderer: Arc<dyn Renderer>,
    theme_pref: Option<ThemePreference>,
}

impl Dashboard {
    /// Dashboard with an empty selection and no renderer.
    pub fn new(dalal: Arc<Dalal>) -> Self {
        Self {
            dalal,
            state: Mutex::new(SelectionState::default()),
            renderer: Arc::new(NullRenderer),
            theme_pref: None,
        }
    }

    /// Push views to `renderer` after every state change.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Read the saved theme from `store` now and write it back on every toggle.
    #[must_use]
    pub fn with_preferences(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        let pref = ThemePreference::new(store);
        self.lock().theme = pref.load();
        self.theme_pref = Some(pref);
        self
    }

    /// Underlying orchestrator.
    #[must_use]
    pub fn dalal(&self) -> &Dalal {
        &self.dalal
    }

    fn lock(&self) -> MutexGuard<'_, SelectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current selection state.
    #[must_use]
    pub fn snapshot(&self) -> SelectionState {
        self.lock().clone()
    }

    /// View of the current selection state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(&self.lock(), Utc::now())
    }

    /// Mutate the state and render the result under the same lock.
    fn update<R>(&self, f: impl FnOnce(&mut SelectionState) -> R) -> R {
        let mut st = self.lock();
        let out = f(&mut st);
        self.renderer.render(&DashboardView::from_state(&st, Utc::now()));
        out
    }

    /// Like [`update`](Self::update), but only while `ticket` is current.
    fn apply<R>(
        &self,
        ticket: Ticket,
        what: &str,
        f: impl FnOnce(&mut SelectionState) -> R,
    ) -> Result<R, DalalError> {
        let mut st = self.lock();
        if !st.epochs.is_current(ticket) {
            return Err(DalalError::superseded(what));
        }
        let out = f(&mut st);
        self.renderer.render(&DashboardView::from_state(&st, Utc::now()));
        Ok(out)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.lock().epochs.is_current(ticket)
    }

    /// Log a handler outcome by failure class and hand it back unchanged.
    ///
    /// Superseded pipelines, missing capabilities and no-data outcomes go to
    /// `debug`; anything a user could act on goes to `warn`.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn finish(stage: &'static str, result: Result<(), DalalError>) -> Result<(), DalalError> {
        #[cfg(feature = "tracing")]
        if let Err(e) = &result {
            if e.is_actionable() {
                tracing::warn!(
                    target: "dalal::dashboard",
                    stage,
                    class = ?e.class(),
                    error = %e,
                    "stage failed"
                );
            } else {
                tracing::debug!(
                    target: "dalal::dashboard",
                    stage,
                    class = ?e.class(),
                    error = %e,
                    "stage dropped"
                );
            }
        }
        result
    }

    /// Load (or reload) sector performance.
    ///
    /// On failure the panel shows `"Error: <reason>"` and any previously loaded
    /// sectors stay in the state. Calling this again is the manual retry; until
    /// one succeeds no sector can be selected.
    ///
    /// # Errors
    /// The provider error.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::dashboard", skip(self)))]
    pub async fn load_sector_data(&self) -> Result<(), DalalError> {
        self.update(|st| st.sectors_status = PanelStatus::Loading);
        let result = match self.dalal.sector_performance().await {
            Ok(sectors) => {
                #[cfg(feature = "tracing")]
                tracing::info!(count = sectors.len(), "sector data loaded");
                self.update(|st| {
                    st.sector_data = Some(sectors);
                    st.sectors_status = PanelStatus::Ready;
                });
                Ok(())
            }
            Err(e) => {
                self.update(|st| st.sectors_status = PanelStatus::Error(format!("{SECTORS_ERROR}{e}")));
                Err(e)
            }
        };
        Self::finish("sectors", result)
    }

    /// Select a sector: fetch its companies, then sector news.
    ///
    /// Refused with "Sector data not loaded" while no sector performance has
    /// loaded; nothing else changes and no provider is called. Otherwise the
    /// company, checklist and news panels are cleared first. An unmapped sector
    /// fails immediately with "No companies mapped for this sector". Companies
    /// with no data are skipped, and an empty batch is still stored.
    ///
    /// # Errors
    /// - `SectorsNotLoaded` before a successful [`load_sector_data`](Self::load_sector_data).
    /// - `UnmappedSector` for a sector without catalog symbols.
    /// - `Superseded` when a newer selection replaced this one mid-flight.
    /// - The news provider error when the news stage fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::dashboard", skip(self)))]
    pub async fn select_sector(&self, sector: &str) -> Result<(), DalalError> {
        let started = self.update(|st| {
            if st.sector_data.is_none() {
                let e = DalalError::SectorsNotLoaded;
                st.companies_status = PanelStatus::Error(format!("{COMPANIES_ERROR}{e}"));
                Err(e)
            } else {
                Ok(st.begin_sector(sector))
            }
        });
        let result = match started {
            Ok((sector_ticket, news_ticket)) => {
                self.sector_pipeline(sector, sector_ticket, news_ticket).await
            }
            Err(e) => Err(e),
        };
        Self::finish("sector", result)
    }

    async fn sector_pipeline(
        &self,
        sector: &str,
        sector_ticket: Ticket,
        news_ticket: Ticket,
    ) -> Result<(), DalalError> {
        let wanted = || self.is_current(sector_ticket);
        let report = match self.dalal.companies_for_sector_while(sector, &wanted).await {
            Ok(r) => r,
            Err(e) => {
                self.apply(sector_ticket, "companies", |st| {
                    st.companies_status = PanelStatus::Error(format!("{COMPANIES_ERROR}{e}"));
                })?;
                return Err(e);
            }
        };

        #[cfg(feature = "tracing")]
        for w in &report.warnings {
            tracing::debug!(warning = %w, class = ?w.class(), "company skipped");
        }
        self.apply(sector_ticket, "companies", |st| {
            st.companies_data = report.companies;
            st.companies_status = PanelStatus::Ready;
        })?;

        let query = sector_news_query(sector);
        self.apply(news_ticket, "news", |st| {
            st.news_query = Some(query.clone());
            st.news_status = PanelStatus::Loading;
        })?;
        self.fetch_news(&query, news_ticket).await
    }

    /// Select one of the loaded companies: build its checklist, then company news.
    ///
    /// The checklist comes from the already-fetched quote, enriched by an overview
    /// fetch when enabled. Overview failures are logged and ignored.
    ///
    /// # Errors
    /// - `InvalidArg` when `symbol` is not among the loaded companies.
    /// - `Superseded` when a newer selection replaced this one mid-flight.
    /// - The news provider error when the news stage fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::dashboard", skip(self)))]
    pub async fn select_company(&self, symbol: &str) -> Result<(), DalalError> {
        let result = self.company_pipeline(symbol).await;
        Self::finish("company", result)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    async fn company_pipeline(&self, symbol: &str) -> Result<(), DalalError> {
        let (company, (company_ticket, news_ticket)) = self.update(|st| {
            match st.companies_data.iter().find(|c| c.symbol == symbol).cloned() {
                Some(c) => {
                    let tickets = st.begin_company(c.clone());
                    Ok((c, tickets))
                }
                None => {
                    let e = DalalError::InvalidArg(format!("unknown company: {symbol}"));
                    st.checklist_status = PanelStatus::Error(format!("{METRICS_ERROR}{e}"));
                    Err(e)
                }
            }
        })?;

        let overview = if self.dalal.config().enrich_with_overview {
            match self.dalal.overview(&company.symbol).await {
                Ok(o) => o,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %e, class = ?e.class(), "overview unavailable; using quote fields");
                    None
                }
            }
        } else {
            None
        };

        let checklist = Checklist::evaluate(&company, overview.as_ref());
        self.apply(company_ticket, "checklist", |st| {
            st.checklist = Some(checklist);
            st.checklist_status = PanelStatus::Ready;
        })?;

        let query = company_news_query(&company.name);
        self.apply(news_ticket, "news", |st| {
            st.news_query = Some(query.clone());
            st.news_status = PanelStatus::Loading;
        })?;
        self.fetch_news(&query, news_ticket).await
    }

    /// Run a news search for `query` as typed.
    ///
    /// On failure the panel shows `"Error loading news: <reason>"` and the
    /// previously shown articles stay.
    ///
    /// # Errors
    /// The provider error, or `Superseded` when a newer search started meanwhile.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::dashboard", skip(self)))]
    pub async fn load_news_for_query(&self, query: &str) -> Result<(), DalalError> {
        let ticket = self.update(|st| st.begin_news(query));
        let result = self.fetch_news(query, ticket).await;
        Self::finish("news", result)
    }

    /// Re-run news for the selected company, else the selected sector, else do nothing.
    ///
    /// # Errors
    /// Same as [`load_news_for_query`](Self::load_news_for_query).
    pub async fn refresh_news(&self) -> Result<(), DalalError> {
        let query = {
            let st = self.lock();
            st.selected_company
                .as_ref()
                .map(|c| company_news_query(&c.name))
                .or_else(|| st.selected_sector.as_deref().map(sector_news_query))
        };
        match query {
            Some(q) => self.load_news_for_query(&q).await,
            None => Ok(()),
        }
    }

    /// Flip the theme and persist it when a preference store is attached.
    ///
    /// # Errors
    /// Store write failures; the in-memory theme is left unchanged in that case.
    pub fn toggle_theme(&self) -> Result<Theme, DalalError> {
        let current = self.lock().theme;
        let next = match &self.theme_pref {
            Some(pref) => pref.toggle(current)?,
            None => current.toggled(),
        };
        self.update(|st| st.theme = next);
        Ok(next)
    }

    async fn fetch_news(&self, query: &str, ticket: Ticket) -> Result<(), DalalError> {
        match self.dalal.news(query).await {
            Ok(articles) => {
                #[cfg(feature = "tracing")]
                let count = articles.len();
                self.apply(ticket, "news", |st| {
                    st.news_data = articles;
                    st.news_status = PanelStatus::Ready;
                })?;
                #[cfg(feature = "tracing")]
                tracing::info!(query, count, "news loaded");
                Ok(())
            }
            Err(e) => {
                self.apply(ticket, "news", |st| {
                    st.news_status = PanelStatus::Error(format!("{NEWS_ERROR}{e}"));
                })?;
                Err(e)
            }
        }
    }
}
