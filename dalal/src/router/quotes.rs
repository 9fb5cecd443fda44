use dalal_core::{Capability, CompaniesReport, CompanyQuote, DalalError, FetchStrategy};
use futures::stream::{self, StreamExt};

use crate::Dalal;
use crate::dalal_router_method;

impl Dalal {
    dalal_router_method! {
        /// Fetch a point-in-time quote for a catalog symbol (e.g. `TCS.BSE`).
        ///
        /// Failures propagate. Batch callers want [`quote_or_none`](Self::quote_or_none).
        method: quote(symbol: &str) -> Option<CompanyQuote>,
        accessor: as_quote_provider,
        capability: Capability::Quote,
        call: quote(symbol)
    }

    /// Quote entry point used by multi-symbol loops: any failure becomes `None`.
    ///
    /// Transport errors and timeouts are logged at `warn` and swallowed so the
    /// surrounding loop keeps going.
    pub async fn quote_or_none(&self, symbol: &str) -> Option<CompanyQuote> {
        self.quote_outcome(symbol).await.ok()
    }

    async fn quote_outcome(&self, symbol: &str) -> Result<CompanyQuote, DalalError> {
        match self.quote(symbol).await {
            Ok(Some(q)) => Ok(q),
            Ok(None) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(symbol, "no data available");
                Err(DalalError::not_found(format!("quote for {symbol}")))
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(symbol, error = %e, "quote failed; treating as no data");
                Err(e)
            }
        }
    }

    /// Fetch quotes for `symbols`, keeping request order and dropping no-data entries.
    ///
    /// Behavior:
    /// - `Paced`: strictly sequential, sleeping `request_interval` between consecutive
    ///   calls and never after the last one.
    /// - `Concurrent`: at most `max_concurrency` calls in flight; output order still
    ///   matches `symbols`.
    /// - A symbol that fails or has no data leaves one entry in `warnings`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "dalal::router", skip(self), fields(count = symbols.len()))
    )]
    pub async fn companies(&self, symbols: &[String]) -> CompaniesReport {
        self.companies_while(symbols, &|| true)
            .await
            .unwrap_or_default()
    }

    /// Like [`companies`](Self::companies), but gives up as soon as `wanted`
    /// returns false.
    ///
    /// `wanted` is checked before every upstream call and before every pacing
    /// sleep, so an abandoned batch stops spending quota between symbols.
    /// Returns `None` when the batch was abandoned.
    pub async fn companies_while<F>(
        &self,
        symbols: &[String],
        wanted: &F,
    ) -> Option<CompaniesReport>
    where
        F: Fn() -> bool + Sync,
    {
        type Outcome = Option<Result<CompanyQuote, DalalError>>;
        let outcomes: Vec<Outcome> = match self.cfg.fetch_strategy {
            FetchStrategy::Concurrent => {
                let limit = self.cfg.max_concurrency.max(1);
                stream::iter(symbols.iter().map(move |s| async move {
                    if wanted() {
                        Some(self.quote_outcome(s).await)
                    } else {
                        None
                    }
                }))
                .buffered(limit)
                .collect()
                .await
            }
            _ => {
                let mut out = Vec::with_capacity(symbols.len());
                for (i, symbol) in symbols.iter().enumerate() {
                    if i > 0 {
                        if !wanted() {
                            break;
                        }
                        tokio::time::sleep(self.cfg.request_interval).await;
                    }
                    if !wanted() {
                        break;
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(symbol = %symbol, index = i, "fetching quote");
                    out.push(Some(self.quote_outcome(symbol).await));
                }
                out
            }
        };

        if outcomes.len() < symbols.len() || outcomes.iter().any(Option::is_none) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                done = outcomes.iter().flatten().count(),
                requested = symbols.len(),
                "quote batch abandoned"
            );
            return None;
        }

        let mut report = CompaniesReport {
            requested: symbols.to_vec(),
            ..CompaniesReport::default()
        };
        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                Ok(q) => report.companies.push(q),
                Err(e) => report.warnings.push(e),
            }
        }
        Some(report)
    }

    /// Resolve a sector through the catalog and fetch its first companies.
    ///
    /// # Errors
    /// Returns `UnmappedSector` when the catalog has no symbols for `sector`. Per-symbol
    /// failures never fail the call; they end up in the report's `warnings`.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::router", skip(self)))]
    pub async fn companies_for_sector(&self, sector: &str) -> Result<CompaniesReport, DalalError> {
        self.companies_for_sector_while(sector, &|| true).await
    }

    /// Like [`companies_for_sector`](Self::companies_for_sector), stopping between
    /// symbols once `wanted` returns false.
    ///
    /// # Errors
    /// `UnmappedSector` as above, or `Superseded` when the batch was abandoned.
    pub async fn companies_for_sector_while<F>(
        &self,
        sector: &str,
        wanted: &F,
    ) -> Result<CompaniesReport, DalalError>
    where
        F: Fn() -> bool + Sync,
    {
        let symbols = self.catalog.symbols_for_sector(sector);
        if symbols.is_empty() {
            return Err(DalalError::UnmappedSector {
                sector: sector.to_string(),
            });
        }
        let take = self.cfg.max_companies_per_sector.min(symbols.len());
        let report = self
            .companies_while(&symbols[..take], wanted)
            .await
            .ok_or_else(|| DalalError::superseded(format!("companies for {sector}")))?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            sector,
            fetched = report.companies.len(),
            skipped = report.skipped(),
            "companies loaded"
        );
        Ok(report)
    }
}
