use async_trait::async_trait;

use crate::DalalError;
pub use dalal_types::ConnectorKey;
use dalal_types::{CompanyOverview, CompanyQuote, NewsArticle, SectorPerformance};

/// Focused role trait for connectors that report sector performance.
#[async_trait]
pub trait SectorProvider: Send + Sync {
    /// Fetch the real-time performance of every sector the feed knows about.
    ///
    /// Order follows the feed. Transport and payload-shape failures are errors.
    async fn sector_performance(&self) -> Result<Vec<SectorPerformance>, DalalError>;
}

/// Focused role trait for connectors that provide quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch a point-in-time quote for a catalog symbol (e.g. `TCS.BSE`).
    ///
    /// `Ok(None)` means the upstream answered without usable data.
    async fn quote(&self, symbol: &str) -> Result<Option<CompanyQuote>, DalalError>;
}

/// Focused role trait for connectors that provide company fundamentals.
#[async_trait]
pub trait OverviewProvider: Send + Sync {
    /// Fetch a fundamentals overview for a catalog symbol.
    ///
    /// `Ok(None)` means the upstream answered with an error note or an empty object.
    async fn overview(&self, symbol: &str) -> Result<Option<CompanyOverview>, DalalError>;
}

/// Focused role trait for connectors that search news.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Search for the most recent articles matching a free-text query.
    async fn news(&self, query: &str, page_size: u8) -> Result<Vec<NewsArticle>, DalalError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait DalalConnector: Send + Sync {
    /// A stable identifier (e.g., "dalal-alphavantage", "dalal-newsapi").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise sector capability by returning a usable trait object reference when supported.
    fn as_sector_provider(&self) -> Option<&dyn SectorProvider> {
        None
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// If implemented, returns a trait object for company overviews.
    fn as_overview_provider(&self) -> Option<&dyn OverviewProvider> {
        None
    }

    /// If implemented, returns a trait object for news search.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}

/// Generate `as_*_provider` accessors for a wrapper that implements
/// `DalalConnector` by delegating to an inner field.
///
/// The wrapper advertises exactly the capabilities its inner connector advertises.
#[macro_export]
macro_rules! dalal_connector_accessors {
    ($inner:ident) => {
        fn as_sector_provider(&self) -> Option<&dyn $crate::connector::SectorProvider> {
            if self.$inner.as_sector_provider().is_some() {
                Some(self as &dyn $crate::connector::SectorProvider)
            } else {
                None
            }
        }
        fn as_quote_provider(&self) -> Option<&dyn $crate::connector::QuoteProvider> {
            if self.$inner.as_quote_provider().is_some() {
                Some(self as &dyn $crate::connector::QuoteProvider)
            } else {
                None
            }
        }
        fn as_overview_provider(&self) -> Option<&dyn $crate::connector::OverviewProvider> {
            if self.$inner.as_overview_provider().is_some() {
                Some(self as &dyn $crate::connector::OverviewProvider)
            } else {
                None
            }
        }
        fn as_news_provider(&self) -> Option<&dyn $crate::connector::NewsProvider> {
            if self.$inner.as_news_provider().is_some() {
                Some(self as &dyn $crate::connector::NewsProvider)
            } else {
                None
            }
        }
    };
}

/// Generate all provider trait impls for a wrapper type `$self_ty`, delegating
/// to an inner field `$inner` and running the wrapper's [`CallHooks`](crate::CallHooks).
#[macro_export]
macro_rules! dalal_delegate_provider_impls {
    ($self_ty:ty, $inner:ident) => {
        #[async_trait::async_trait]
        impl $crate::connector::SectorProvider for $self_ty {
            async fn sector_performance(
                &self,
            ) -> Result<Vec<$crate::SectorPerformance>, $crate::DalalError> {
                let ctx = $crate::CallContext::new($crate::Capability::SectorPerformance);
                <Self as $crate::CallHooks>::pre_call(self, &ctx).await?;
                let inner = self
                    .$inner
                    .as_sector_provider()
                    .ok_or_else(|| $crate::DalalError::unsupported("sector-performance"))?;
                inner
                    .sector_performance()
                    .await
                    .map_err(|e| <Self as $crate::CallHooks>::map_error(self, e, &ctx))
            }
        }

        #[async_trait::async_trait]
        impl $crate::connector::QuoteProvider for $self_ty {
            async fn quote(
                &self,
                symbol: &str,
            ) -> Result<Option<$crate::CompanyQuote>, $crate::DalalError> {
                let ctx = $crate::CallContext::new($crate::Capability::Quote);
                <Self as $crate::CallHooks>::pre_call(self, &ctx).await?;
                let inner = self
                    .$inner
                    .as_quote_provider()
                    .ok_or_else(|| $crate::DalalError::unsupported("quote"))?;
                inner
                    .quote(symbol)
                    .await
                    .map_err(|e| <Self as $crate::CallHooks>::map_error(self, e, &ctx))
            }
        }

        #[async_trait::async_trait]
        impl $crate::connector::OverviewProvider for $self_ty {
            async fn overview(
                &self,
                symbol: &str,
            ) -> Result<Option<$crate::CompanyOverview>, $crate::DalalError> {
                let ctx = $crate::CallContext::new($crate::Capability::Overview);
                <Self as $crate::CallHooks>::pre_call(self, &ctx).await?;
                let inner = self
                    .$inner
                    .as_overview_provider()
                    .ok_or_else(|| $crate::DalalError::unsupported("overview"))?;
                inner
                    .overview(symbol)
                    .await
                    .map_err(|e| <Self as $crate::CallHooks>::map_error(self, e, &ctx))
            }
        }

        #[async_trait::async_trait]
        impl $crate::connector::NewsProvider for $self_ty {
            async fn news(
                &self,
                query: &str,
                page_size: u8,
            ) -> Result<Vec<$crate::NewsArticle>, $crate::DalalError> {
                let ctx = $crate::CallContext::new($crate::Capability::News);
                <Self as $crate::CallHooks>::pre_call(self, &ctx).await?;
                let inner = self
                    .$inner
                    .as_news_provider()
                    .ok_or_else(|| $crate::DalalError::unsupported("news"))?;
                inner
                    .news(query, page_size)
                    .await
                    .map_err(|e| <Self as $crate::CallHooks>::map_error(self, e, &ctx))
            }
        }
    };
}

/// Validate a credential read from configuration or the environment.
///
/// Empty keys and the sample placeholder shipped in docs are rejected.
///
/// # Errors
/// Returns `DalalError::MissingApiKey` naming `connector`.
pub fn require_api_key(
    key: Option<&str>,
    placeholder: &str,
    connector: &str,
) -> Result<String, DalalError> {
    match key.map(str::trim) {
        Some(k) if !k.is_empty() && k != placeholder => Ok(k.to_string()),
        _ => Err(DalalError::MissingApiKey {
            connector: connector.to_string(),
        }),
    }
}
