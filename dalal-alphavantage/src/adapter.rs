use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use dalal_core::DalalError;

/// Default Alpha Vantage endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

const CONNECTOR: &str = "dalal-alphavantage";

/// Raw `GLOBAL_QUOTE` body.
///
/// Alpha Vantage answers 200 for throttling and unknown symbols too; those come
/// back as `Note`, `Information` or `Error Message` with no `Global Quote`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalQuoteResponse {
    /// Numbered fields such as `"05. price"`, all string-typed.
    #[serde(rename = "Global Quote", default)]
    pub global_quote: Option<BTreeMap<String, String>>,
    /// Throttling notice.
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    /// Throttling or premium-endpoint notice.
    #[serde(rename = "Information", default)]
    pub information: Option<String>,
    /// Invalid call or unknown symbol.
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
}

/// Sector performance abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait AvSector: Send + Sync {
    /// Fetch the raw `SECTOR` object, key order preserved.
    async fn sector(&self) -> Result<Map<String, Value>, DalalError>;
}

/// Quote abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait AvQuotes: Send + Sync {
    /// Fetch the raw `GLOBAL_QUOTE` body for an exchange-less symbol.
    async fn global_quote(&self, symbol: &str) -> Result<GlobalQuoteResponse, DalalError>;
}

/// Fundamentals abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait AvOverview: Send + Sync {
    /// Fetch the raw `OVERVIEW` object for an exchange-less symbol.
    async fn overview(&self, symbol: &str) -> Result<Map<String, Value>, DalalError>;
}

/// Production adapter backed by `reqwest`.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RealAdapter {
    /// Build an adapter against `base_url` (no trailing `/query`).
    ///
    /// # Errors
    /// Returns `DalalError::Connector` when the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, DalalError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| DalalError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn query<T>(&self, params: &[(&str, &str)], failure: &str) -> Result<T, DalalError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| map_http_err(&e, failure))?;

        if !response.status().is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = %response.status(), "alpha vantage returned non-success status");
            return Err(DalalError::connector(CONNECTOR, failure));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DalalError::Data(format!("{failure}: {e}")))
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn map_http_err(e: &reqwest::Error, failure: &str) -> DalalError {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %e, "alpha vantage transport error");
    DalalError::connector(CONNECTOR, failure)
}

#[async_trait]
impl AvSector for RealAdapter {
    async fn sector(&self) -> Result<Map<String, Value>, DalalError> {
        self.query(&[("function", "SECTOR")], "Failed to fetch sector data")
            .await
    }
}

#[async_trait]
impl AvQuotes for RealAdapter {
    async fn global_quote(&self, symbol: &str) -> Result<GlobalQuoteResponse, DalalError> {
        self.query(
            &[("function", "GLOBAL_QUOTE"), ("symbol", symbol)],
            &format!("Failed to fetch data for {symbol}"),
        )
        .await
    }
}

#[async_trait]
impl AvOverview for RealAdapter {
    async fn overview(&self, symbol: &str) -> Result<Map<String, Value>, DalalError> {
        self.query(
            &[("function", "OVERVIEW"), ("symbol", symbol)],
            &format!("Failed to fetch overview for {symbol}"),
        )
        .await
    }
}

impl dyn AvSector {
    /// Build an `AvSector` from a closure. Useful in tests.
    pub fn from_fn<F>(f: F) -> Arc<dyn AvSector>
    where
        F: Send + Sync + 'static + Fn() -> Result<Map<String, Value>, DalalError>,
    {
        struct FnSector<F>(F);
        #[async_trait]
        impl<F> AvSector for FnSector<F>
        where
            F: Send + Sync + 'static + Fn() -> Result<Map<String, Value>, DalalError>,
        {
            async fn sector(&self) -> Result<Map<String, Value>, DalalError> {
                (self.0)()
            }
        }
        Arc::new(FnSector(f))
    }
}

impl dyn AvQuotes {
    /// Build an `AvQuotes` from a closure. Useful in tests.
    pub fn from_fn<F>(f: F) -> Arc<dyn AvQuotes>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<GlobalQuoteResponse, DalalError>,
    {
        struct FnQuotes<F>(F);
        #[async_trait]
        impl<F> AvQuotes for FnQuotes<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<GlobalQuoteResponse, DalalError>,
        {
            async fn global_quote(&self, symbol: &str) -> Result<GlobalQuoteResponse, DalalError> {
                (self.0)(symbol)
            }
        }
        Arc::new(FnQuotes(f))
    }
}

impl dyn AvOverview {
    /// Build an `AvOverview` from a closure. Useful in tests.
    pub fn from_fn<F>(f: F) -> Arc<dyn AvOverview>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<Map<String, Value>, DalalError>,
    {
        struct FnOverview<F>(F);
        #[async_trait]
        impl<F> AvOverview for FnOverview<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<Map<String, Value>, DalalError>,
        {
            async fn overview(&self, symbol: &str) -> Result<Map<String, Value>, DalalError> {
                (self.0)(symbol)
            }
        }
        Arc::new(FnOverview(f))
    }
}
