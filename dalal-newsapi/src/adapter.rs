use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use dalal_core::DalalError;

/// Default NewsAPI endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

pub(crate) const CONNECTOR: &str = "dalal-newsapi";
pub(crate) const FETCH_FAILED: &str = "Failed to fetch news";

/// Raw `/v2/everything` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverythingResponse {
    /// `"ok"` or `"error"`.
    #[serde(default)]
    pub status: String,
    /// Error description when `status` is `"error"`.
    #[serde(default)]
    pub message: Option<String>,
    /// Matching articles, newest first.
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// One article as NewsAPI sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Publisher block.
    #[serde(default)]
    pub source: RawSource,
    /// Headline; NewsAPI sends `null` for removed items.
    #[serde(default)]
    pub title: Option<String>,
    /// Lede.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical link.
    #[serde(default)]
    pub url: Option<String>,
    /// Lead image.
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// ISO-8601 publication time.
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Publisher block of a [`RawArticle`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    /// Publisher display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// News search abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Run an `everything` search for `query`, newest first, English only.
    async fn everything(&self, query: &str, page_size: u8)
    -> Result<EverythingResponse, DalalError>;
}

/// Production adapter backed by `reqwest`.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RealAdapter {
    /// Build an adapter against `base_url` (no trailing `/v2`).
    ///
    /// # Errors
    /// Returns `DalalError::Connector` when the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, DalalError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("dalal-newsapi/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DalalError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl NewsSearch for RealAdapter {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    async fn everything(
        &self,
        query: &str,
        page_size: u8,
    ) -> Result<EverythingResponse, DalalError> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "newsapi transport error");
                DalalError::connector(CONNECTOR, FETCH_FAILED)
            })?;

        if !response.status().is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = %response.status(), "newsapi returned non-success status");
            return Err(DalalError::connector(CONNECTOR, FETCH_FAILED));
        }

        response
            .json::<EverythingResponse>()
            .await
            .map_err(|e| DalalError::Data(format!("{FETCH_FAILED}: {e}")))
    }
}

impl dyn NewsSearch {
    /// Build a `NewsSearch` from a closure. Useful in tests.
    pub fn from_fn<F>(f: F) -> Arc<dyn NewsSearch>
    where
        F: Send + Sync + 'static + Fn(&str, u8) -> Result<EverythingResponse, DalalError>,
    {
        struct FnSearch<F>(F);
        #[async_trait]
        impl<F> NewsSearch for FnSearch<F>
        where
            F: Send + Sync + 'static + Fn(&str, u8) -> Result<EverythingResponse, DalalError>,
        {
            async fn everything(
                &self,
                query: &str,
                page_size: u8,
            ) -> Result<EverythingResponse, DalalError> {
                (self.0)(query, page_size)
            }
        }
        Arc::new(FnSearch(f))
    }
}
