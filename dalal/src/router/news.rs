use dalal_core::{Capability, DalalError, NewsArticle};

use crate::Dalal;
use crate::dalal_router_method;

impl Dalal {
    dalal_router_method! {
        /// Search news with an explicit page size.
        method: news_page(query: &str, page_size: u8) -> Vec<NewsArticle>,
        accessor: as_news_provider,
        capability: Capability::News,
        call: news(query, page_size)
    }

    /// Search news for a free-text query using the configured page size.
    ///
    /// The query is passed through unchanged. Each article carries a sentiment
    /// computed from its title and description.
    ///
    /// # Errors
    /// Same as [`news_page`](Self::news_page).
    pub async fn news(&self, query: &str) -> Result<Vec<NewsArticle>, DalalError> {
        self.news_page(query, self.cfg.news_page_size).await
    }
}
