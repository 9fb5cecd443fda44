//! Pure mapping from NewsAPI bodies to [`NewsArticle`]s.

use dalal_core::sentiment::classify_article;
use dalal_core::{DalalError, NewsArticle};

use crate::adapter::{CONNECTOR, EverythingResponse, FETCH_FAILED, RawArticle};

/// Map a search body into articles, in feed order.
///
/// # Errors
/// `Connector` with the body's `message` (or a generic text) when `status` is not `"ok"`.
pub fn articles(body: EverythingResponse) -> Result<Vec<NewsArticle>, DalalError> {
    if body.status != "ok" {
        let msg = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FETCH_FAILED.to_string());
        return Err(DalalError::connector(CONNECTOR, msg));
    }
    Ok(body.articles.into_iter().map(article).collect())
}

/// Map one article, scoring sentiment over title and description.
#[must_use]
pub fn article(raw: RawArticle) -> NewsArticle {
    let title = raw.title.unwrap_or_default();
    let sentiment = classify_article(&title, raw.description.as_deref());
    NewsArticle {
        title,
        description: raw.description,
        url: raw.url.unwrap_or_default(),
        source: raw.source.name.unwrap_or_default(),
        published_at: raw.published_at.unwrap_or_default(),
        image_url: raw.url_to_image,
        sentiment,
    }
}
