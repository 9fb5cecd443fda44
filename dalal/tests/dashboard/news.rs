use std::sync::Arc;

use dalal::{Dalal, DalalError, Dashboard, PanelStatus};
use tokio::time::Duration;

use crate::helpers::{MockConnector, article, catalog, quote, sectors};

fn dashboard(c: Arc<MockConnector>) -> Dashboard {
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .provider_timeout(Duration::from_secs(15))
        .build()
        .unwrap();
    Dashboard::new(Arc::new(dalal))
}

#[tokio::test]
async fn news_failure_keeps_previous_articles() {
    let c = MockConnector::builder()
        .with_news_fn(|q, _| match q {
            "bad" => Err(DalalError::connector("mock", "Failed to fetch news")),
            _ => Ok(vec![article("Markets rally"), article("Rupee steady")]),
        })
        .build();
    let d = dashboard(c);

    d.load_news_for_query("good").await.unwrap();
    let err = d.load_news_for_query("bad").await.unwrap_err();
    assert!(matches!(err, DalalError::Connector { .. }));

    let st = d.snapshot();
    assert_eq!(st.news_data.len(), 2);
    assert_eq!(st.news_query.as_deref(), Some("bad"));
    assert_eq!(
        d.view().news.error(),
        Some("Error loading news: Failed to fetch news")
    );
}

#[tokio::test(start_paused = true)]
async fn slow_news_reports_a_timeout() {
    let c = MockConnector::builder()
        .name("slow-news")
        .delay(Duration::from_secs(20))
        .with_news_fn(|_, _| Ok(vec![]))
        .build();
    let d = dashboard(c);

    let err = d.load_news_for_query("Energy India stocks").await.unwrap_err();
    assert!(matches!(err, DalalError::ProviderTimeout { .. }));
    assert_eq!(
        d.snapshot().news_status,
        PanelStatus::Error("Error loading news: provider timed out: news via slow-news".into())
    );
}

#[tokio::test(start_paused = true)]
async fn refresh_prefers_company_then_sector() {
    let builder = MockConnector::builder()
        .with_sector_fn(|| Ok(sectors()))
        .with_quote_fn(|s| Ok(Some(quote(s, 10.0, 0.0))))
        .with_overview_fn(|_| Ok(None))
        .with_news_fn(|_, _| Ok(vec![]));
    let calls = builder.calls();
    let d = dashboard(builder.build());

    d.refresh_news().await.unwrap();
    assert!(calls.lock().unwrap().is_empty());

    d.load_sector_data().await.unwrap();
    d.select_sector("Beta").await.unwrap();
    d.refresh_news().await.unwrap();
    d.select_company("B1.BSE").await.unwrap();
    d.refresh_news().await.unwrap();

    let queries: Vec<_> = calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| c.capability == "news")
        .map(|c| c.arg.clone())
        .collect();
    assert_eq!(
        queries,
        [
            "Beta India stocks",
            "Beta India stocks",
            "B1.BSE Ltd stock India",
            "B1.BSE Ltd stock India",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn newer_search_discards_older_one() {
    let c = MockConnector::builder()
        .delay_for("slow", Duration::from_secs(2))
        .with_news_fn(|q, _| Ok(vec![article(q)]))
        .build();
    let d = dashboard(c);

    let (slow, fast) = tokio::join!(d.load_news_for_query("slow"), d.load_news_for_query("fast"));
    assert!(matches!(slow, Err(DalalError::Superseded { .. })));
    fast.unwrap();

    let st = d.snapshot();
    assert_eq!(st.news_query.as_deref(), Some("fast"));
    assert_eq!(st.news_data[0].title, "fast");
    assert_eq!(st.news_status, PanelStatus::Ready);
}

#[tokio::test]
async fn query_is_passed_through_unchanged() {
    let builder = MockConnector::builder().with_news_fn(|_, _| Ok(vec![]));
    let calls = builder.calls();
    let d = dashboard(builder.build());

    d.load_news_for_query("  HDFC  bank results ").await.unwrap();
    assert_eq!(calls.lock().unwrap()[0].arg, "  HDFC  bank results ");
}
