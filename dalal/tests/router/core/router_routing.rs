use dalal::{Dalal, DalalError, SectorPerformance};
use tokio::time::Duration;

use crate::helpers::{MockConnector, article, quote};

#[tokio::test]
async fn first_capable_connector_serves_each_capability() {
    let news_only = MockConnector::builder()
        .name("news-only")
        .with_news_fn(|q, _| Ok(vec![article(&format!("from news-only: {q}"))]))
        .build();
    let full = MockConnector::builder()
        .name("full")
        .with_quote_fn(|s| Ok(Some(quote(s, 10.0, 0.0))))
        .with_news_fn(|_, _| Ok(vec![article("from full")]))
        .build();

    let dalal = Dalal::builder()
        .with_connector(news_only.clone())
        .with_connector(full.clone())
        .build()
        .unwrap();

    let q = dalal.quote("TCS.BSE").await.unwrap().unwrap();
    assert_eq!(q.symbol, "TCS.BSE");

    let news = dalal.news("Energy India stocks").await.unwrap();
    assert_eq!(news[0].title, "from news-only: Energy India stocks");
    assert!(full.calls.lock().unwrap().iter().all(|c| c.capability != "news"));
}

#[tokio::test]
async fn no_fallback_after_a_failing_connector() {
    let failing = MockConnector::builder()
        .name("failing")
        .with_quote_fn(|_| Err(DalalError::connector("failing", "Failed to fetch data for X")))
        .build();
    let healthy = MockConnector::builder()
        .name("healthy")
        .with_quote_fn(|s| Ok(Some(quote(s, 1.0, 0.0))))
        .build();

    let dalal = Dalal::builder()
        .with_connector(failing)
        .with_connector(healthy.clone())
        .build()
        .unwrap();

    let err = dalal.quote("X").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch data for X");
    assert!(healthy.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_capability_is_unsupported() {
    let c = MockConnector::builder()
        .with_sector_fn(|| Ok(vec![SectorPerformance::new("Energy", 1.0)]))
        .build();
    let dalal = Dalal::builder().with_connector(c).build().unwrap();

    let err = dalal.overview("TCS.BSE").await.unwrap_err();
    assert!(matches!(err, DalalError::Unsupported { ref capability } if capability == "overview"));
    assert_eq!(dalal.sector_performance().await.unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_provider_call_times_out() {
    let c = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(30))
        .with_news_fn(|_, _| Ok(vec![]))
        .build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_secs(15))
        .build()
        .unwrap();

    let err = dalal.news("anything").await.unwrap_err();
    assert!(matches!(
        err,
        DalalError::ProviderTimeout { ref connector, ref capability }
            if connector == "slow" && capability == "news"
    ));
}

#[tokio::test]
async fn news_uses_configured_page_size() {
    let c = MockConnector::builder()
        .with_news_fn(|_, n| Ok((0..n).map(|i| article(&format!("a{i}"))).collect()))
        .build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .news_page_size(3)
        .build()
        .unwrap();

    assert_eq!(dalal.news("q").await.unwrap().len(), 3);
    assert_eq!(dalal.news_page("q", 7).await.unwrap().len(), 7);
}
