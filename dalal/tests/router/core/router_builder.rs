use dalal::{Dalal, DalalError, FetchStrategy};
use tokio::time::Duration;

use crate::helpers::MockConnector;

#[test]
fn build_without_connectors_is_rejected() {
    let err = Dalal::builder().build().err().unwrap();
    assert!(matches!(err, DalalError::InvalidArg(_)));
}

#[test]
fn zero_news_page_size_is_rejected() {
    let c = MockConnector::builder().build();
    let err = Dalal::builder()
        .with_connector(c)
        .news_page_size(0)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, DalalError::InvalidArg(msg) if msg.contains("news_page_size")));
}

#[test]
fn builder_settings_reach_config() {
    let c = MockConnector::builder().build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .fetch_strategy(FetchStrategy::Concurrent)
        .request_interval(Duration::from_millis(250))
        .max_concurrency(3)
        .max_companies_per_sector(2)
        .without_provider_timeout()
        .news_page_size(4)
        .enrich_with_overview(false)
        .build()
        .unwrap();

    let cfg = dalal.config();
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Concurrent);
    assert_eq!(cfg.request_interval, Duration::from_millis(250));
    assert_eq!(cfg.max_concurrency, 3);
    assert_eq!(cfg.max_companies_per_sector, 2);
    assert_eq!(cfg.provider_timeout, None);
    assert_eq!(cfg.news_page_size, 4);
    assert!(!cfg.enrich_with_overview);
    assert_eq!(dalal.connectors().len(), 1);
}

#[test]
fn defaults_match_free_tier_pacing() {
    let c = MockConnector::builder().build();
    let dalal = Dalal::builder().with_connector(c).build().unwrap();
    let cfg = dalal.config();
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Paced);
    assert_eq!(cfg.request_interval, Duration::from_secs(1));
    assert_eq!(cfg.max_companies_per_sector, 5);
    assert_eq!(cfg.provider_timeout, Some(Duration::from_secs(15)));
    assert_eq!(cfg.news_page_size, 10);
    assert!(
        !dalal
            .catalog()
            .symbols_for_sector("Information Technology")
            .is_empty()
    );
}
