use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dalal::{Dalal, DalalError, FetchStrategy};
use tokio::time::{Duration, Instant};

use crate::helpers::{MockConnector, catalog, quote, quote_args};

#[tokio::test(start_paused = true)]
async fn concurrent_batch_keeps_catalog_order() {
    let builder = MockConnector::builder()
        .delay_for("S1.BSE", Duration::from_millis(300))
        .delay_for("S2.BSE", Duration::from_millis(100))
        .delay_for("S3.BSE", Duration::from_millis(50))
        .with_quote_fn(|s| Ok(Some(quote(s, 1.0, 0.0))));
    let calls = builder.calls();
    let dalal = Dalal::builder()
        .with_connector(builder.build())
        .catalog(catalog())
        .fetch_strategy(FetchStrategy::Concurrent)
        .max_concurrency(2)
        .build()
        .unwrap();

    let start = Instant::now();
    let report = dalal.companies_for_sector("Big").await.unwrap();

    let symbols: Vec<_> = report.companies.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["S1.BSE", "S2.BSE", "S3.BSE", "S4.BSE", "S5.BSE"]);

    let calls = calls.lock().unwrap().clone();
    let at_start = calls.iter().filter(|c| c.at == start).count();
    assert_eq!(at_start, 2, "only max_concurrency calls may start together");
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn zero_concurrency_behaves_like_one() {
    let c = MockConnector::builder()
        .delay(Duration::from_millis(10))
        .with_quote_fn(|s| Ok(Some(quote(s, 1.0, 0.0))))
        .build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .fetch_strategy(FetchStrategy::Concurrent)
        .max_concurrency(0)
        .build()
        .unwrap();

    let start = Instant::now();
    let report = dalal.companies_for_sector("Alpha").await.unwrap();
    assert_eq!(report.companies.len(), 2);
    assert_eq!(start.elapsed(), Duration::from_millis(20));
}

#[tokio::test(start_paused = true)]
async fn abandoned_concurrent_batch_starts_no_new_calls() {
    let wanted = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&wanted);
    let builder = MockConnector::builder()
        .delay_for("S1.BSE", Duration::from_millis(300))
        .with_quote_fn(move |s| {
            if s == "S2.BSE" {
                flag.store(false, Ordering::SeqCst);
            }
            Ok(Some(quote(s, 1.0, 0.0)))
        });
    let calls = builder.calls();
    let dalal = Dalal::builder()
        .with_connector(builder.build())
        .catalog(catalog())
        .fetch_strategy(FetchStrategy::Concurrent)
        .max_concurrency(2)
        .build()
        .unwrap();

    let err = dalal
        .companies_for_sector_while("Big", &|| wanted.load(Ordering::SeqCst))
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::Superseded { .. }));
    assert_eq!(quote_args(&calls.lock().unwrap()), ["S1.BSE", "S2.BSE"]);
}
