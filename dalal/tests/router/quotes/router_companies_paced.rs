use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dalal::{Dalal, DalalError};
use tokio::time::{Duration, Instant};

use crate::helpers::{MockConnector, catalog, quote, quote_args};

#[tokio::test(start_paused = true)]
async fn sector_queries_first_five_symbols_one_second_apart() {
    let builder = MockConnector::builder().with_quote_fn(|s| Ok(Some(quote(s, 100.0, 1.0))));
    let calls = builder.calls();
    let dalal = Dalal::builder()
        .with_connector(builder.build())
        .catalog(catalog())
        .build()
        .unwrap();

    let start = Instant::now();
    let report = dalal.companies_for_sector("Big").await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_secs(4));

    let calls = calls.lock().unwrap().clone();
    assert_eq!(
        quote_args(&calls),
        ["S1.BSE", "S2.BSE", "S3.BSE", "S4.BSE", "S5.BSE"]
    );
    for (i, c) in calls.iter().enumerate() {
        assert_eq!(c.at - start, Duration::from_secs(i as u64));
    }
    assert_eq!(report.requested.len(), 5);
    assert_eq!(report.companies.len(), 5);
    assert_eq!(report.skipped(), 0);
}

#[tokio::test(start_paused = true)]
async fn no_data_symbols_are_skipped_in_order() {
    let c = MockConnector::builder()
        .with_quote_fn(|s| match s {
            "S2.BSE" | "S4.BSE" => Ok(None),
            _ => Ok(Some(quote(s, 50.0, -1.0))),
        })
        .build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .build()
        .unwrap();

    let report = dalal.companies_for_sector("Big").await.unwrap();
    let symbols: Vec<_> = report.companies.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["S1.BSE", "S3.BSE", "S5.BSE"]);
    assert_eq!(report.skipped(), 2);
    assert!(
        report
            .warnings
            .iter()
            .all(|w| matches!(w, DalalError::NotFound { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn transport_errors_and_timeouts_do_not_abort_the_batch() {
    let c = MockConnector::builder()
        .name("flaky")
        .delay_for("S3.BSE", Duration::from_secs(60))
        .with_quote_fn(|s| match s {
            "S1.BSE" => Err(DalalError::connector("flaky", "Failed to fetch data for S1")),
            _ => Ok(Some(quote(s, 10.0, 0.0))),
        })
        .build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .provider_timeout(Duration::from_secs(15))
        .build()
        .unwrap();

    let start = Instant::now();
    let report = dalal.companies_for_sector("Big").await.unwrap();
    // four one-second gaps plus the 15 s timeout on S3
    assert_eq!(start.elapsed(), Duration::from_secs(19));

    let symbols: Vec<_> = report.companies.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["S2.BSE", "S4.BSE", "S5.BSE"]);
    assert!(matches!(report.warnings[0], DalalError::Connector { .. }));
    assert!(matches!(report.warnings[1], DalalError::ProviderTimeout { .. }));
}

#[tokio::test]
async fn unmapped_sector_fails_without_calls() {
    let builder = MockConnector::builder().with_quote_fn(|s| Ok(Some(quote(s, 1.0, 0.0))));
    let calls = builder.calls();
    let dalal = Dalal::builder()
        .with_connector(builder.build())
        .catalog(catalog())
        .build()
        .unwrap();

    let err = dalal.companies_for_sector("Gold").await.unwrap_err();
    assert_eq!(err.to_string(), "No companies mapped for this sector");
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn every_symbol_missing_yields_an_empty_report() {
    let c = MockConnector::builder().with_quote_fn(|_| Ok(None)).build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .build()
        .unwrap();

    let report = dalal.companies_for_sector("Alpha").await.unwrap();
    assert!(report.companies.is_empty());
    assert_eq!(report.skipped(), 2);
}

#[tokio::test(start_paused = true)]
async fn abandoned_batch_stops_between_symbols() {
    let wanted = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&wanted);
    let builder = MockConnector::builder().with_quote_fn(move |s| {
        flag.store(false, Ordering::SeqCst);
        Ok(Some(quote(s, 100.0, 1.0)))
    });
    let calls = builder.calls();
    let dalal = Dalal::builder()
        .with_connector(builder.build())
        .catalog(catalog())
        .build()
        .unwrap();

    let start = Instant::now();
    let err = dalal
        .companies_for_sector_while("Big", &|| wanted.load(Ordering::SeqCst))
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::Superseded { .. }));
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(quote_args(&calls.lock().unwrap()), ["S1.BSE"]);
}

#[tokio::test(start_paused = true)]
async fn batch_that_stays_wanted_matches_the_plain_call() {
    let c = MockConnector::builder()
        .with_quote_fn(|s| Ok(Some(quote(s, 100.0, 1.0))))
        .build();
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .build()
        .unwrap();

    let symbols = vec!["A1.BSE".to_string(), "A2.BSE".to_string()];
    let report = dalal.companies_while(&symbols, &|| true).await.unwrap();
    assert_eq!(report, dalal.companies(&symbols).await);
}
