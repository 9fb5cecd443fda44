use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dalal::{Dalal, DalalError, Dashboard, PanelStatus, SectorPerformance};
use tokio::time::Duration;

use crate::helpers::{
    Call, MockConnector, MockConnectorBuilder, article, catalog, quote, quote_args, sectors,
};

fn dashboard(c: Arc<MockConnector>) -> Dashboard {
    let dalal = Dalal::builder()
        .with_connector(c)
        .catalog(catalog())
        .build()
        .unwrap();
    Dashboard::new(Arc::new(dalal))
}

async fn loaded(c: Arc<MockConnector>) -> Dashboard {
    let d = dashboard(c);
    d.load_sector_data().await.unwrap();
    d
}

fn market() -> MockConnectorBuilder {
    MockConnector::builder()
        .with_sector_fn(|| Ok(sectors()))
        .with_quote_fn(|s| Ok(Some(quote(s, 100.0, 1.0))))
        .with_news_fn(|q, _| Ok(vec![article(&format!("news for {q}"))]))
}

fn selection_calls(calls: &[Call]) -> Vec<&'static str> {
    calls
        .iter()
        .map(|c| c.capability)
        .filter(|c| *c != "sector-performance")
        .collect()
}

#[tokio::test(start_paused = true)]
async fn selecting_a_sector_loads_companies_then_news() {
    let builder = market();
    let calls = builder.calls();
    let d = loaded(builder.build()).await;

    d.select_sector("Alpha").await.unwrap();

    let st = d.snapshot();
    assert_eq!(st.selected_sector.as_deref(), Some("Alpha"));
    let symbols: Vec<_> = st.companies_data.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["A1.BSE", "A2.BSE"]);
    assert_eq!(st.companies_status, PanelStatus::Ready);
    assert_eq!(st.news_query.as_deref(), Some("Alpha India stocks"));
    assert_eq!(st.news_data[0].title, "news for Alpha India stocks");

    let calls = calls.lock().unwrap().clone();
    assert_eq!(selection_calls(&calls), ["quote", "quote", "news"]);
}

#[tokio::test]
async fn selection_waits_for_sector_data() {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    let builder = market().with_sector_fn(move || {
        if h.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(DalalError::connector("mock", "Failed to fetch sector data"))
        } else {
            Ok(sectors())
        }
    });
    let calls = builder.calls();
    let d = dashboard(builder.build());

    d.load_sector_data().await.unwrap_err();
    let before = d.snapshot();
    assert!(before.sector_data.is_none());

    let err = d.select_sector("Alpha").await.unwrap_err();
    assert!(matches!(err, DalalError::SectorsNotLoaded));

    let st = d.snapshot();
    assert!(st.selected_sector.is_none());
    assert_eq!(st.epochs, before.epochs);
    assert_eq!(
        d.view().companies.error(),
        Some("Error loading companies: Sector data not loaded")
    );
    assert!(selection_calls(&calls.lock().unwrap()).is_empty());

    d.load_sector_data().await.unwrap();
    d.select_sector("Alpha").await.unwrap();
    assert_eq!(d.snapshot().companies_status, PanelStatus::Ready);
    assert_eq!(quote_args(&calls.lock().unwrap()), ["A1.BSE", "A2.BSE"]);
}

#[tokio::test]
async fn unmapped_sector_reports_without_network() {
    let builder = market();
    let calls = builder.calls();
    let d = loaded(builder.build()).await;

    let err = d.select_sector("Gold").await.unwrap_err();
    assert!(matches!(err, DalalError::UnmappedSector { .. }));

    let view = d.view();
    assert_eq!(
        view.companies.error(),
        Some("Error loading companies: No companies mapped for this sector")
    );
    assert!(selection_calls(&calls.lock().unwrap()).is_empty());
}

#[tokio::test(start_paused = true)]
async fn later_sector_selection_wins() {
    let builder = market().delay_for("A1.BSE", Duration::from_millis(500));
    let calls = builder.calls();
    let d = loaded(builder.build()).await;

    let (alpha, beta) = tokio::join!(d.select_sector("Alpha"), d.select_sector("Beta"));

    assert!(matches!(alpha, Err(DalalError::Superseded { .. })));
    beta.unwrap();

    let st = d.snapshot();
    assert_eq!(st.selected_sector.as_deref(), Some("Beta"));
    let symbols: Vec<_> = st.companies_data.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["B1.BSE"]);
    assert_eq!(st.news_query.as_deref(), Some("Beta India stocks"));
    assert_eq!(st.news_data.len(), 1);
    assert_eq!(st.news_data[0].title, "news for Beta India stocks");
    // the abandoned Alpha batch never reaches its second symbol
    assert_eq!(quote_args(&calls.lock().unwrap()), ["A1.BSE", "B1.BSE"]);
}

#[tokio::test(start_paused = true)]
async fn empty_batch_is_stored_and_explained() {
    let c = MockConnector::builder()
        .with_sector_fn(|| Ok(sectors()))
        .with_quote_fn(|_| Ok(None))
        .with_news_fn(|_, _| Ok(vec![]))
        .build();
    let d = loaded(c).await;

    d.select_sector("Alpha").await.unwrap();

    let st = d.snapshot();
    assert!(st.companies_data.is_empty());
    assert_eq!(st.companies_status, PanelStatus::Ready);
    let view = d.view();
    assert_eq!(
        view.companies,
        dalal::Panel::Placeholder("No company data available. This may be due to API limitations.")
    );
    assert_eq!(view.news, dalal::Panel::Placeholder("No recent news available"));
}

#[tokio::test]
async fn failed_sector_reload_keeps_previous_data() {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    let c = MockConnector::builder()
        .with_sector_fn(move || {
            if h.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(vec![
                    SectorPerformance::new("Alpha", 1.2),
                    SectorPerformance::new("Beta", -0.4),
                ])
            } else {
                Err(DalalError::rate_limited(
                    "mock",
                    "API rate limit reached. Please wait and try again.",
                ))
            }
        })
        .build();
    let d = dashboard(c);

    d.load_sector_data().await.unwrap();
    assert_eq!(d.snapshot().sector_data.as_ref().map(Vec::len), Some(2));

    let err = d.load_sector_data().await.unwrap_err();
    assert!(matches!(err, DalalError::RateLimited { .. }));

    let st = d.snapshot();
    assert_eq!(st.sector_data.as_ref().map(Vec::len), Some(2));
    assert_eq!(
        st.sectors_status,
        PanelStatus::Error("Error: API rate limit reached. Please wait and try again.".into())
    );
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn new_sector_clears_company_context() {
    let builder = market().with_overview_fn(|_| Ok(None));
    let calls = builder.calls();
    let d = loaded(builder.build()).await;

    d.select_sector("Alpha").await.unwrap();
    d.select_company("A1.BSE").await.unwrap();
    assert!(d.snapshot().checklist.is_some());

    d.select_sector("Beta").await.unwrap();
    let st = d.snapshot();
    assert!(st.selected_company.is_none());
    assert!(st.checklist.is_none());
    assert_eq!(st.checklist_status, PanelStatus::Placeholder);
    assert_eq!(
        quote_args(&calls.lock().unwrap()),
        ["A1.BSE", "A2.BSE", "B1.BSE"]
    );
}
