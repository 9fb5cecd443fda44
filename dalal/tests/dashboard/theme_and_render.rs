use std::sync::Arc;

use dalal::{
    Dalal, Dashboard, MemoryPreferences, Panel, PreferenceStore, RecordingRenderer,
    SectorPerformance, Theme,
};

use crate::helpers::{MockConnector, article};

fn dalal() -> Arc<Dalal> {
    let c = MockConnector::builder()
        .with_sector_fn(|| Ok(vec![SectorPerformance::new("Energy", 0.8)]))
        .build();
    Arc::new(Dalal::builder().with_connector(c).build().unwrap())
}

#[test]
fn theme_toggle_is_persisted() {
    let store = Arc::new(MemoryPreferences::new());

    let d = Dashboard::new(dalal()).with_preferences(store.clone());
    assert_eq!(d.snapshot().theme, Theme::Light);
    assert_eq!(d.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    let again = Dashboard::new(dalal()).with_preferences(store);
    assert_eq!(again.snapshot().theme, Theme::Dark);
    assert_eq!(again.view().theme, Theme::Dark);
}

#[test]
fn theme_toggle_without_store_stays_in_memory() {
    let d = Dashboard::new(dalal());
    assert_eq!(d.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(d.toggle_theme().unwrap(), Theme::Light);
}

#[tokio::test]
async fn renderer_sees_loading_then_ready() {
    let renderer = Arc::new(RecordingRenderer::new());
    let d = Dashboard::new(dalal()).with_renderer(renderer.clone());

    d.load_sector_data().await.unwrap();

    let views = renderer.views();
    assert_eq!(views.len(), 2);
    assert!(matches!(views[0].sectors, Panel::Loading(_)));
    let cards = views[1].sectors.ready().unwrap();
    assert_eq!(cards[0].name, "Energy");
    assert_eq!(cards[0].performance, "+0.80%");
    assert_eq!(renderer.last(), Some(d.view()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_searches_reach_the_renderer_in_state_order() {
    let c = MockConnector::builder()
        .with_news_fn(|q, _| Ok(vec![article(q)]))
        .build();
    let renderer = Arc::new(RecordingRenderer::new());
    let dalal = Arc::new(Dalal::builder().with_connector(c).build().unwrap());
    let d = Arc::new(Dashboard::new(dalal).with_renderer(renderer.clone()));

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let d = Arc::clone(&d);
            tokio::spawn(async move {
                let _ = d.load_news_for_query(&format!("query {i}")).await;
            })
        })
        .collect();
    for t in tasks {
        t.await.unwrap();
    }

    let last = renderer.last().unwrap();
    let view = d.view();
    assert_eq!(last.news, view.news);
    assert_eq!(last.can_refresh_news, view.can_refresh_news);
    assert!(view.news.ready().is_some());
}
