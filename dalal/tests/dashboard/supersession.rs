use std::sync::Arc;

use dalal::{Dalal, DalalError, Dashboard, PanelStatus};
use dalal_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};
use tokio::time::{Duration, Instant};

use crate::helpers::{article, catalog, quote, sectors};

async fn hanging_market() -> (Dashboard, DynamicMockController) {
    let (connector, controller) = DynamicMockConnector::new_with_controller("dynamic");
    controller
        .set_sector_behavior(MockBehavior::Return(sectors()))
        .await;
    let dalal = Dalal::builder()
        .with_connector(connector)
        .catalog(catalog())
        .provider_timeout(Duration::from_secs(15))
        .build()
        .unwrap();
    (Dashboard::new(Arc::new(dalal)), controller)
}

#[tokio::test(start_paused = true)]
async fn hanging_sector_batch_is_overtaken() {
    let (d, controller) = hanging_market().await;
    controller.set_quote_behavior("A1.BSE", MockBehavior::Hang).await;
    controller
        .set_quote_behavior("B1.BSE", MockBehavior::Return(Some(quote("B1.BSE", 42.0, 0.5))))
        .await;
    d.load_sector_data().await.unwrap();

    let start = Instant::now();
    let (alpha, beta) = tokio::join!(d.select_sector("Alpha"), d.select_sector("Beta"));
    assert!(matches!(alpha, Err(DalalError::Superseded { .. })));
    beta.unwrap();
    assert_eq!(start.elapsed(), Duration::from_secs(15));

    let st = d.snapshot();
    assert_eq!(st.selected_sector.as_deref(), Some("Beta"));
    assert_eq!(st.companies_data.len(), 1);
    assert_eq!(st.companies_status, PanelStatus::Ready);
    assert_eq!(
        controller.calls().await,
        [
            "sector-performance",
            "quote:A1.BSE",
            "quote:B1.BSE",
            "news:Beta India stocks",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn hanging_search_leaves_the_newer_results_alone() {
    let (d, controller) = hanging_market().await;
    controller.set_news_behavior("stall", MockBehavior::Hang).await;
    controller
        .set_news_behavior("fresh", MockBehavior::Return(vec![article("fresh")]))
        .await;

    let (stalled, fresh) =
        tokio::join!(d.load_news_for_query("stall"), d.load_news_for_query("fresh"));
    assert!(matches!(stalled, Err(DalalError::Superseded { .. })));
    fresh.unwrap();

    let st = d.snapshot();
    assert_eq!(st.news_query.as_deref(), Some("fresh"));
    assert_eq!(st.news_status, PanelStatus::Ready);
    assert_eq!(st.news_data[0].title, "fresh");
}

#[cfg(feature = "tracing")]
mod logging {
    use std::io;
    use std::sync::{Arc, Mutex};

    use dalal_mock::MockBehavior;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::util::SubscriberInitExt;

    use super::hanging_market;
    use crate::helpers::article;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_stages_are_quiet_and_failures_are_loud() {
        let out = Captured::default();
        let _guard = tracing_subscriber::fmt()
            .with_writer(out.clone())
            .with_ansi(false)
            .with_max_level(LevelFilter::DEBUG)
            .finish()
            .set_default();

        let (d, controller) = hanging_market().await;
        controller.set_news_behavior("stall", MockBehavior::Hang).await;
        controller
            .set_news_behavior("fresh", MockBehavior::Return(vec![article("fresh")]))
            .await;
        controller
            .set_news_behavior(
                "broken",
                MockBehavior::Fail(dalal::DalalError::connector("dynamic", "Failed to fetch news")),
            )
            .await;

        let _ = tokio::join!(d.load_news_for_query("stall"), d.load_news_for_query("fresh"));
        let _ = d.load_news_for_query("broken").await;

        let lines = out.lines();
        let dropped: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("superseded by a newer selection"))
            .collect();
        assert!(!dropped.is_empty());
        assert!(dropped.iter().all(|l| l.contains("DEBUG") && !l.contains("WARN")));
        assert!(dropped.iter().all(|l| l.contains("class=Internal")));

        let failed: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("stage failed"))
            .collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].contains("WARN"));
        assert!(failed[0].contains("class=Transport"));
        assert!(failed[0].contains("Failed to fetch news"));
    }
}
