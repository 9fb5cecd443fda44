use std::sync::Arc;
use std::time::Duration;

use dalal::{Dalal, DalalConnector, QuotaConfig, QuotaConsumptionStrategy};
use dalal_middleware::QuotaAwareConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A tiny budget makes the local quota visible with the mock connector.
    let inner: Arc<dyn DalalConnector> = Arc::new(dalal_mock::MockConnector::new());
    let cfg = QuotaConfig {
        limit: 3,
        window: Duration::from_secs(60),
        strategy: QuotaConsumptionStrategy::Unit,
    };
    let wrapped = Arc::new(QuotaAwareConnector::new(inner, cfg));

    let dalal = Dalal::builder()
        .with_connector(wrapped.clone())
        .request_interval(Duration::from_millis(50))
        .build()?;

    let report = dalal.companies_for_sector("Information Technology").await?;
    println!(
        "fetched {} of {}; skipped {}",
        report.companies.len(),
        report.requested.len(),
        report.skipped()
    );
    for w in &report.warnings {
        println!("  warning: {w}");
    }
    let state = wrapped.state();
    println!("quota remaining {} of {}", state.remaining, state.limit);
    Ok(())
}
