mod common;

use std::sync::Arc;

use dalal::{Dalal, Dashboard};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let mut builder = Dalal::builder();
    for c in common::get_connectors()? {
        builder = builder.with_connector(c);
    }
    let dashboard = Dashboard::new(Arc::new(builder.build()?));

    dashboard.load_sector_data().await?;
    dashboard.select_sector("Energy").await?;
    let first = dashboard
        .snapshot()
        .companies_data
        .first()
        .map(|c| c.symbol.clone());
    let Some(symbol) = first else {
        println!("No company data available.");
        return Ok(());
    };

    dashboard.select_company(&symbol).await?;
    if let Some(checklist) = dashboard.snapshot().checklist {
        println!("{}", checklist.heading);
        println!("{}\n", checklist.subtitle);
        for item in &checklist.items {
            println!("{:<28} {:<16} {}", item.title, item.status.label(), item.description);
        }
        println!("\n{}", checklist.summary);
    }
    Ok(())
}
