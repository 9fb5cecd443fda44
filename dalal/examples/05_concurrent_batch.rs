mod common;

use std::time::Instant;

use dalal::{Dalal, FetchStrategy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let mut builder = Dalal::builder()
        .fetch_strategy(FetchStrategy::Concurrent)
        .max_concurrency(2);
    for c in common::get_connectors()? {
        builder = builder.with_connector(c);
    }
    let dalal = builder.build()?;

    let started = Instant::now();
    let report = dalal.companies_for_sector("Financials").await?;
    for q in &report.companies {
        println!("{:<16} {:>10.2} {:>+7.2}%", q.symbol, q.price, q.change_percent);
    }
    println!("{} companies in {:?}", report.companies.len(), started.elapsed());
    Ok(())
}
