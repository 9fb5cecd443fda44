#![allow(dead_code)]

use std::sync::Arc;

use dalal::DalalConnector;
use dalal_alphavantage::AlphaVantageConnector;
use dalal_newsapi::NewsApiConnector;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Mock connector when `DALAL_EXAMPLES_USE_MOCK` is set, otherwise Alpha Vantage plus NewsAPI.
pub fn get_connectors() -> Result<Vec<Arc<dyn DalalConnector>>, Box<dyn std::error::Error>> {
    if std::env::var("DALAL_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(vec![Arc::new(dalal_mock::MockConnector::new())]);
    }
    let market = AlphaVantageConnector::rate_limited()?.build();
    let news = NewsApiConnector::paced()?.build();
    Ok(vec![market, news])
}
