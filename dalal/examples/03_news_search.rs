mod common;

use dalal::Dalal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let mut builder = Dalal::builder().news_page_size(5);
    for c in common::get_connectors()? {
        builder = builder.with_connector(c);
    }
    let dalal = builder.build()?;

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Reliance stock India".to_string());
    println!("Searching news for {query}...");
    for a in dalal.news(&query).await? {
        println!("[{}] {} ({})", a.sentiment.as_str(), a.title, a.source);
    }
    Ok(())
}
