mod common;

use std::sync::Arc;

use dalal::{Dalal, Dashboard, Panel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let mut builder = Dalal::builder();
    for c in common::get_connectors()? {
        builder = builder.with_connector(c);
    }
    let dashboard = Dashboard::new(Arc::new(builder.build()?));

    dashboard.load_sector_data().await?;
    let sector = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Information Technology".to_string());
    if let Err(e) = dashboard.select_sector(&sector).await {
        eprintln!("sector pipeline stopped: {e}");
    }

    let view = dashboard.view();
    if let Panel::Ready(cards) = &view.sectors {
        for s in cards {
            let mark = if s.selected { "*" } else { " " };
            println!("{mark} {:<28} {}", s.name, s.performance);
        }
    }
    match &view.companies {
        Panel::Ready(cards) => {
            for c in cards {
                println!("{:<16} {:>12} {:>8}  vol {}", c.symbol, c.price, c.change, c.volume);
            }
        }
        Panel::Error(msg) => println!("{msg}"),
        Panel::Placeholder(hint) | Panel::Loading(hint) => println!("{hint}"),
    }
    if let Panel::Ready(news) = &view.news {
        for n in news.iter().take(5) {
            println!("[{}] {} ({})", n.sentiment.as_str(), n.title, n.published);
        }
    }
    Ok(())
}
