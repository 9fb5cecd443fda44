use dalal_core::{CompanyQuote, SectorCatalog};

struct Row {
    price: f64,
    previous_close: f64,
    volume: u64,
}

const fn row(price: f64, previous_close: f64, volume: u64) -> Row {
    Row {
        price,
        previous_close,
        volume,
    }
}

fn hand_picked(symbol: &str) -> Option<Row> {
    Some(match symbol {
        "TCS.BSE" => row(3_842.55, 3_801.10, 1_204_332),
        "INFY.BSE" => row(1_512.30, 1_530.75, 3_412_009),
        "WIPRO.BSE" => row(462.10, 458.00, 2_118_440),
        "HCLTECH.BSE" => row(1_388.00, 1_301.20, 987_120),
        "TECHM.BSE" => row(1_204.45, 1_290.00, 1_650_781),
        "RELIANCE.BSE" => row(2_915.80, 2_890.35, 5_230_114),
        "HDFCBANK.BSE" => row(1_642.25, 1_655.90, 4_004_211),
        _ => return None,
    })
}

/// Deterministic row for catalog symbols without a hand-picked fixture.
fn derived(symbol: &str) -> Row {
    let seed = symbol
        .bytes()
        .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
    #[allow(clippy::cast_precision_loss)]
    let price = 100.0 + (seed % 400_000) as f64 / 100.0;
    #[allow(clippy::cast_precision_loss)]
    let drift = ((seed / 7) % 1_000) as f64 / 10_000.0 - 0.05;
    row(price, price / (1.0 + drift), 100_000 + seed % 900_000)
}

pub fn by_symbol(symbol: &str) -> Option<CompanyQuote> {
    let catalog = SectorCatalog::default();
    let name = catalog.display_name(symbol);
    if name == symbol && hand_picked(symbol).is_none() {
        return None;
    }
    let r = hand_picked(symbol).unwrap_or_else(|| derived(symbol));
    let change = r.price - r.previous_close;
    Some(CompanyQuote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: r.price,
        change,
        change_percent: change / r.previous_close * 100.0,
        volume: r.volume,
        high: r.price.max(r.previous_close) * 1.01,
        low: r.price.min(r.previous_close) * 0.99,
        previous_close: r.previous_close,
        pe_ratio: None,
        week_high: None,
        week_low: None,
    })
}
