use dalal_core::CompanyOverview;

pub fn by_symbol(symbol: &str) -> Option<CompanyOverview> {
    let (pe, pb, hi, lo) = match symbol {
        "TCS.BSE" => (29.4, 14.2, 4_254.75, 3_311.00),
        "INFY.BSE" => (22.8, 7.9, 1_733.00, 1_358.35),
        "WIPRO.BSE" => (18.6, 3.4, 546.10, 375.00),
        "RELIANCE.BSE" => (27.1, 2.3, 3_024.90, 2_220.30),
        "HDFCBANK.BSE" => (17.9, 2.6, 1_794.00, 1_363.55),
        _ => return None,
    };
    Some(CompanyOverview {
        market_cap: 10_000_000_000,
        pe_ratio: pe,
        pb_ratio: pb,
        dividend_yield: 0.012,
        eps: 50.0,
        beta: 0.85,
        week52_high: hi,
        week52_low: lo,
    })
}
