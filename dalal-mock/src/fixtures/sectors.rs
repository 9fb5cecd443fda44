use dalal_core::SectorPerformance;

pub fn all() -> Vec<SectorPerformance> {
    [
        ("Information Technology", 1.42),
        ("Financials", -0.35),
        ("Energy", 2.08),
        ("Consumer Discretionary", 0.61),
        ("Health Care", -1.12),
        ("Industrials", 0.27),
        ("Consumer Staples", -0.04),
        ("Materials", 3.55),
        ("Communication Services", -2.30),
        ("Utilities", 0.00),
        ("Real Estate", -6.18),
    ]
    .into_iter()
    .map(|(name, perf)| SectorPerformance::new(name, perf))
    .collect()
}
