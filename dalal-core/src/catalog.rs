//! Static sector-to-company table and display names for BSE listings.

/// Exchange suffix carried by catalog symbols.
pub const BSE_SUFFIX: &str = ".BSE";

/// Sector label to BSE symbols, in display priority order.
pub const SECTOR_COMPANIES: &[(&str, &[&str])] = &[
    (
        "Information Technology",
        &["TCS.BSE", "INFY.BSE", "WIPRO.BSE", "HCLTECH.BSE", "TECHM.BSE"],
    ),
    (
        "Financials",
        &["HDFCBANK.BSE", "ICICIBANK.BSE", "SBIN.BSE", "AXISBANK.BSE", "KOTAKBANK.BSE"],
    ),
    (
        "Energy",
        &["RELIANCE.BSE", "ONGC.BSE", "BPCL.BSE", "IOC.BSE", "NTPC.BSE"],
    ),
    (
        "Consumer Discretionary",
        &["MARUTI.BSE", "BAJAJ-AUTO.BSE", "TITAN.BSE", "TATAMOTORS.BSE"],
    ),
    (
        "Health Care",
        &["SUNPHARMA.BSE", "DRREDDY.BSE", "CIPLA.BSE", "APOLLOHOSP.BSE"],
    ),
    (
        "Industrials",
        &["LT.BSE", "ULTRACEMCO.BSE", "ADANIENT.BSE", "SIEMENS.BSE"],
    ),
    (
        "Consumer Staples",
        &["ITC.BSE", "HINDUNILVR.BSE", "NESTLEIND.BSE", "BRITANNIA.BSE"],
    ),
    (
        "Materials",
        &["TATASTEEL.BSE", "HINDALCO.BSE", "JSWSTEEL.BSE", "VEDL.BSE"],
    ),
    ("Communication Services", &["BHARTIARTL.BSE", "SAIL.BSE"]),
    ("Utilities", &["POWERGRID.BSE", "NTPC.BSE"]),
    ("Real Estate", &["DLF.BSE", "GODREJPROP.BSE"]),
];

/// Symbol to company display name.
pub const COMPANY_NAMES: &[(&str, &str)] = &[
    ("TCS.BSE", "Tata Consultancy Services"),
    ("INFY.BSE", "Infosys Ltd"),
    ("WIPRO.BSE", "Wipro Ltd"),
    ("HCLTECH.BSE", "HCL Technologies"),
    ("TECHM.BSE", "Tech Mahindra"),
    ("HDFCBANK.BSE", "HDFC Bank"),
    ("ICICIBANK.BSE", "ICICI Bank"),
    ("SBIN.BSE", "State Bank of India"),
    ("AXISBANK.BSE", "Axis Bank"),
    ("KOTAKBANK.BSE", "Kotak Mahindra Bank"),
    ("RELIANCE.BSE", "Reliance Industries"),
    ("ONGC.BSE", "Oil & Natural Gas Corp"),
    ("BPCL.BSE", "Bharat Petroleum"),
    ("IOC.BSE", "Indian Oil Corporation"),
    ("NTPC.BSE", "NTPC Ltd"),
    ("MARUTI.BSE", "Maruti Suzuki"),
    ("BAJAJ-AUTO.BSE", "Bajaj Auto"),
    ("TITAN.BSE", "Titan Company"),
    ("TATAMOTORS.BSE", "Tata Motors"),
    ("SUNPHARMA.BSE", "Sun Pharmaceutical"),
    ("DRREDDY.BSE", "Dr. Reddy's Laboratories"),
    ("CIPLA.BSE", "Cipla Ltd"),
    ("APOLLOHOSP.BSE", "Apollo Hospitals"),
    ("LT.BSE", "Larsen & Toubro"),
    ("ULTRACEMCO.BSE", "UltraTech Cement"),
    ("ADANIENT.BSE", "Adani Enterprises"),
    ("SIEMENS.BSE", "Siemens Ltd"),
    ("ITC.BSE", "ITC Ltd"),
    ("HINDUNILVR.BSE", "Hindustan Unilever"),
    ("NESTLEIND.BSE", "Nestle India"),
    ("BRITANNIA.BSE", "Britannia Industries"),
    ("TATASTEEL.BSE", "Tata Steel"),
    ("HINDALCO.BSE", "Hindalco Industries"),
    ("JSWSTEEL.BSE", "JSW Steel"),
    ("VEDL.BSE", "Vedanta Ltd"),
    ("BHARTIARTL.BSE", "Bharti Airtel"),
    ("SAIL.BSE", "SAIL"),
    ("POWERGRID.BSE", "Power Grid Corp"),
    ("DLF.BSE", "DLF Ltd"),
    ("GODREJPROP.BSE", "Godrej Properties"),
];

/// Lookup table from sector label to symbols and from symbol to display name.
///
/// [`SectorCatalog::default`] is the built-in BSE table; tests and demos can
/// supply their own.
#[derive(Debug, Clone)]
pub struct SectorCatalog {
    sectors: Vec<(String, Vec<String>)>,
    names: Vec<(String, String)>,
}

impl Default for SectorCatalog {
    fn default() -> Self {
        Self {
            sectors: SECTOR_COMPANIES
                .iter()
                .map(|(s, syms)| {
                    (
                        (*s).to_string(),
                        syms.iter().map(|x| (*x).to_string()).collect(),
                    )
                })
                .collect(),
            names: COMPANY_NAMES
                .iter()
                .map(|(s, n)| ((*s).to_string(), (*n).to_string()))
                .collect(),
        }
    }
}

impl SectorCatalog {
    /// Empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sectors: Vec::new(),
            names: Vec::new(),
        }
    }

    /// Map a sector to its symbols, replacing any existing mapping.
    #[must_use]
    pub fn with_sector<I, S>(mut self, sector: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sector = sector.into();
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        self.sectors.retain(|(s, _)| *s != sector);
        self.sectors.push((sector, symbols));
        self
    }

    /// Register a display name for a symbol.
    #[must_use]
    pub fn with_name(mut self, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        let symbol = symbol.into();
        self.names.retain(|(s, _)| *s != symbol);
        self.names.push((symbol, name.into()));
        self
    }

    /// All symbols mapped to `sector`; empty when the sector is unknown.
    #[must_use]
    pub fn symbols_for_sector(&self, sector: &str) -> &[String] {
        self.sectors
            .iter()
            .find(|(s, _)| s == sector)
            .map_or(&[][..], |(_, syms)| syms.as_slice())
    }

    /// Sector labels in table order.
    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|(s, _)| s.as_str())
    }

    /// Display name for `symbol`, falling back to the symbol itself.
    #[must_use]
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.names
            .iter()
            .find(|(s, _)| s == symbol)
            .map_or(symbol, |(_, n)| n.as_str())
    }
}

/// Remove the first `.BSE` occurrence, the form Alpha Vantage expects.
#[must_use]
pub fn strip_exchange_suffix(symbol: &str) -> String {
    symbol.replacen(BSE_SUFFIX, "", 1)
}
