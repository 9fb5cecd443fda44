//! Pure conversions from raw Alpha Vantage bodies into dalal records.
//!
//! Nothing here touches the network. Numeric fields are parsed leniently: the
//! longest leading decimal prefix wins and anything unparseable becomes `0`.

use serde_json::{Map, Value};

use dalal_core::{
    CompanyOverview, CompanyQuote, DalalError, SectorCatalog, SectorPerformance,
};

use crate::adapter::GlobalQuoteResponse;

/// Key holding the real-time ranking in a `SECTOR` body.
pub const REAL_TIME_RANK: &str = "Rank A: Real-Time Performance";

const RATE_LIMIT_MSG: &str = "API rate limit reached. Please wait and try again.";
const CONNECTOR: &str = "dalal-alphavantage";

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run after whitespace.
fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while b.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;
    if allow_fraction && b.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while b.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return "";
    }
    if allow_fraction && matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while b.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    &s[..i]
}

/// Parse a float the lenient way: `"1.23%"` is `1.23`, `"None"` is `0`.
#[must_use]
pub fn parse_lenient_f64(s: &str) -> f64 {
    numeric_prefix(s, true)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a non-negative integer prefix: `"12345.6"` is `12345`, negatives clamp to `0`.
#[must_use]
pub fn parse_lenient_u64(s: &str) -> u64 {
    let p = numeric_prefix(s, false);
    if p.starts_with('-') {
        return 0;
    }
    p.trim_start_matches('+').parse::<u64>().unwrap_or(0)
}

fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Normalize a `SECTOR` body into the real-time ranking, feed order preserved.
///
/// # Errors
/// - `Connector` carrying the upstream text when the body holds `Error Message`.
/// - `RateLimited` when the body holds `Note` or `Information`.
/// - `Data("Invalid sector data format")` when the ranking object is missing.
pub fn sector_performance(body: &Map<String, Value>) -> Result<Vec<SectorPerformance>, DalalError> {
    if let Some(msg) = body.get("Error Message").and_then(Value::as_str) {
        return Err(DalalError::connector(CONNECTOR, msg));
    }
    if body.contains_key("Note") || body.contains_key("Information") {
        return Err(DalalError::rate_limited(CONNECTOR, RATE_LIMIT_MSG));
    }
    let rank = body
        .get(REAL_TIME_RANK)
        .and_then(Value::as_object)
        .ok_or_else(|| DalalError::Data("Invalid sector data format".into()))?;

    Ok(rank
        .iter()
        .map(|(name, v)| {
            let perf = v.as_str().map_or_else(
                || v.as_f64().unwrap_or(0.0),
                parse_lenient_f64,
            );
            SectorPerformance::new(name.clone(), perf)
        })
        .collect())
}

/// Normalize a `GLOBAL_QUOTE` body for the catalog `symbol` (e.g. `TCS.BSE`).
///
/// Notes, error messages and empty payloads mean no data.
#[must_use]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn company_quote(
    symbol: &str,
    body: &GlobalQuoteResponse,
    catalog: &SectorCatalog,
) -> Option<CompanyQuote> {
    if let Some(msg) = body.error_message.as_deref() {
        #[cfg(feature = "tracing")]
        tracing::warn!(symbol, error = msg, "quote request rejected");
        return None;
    }
    if let Some(note) = body.note.as_deref().or(body.information.as_deref()) {
        #[cfg(feature = "tracing")]
        tracing::warn!(symbol, note, "quote request throttled");
        return None;
    }
    let Some(q) = body.global_quote.as_ref().filter(|q| !q.is_empty()) else {
        #[cfg(feature = "tracing")]
        tracing::warn!(symbol, "no quote data");
        return None;
    };

    let f = |key: &str| q.get(key).map_or(0.0, |v| parse_lenient_f64(v));
    Some(CompanyQuote {
        symbol: symbol.to_string(),
        name: catalog.display_name(symbol).to_string(),
        price: f("05. price"),
        change: f("09. change"),
        change_percent: f("10. change percent"),
        volume: q.get("06. volume").map_or(0, |v| parse_lenient_u64(v)),
        high: f("03. high"),
        low: f("04. low"),
        previous_close: f("08. previous close"),
        ..CompanyQuote::default()
    })
}

/// Normalize an `OVERVIEW` body. Error notes and empty objects mean no data.
#[must_use]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn company_overview(symbol: &str, body: &Map<String, Value>) -> Option<CompanyOverview> {
    if body.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!(symbol, "empty overview");
        return None;
    }
    if ["Error Message", "Note", "Information"]
        .iter()
        .any(|k| body.contains_key(*k))
    {
        #[cfg(feature = "tracing")]
        tracing::warn!(symbol, "overview request rejected or throttled");
        return None;
    }

    let f = |key: &str| parse_lenient_f64(str_field(body, key));
    Some(CompanyOverview {
        market_cap: parse_lenient_u64(str_field(body, "MarketCapitalization")),
        pe_ratio: f("PERatio"),
        pb_ratio: f("PriceToBookRatio"),
        dividend_yield: f("DividendYield"),
        eps: f("EPS"),
        beta: f("Beta"),
        week52_high: f("52WeekHigh"),
        week52_low: f("52WeekLow"),
    })
}
