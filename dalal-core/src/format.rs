//! Indian-locale display helpers shared by the checklist and the view layer.

use chrono::{DateTime, Utc};

/// Placeholder shown for missing or zero values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Group an unsigned digit string the Indian way: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Format with a fixed number of decimals and Indian digit grouping.
fn grouped_fixed(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut out = group_indian(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Rupee amount with two decimals: `123456.78` -> `₹1,23,456.78`.
///
/// Zero and non-finite values render as `N/A`.
#[must_use]
pub fn format_inr(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", grouped_fixed(value, 2))
}

/// Grouped integer count: `1234567` -> `12,34,567`; zero renders as `N/A`.
#[must_use]
pub fn format_number(value: u64) -> String {
    if value == 0 {
        return NOT_AVAILABLE.to_string();
    }
    group_indian(&value.to_string())
}

/// Signed percentage with two decimals: `1.234` -> `+1.23%`, `-2.5` -> `-2.50%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Coarse relative time for an RFC 3339 timestamp as seen from `now`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn time_ago(published_at: &str, now: DateTime<Utc>) -> String {
    let Ok(ts) = DateTime::parse_from_rfc3339(published_at) else {
        return published_at.to_string();
    };
    let seconds = now.signed_duration_since(ts.with_timezone(&Utc)).num_seconds();
    match seconds {
        s if s < 60 => "Just now".to_string(),
        s if s < 3_600 => format!("{} minutes ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        s => format!("{} days ago", s / 86_400),
    }
}
