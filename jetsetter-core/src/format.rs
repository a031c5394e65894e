//! Display formatting for prices, dates and flight durations.
//!
//! None of these fail: input that cannot be interpreted is shown as given.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::money::Money;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:([0-9]+)D)?(?:T(?:([0-9]+)H)?(?:([0-9]+)M)?)?$").expect("valid duration pattern")
});

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// `$1,234.56` for known currencies, `CHF 1,234.56` otherwise
pub fn format_price(price: &Money) -> String {
    let sign = if price.amount_minor < 0 { "-" } else { "" };
    let abs = price.amount_minor.unsigned_abs();
    let amount = format!("{}.{:02}", group_thousands(abs / 100), abs % 100);

    match currency_symbol(&price.currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, amount),
        None => format!("{}{} {}", sign, price.currency, amount),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `Mar 5, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Mar 5, 2025, 9:05 PM`
pub fn format_date_time(at: NaiveDateTime) -> String {
    at.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Same as [`format_date`] for ISO text; other text is returned unchanged
pub fn format_date_str(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(format_date)
        .unwrap_or_else(|_| date.to_string())
}

/// ISO-8601 duration as sent by the flight provider (`PT7H10M`) to `7h 10m`
pub fn format_duration(iso: &str) -> String {
    let Some(caps) = DURATION_RE.captures(iso) else {
        return iso.to_string();
    };

    let parts: Vec<String> = [(1, "d"), (2, "h"), (3, "m")]
        .iter()
        .filter_map(|(group, unit)| caps.get(*group).map(|m| format!("{}{}", m.as_str(), unit)))
        .collect();

    if parts.is_empty() {
        iso.to_string()
    } else {
        parts.join(" ")
    }
}
