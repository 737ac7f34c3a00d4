use std::{collections::HashMap, sync::LazyLock};

use chrono::{DateTime, Utc};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use regex::Regex;

/// Decimal places used when the currency code is not a known ISO 4217 code.
const FALLBACK_DECIMAL_PLACES: u32 = 2;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid"));

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format an amount with currency symbol, the currency's number of decimal
/// places and thousands separators, ex. "$21,525.00" or "¥1,235".
///
/// Uses en-US conventions ('.' as decimal mark, ',' for thousands) for every
/// currency. Codes that are not ISO 4217 are printed as a prefix instead of a
/// symbol ("ZZZ 1,234.56"). The value itself is never converted.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let code = currency_code.trim().to_uppercase();
    let (prefix, decimal_places) = match Currency::from_code(&code) {
        Some(currency) => (currency.symbol().to_string(), decimal_places(currency)),
        None => (format!("{} ", code), FALLBACK_DECIMAL_PLACES),
    };

    let scale = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 {
        "-"
    } else {
        ""
    };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);

    if decimal_places == 0 {
        format!("{}{}{}", sign, prefix, integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            prefix,
            integer_part,
            minor_units % scale,
            width = decimal_places as usize
        )
    }
}

/// ex. 0.07 -> "7.00%".
pub fn format_tax_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// ex. "3/9/2024". Uses the stored UTC date.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped multi-line text with line breaks kept.
pub(crate) fn escape_html_multiline(s: &str) -> String {
    s.lines().map(escape_html).collect::<Vec<_>>().join("<br/>")
}

/// Replaces every `{{Key}}` in `skeleton` with its value. Values are inserted
/// as-is and never rescanned. Unknown keys are left in place.
pub(crate) fn fill_placeholders(skeleton: &str, placeholders: &HashMap<&str, String>) -> String {
    let mut unknown_keys = Vec::new();
    let result = PLACEHOLDER.replace_all(skeleton, |caps: &regex::Captures| {
        let key = &caps[1];
        match placeholders.get(key) {
            Some(value) => value.clone(),
            None => {
                unknown_keys.push(key.to_string());
                caps[0].to_string()
            }
        }
    });
    let filled = result.into_owned();
    if !unknown_keys.is_empty() {
        tracing::warn!(?unknown_keys, "template placeholders left unreplaced");
    }
    filled
}
