use chrono::NaiveDate;

use crate::FormsConfig;

/// Format an amount for list entries and summary panels (e.g. "$50,000")
pub fn format_amount(amount: f64, config: &FormsConfig) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push_str(&config.thousands_separator);
        }
        grouped.push(digit);
    }

    let fraction = fraction.trim_end_matches('0');
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}{}", sign, config.currency_symbol, grouped)
    } else {
        format!("{}{}{}.{}", sign, config.currency_symbol, grouped, fraction)
    }
}

/// Parse a YYYY-MM-DD string
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Format YYYY-MM-DD as dd/mm/yyyy; anything unparseable is returned as-is
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}
