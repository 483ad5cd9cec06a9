//! Форматирование сумм, счётчиков и дат для таблиц и печатной формы.

use chrono::{Datelike, NaiveDate};

pub const CURRENCY_SYMBOL: &str = "₱";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Groups digits of `n` in threes with `sep`.
pub fn group_thousands(n: u64, sep: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// "₱1,234.56". Always two decimals, rounded half away from zero.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        CURRENCY_SYMBOL,
        sign,
        group_thousands(cents / 100, ','),
        cents % 100
    )
}

/// Integer count with thousands separators: 12345 -> "12,345".
pub fn format_count(n: usize) -> String {
    group_thousands(n as u64, ',')
}

/// Plain quantity: "12", "2.5".
pub fn format_quantity(value: f64) -> String {
    value.to_string()
}

/// Parses the leading calendar date of an ISO-like string
/// ("2024-03-15", "2024-03-15 10:22:01", "2024-03-15T10:22:01Z").
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Four-digit year of an ISO-like date; `None` when it does not parse.
pub fn extract_year(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| format!("{:04}", d.year()))
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// English month name of an ISO-like date ("March").
pub fn month_of(raw: &str) -> Option<&'static str> {
    parse_date(raw).and_then(|d| month_name(d.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₱0.00");
        assert_eq!(format_currency(1234.5), "₱1,234.50");
        assert_eq!(format_currency(1999999.999), "₱2,000,000.00");
        assert_eq!(format_currency(-75.125), "₱-75.13");
    }

    #[test]
    fn test_format_count_and_quantity() {
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_quantity(12.0), "12");
        assert_eq!(format_quantity(2.5), "2.5");
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2024-03-15").as_deref(), Some("2024"));
        assert_eq!(extract_year("2023-12-31 23:59:59").as_deref(), Some("2023"));
        assert_eq!(extract_year("2022-01-01T00:00:00Z").as_deref(), Some("2022"));
        assert_eq!(extract_year("2021-7-4").as_deref(), Some("2021"));
        assert_eq!(extract_year("15/03/2024"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_of("2024-03-15"), Some("March"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(month_of("garbage"), None);
    }
}
