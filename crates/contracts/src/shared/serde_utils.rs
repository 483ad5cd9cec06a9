//! Lenient deserializers for values coming out of the PHP record store.
//!
//! The backend serializes MySQL columns loosely: numbers may arrive as JSON
//! numbers or as strings ("1250.00", "1,250"), empty dates as `""` or
//! `"0000-00-00"`, and year lists as either numbers or strings.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Parses a decimal the way the record store writes it. Thousands separators
/// are dropped; an empty string is "no value".
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `null`, missing, `""` and unparseable text all map to `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => parse_decimal(&s),
    })
}

/// Like [`opt_f64`] but collapses "no value" to `0.0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_f64(deserializer)?.unwrap_or(0.0))
}

/// Non-negative counters sent either as numbers or numeric strings.
pub fn u64_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_f64(deserializer)?
        .filter(|v| *v >= 0.0)
        .map(|v| v.round() as u64)
        .unwrap_or(0))
}

/// Integer identifiers; text is accepted but must parse.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) if n.fract() == 0.0 => Ok(n as i64),
        NumberOrText::Number(n) => Err(de::Error::custom(format!("id {n} is not an integer"))),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| de::Error::custom(format!("invalid id '{s}': {e}"))),
    }
}

/// Free-text column that must be present; `null` reads as an empty string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrText>::deserialize(deserializer)?
        .map(text_of)
        .unwrap_or_default())
}

/// Optional text column. Blank strings and MySQL zero dates are "no value".
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrText>::deserialize(deserializer)?
        .map(text_of)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.starts_with("0000-00-00")))
}

/// List of labels where the backend may mix numbers and strings (years).
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<NumberOrText>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(text_of)
        .collect())
}

fn text_of(value: NumberOrText) -> String {
    match value {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "opt_string")]
        note: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        years: Vec<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1,250.50"), Some(1250.5));
        assert_eq!(parse_decimal("  42 "), Some(42.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("n/a"), None);
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        assert_eq!(probe(r#"{"amount": 10}"#).amount, Some(10.0));
        assert_eq!(probe(r#"{"amount": "10.25"}"#).amount, Some(10.25));
        assert_eq!(probe(r#"{"amount": null}"#).amount, None);
        assert_eq!(probe(r#"{}"#).amount, None);
    }

    #[test]
    fn test_optional_text_drops_blank_and_zero_dates() {
        assert_eq!(probe(r#"{"note": ""}"#).note, None);
        assert_eq!(probe(r#"{"note": "0000-00-00"}"#).note, None);
        assert_eq!(probe(r#"{"note": " rush "}"#).note.as_deref(), Some("rush"));
    }

    #[test]
    fn test_year_list_mixes_numbers_and_text() {
        assert_eq!(probe(r#"{"years": [2024, "2023"]}"#).years, vec!["2024", "2023"]);
        assert!(probe(r#"{"years": null}"#).years.is_empty());
    }
}
