//! Date normalizer.
//!
//! Renders dates in the `YYYY-MM-DDThh:mm:ssZ` form Solr requires for date
//! fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

use solr_indexer_shared::FieldValue;

use super::Normalizer;

/// Output format for normalized dates.
const SOLR_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Zone-less date-time layouts, interpreted as UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%MZ",
    "%Y/%m/%d %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
];

/// Date-only layouts, interpreted as midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Normalizes date values.
///
/// - Falsy values (`null`, `false`, `0`, `""`, `"0"`, empty arrays and
///   objects) are returned unchanged.
/// - Integers and all-digit strings are Unix timestamps in seconds.
/// - Other strings are parsed as RFC 3339, RFC 2822 or one of the common
///   layouts above.
/// - Anything that does not parse is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer;

impl Normalizer for DateNormalizer {
    fn normalize(&self, value: FieldValue) -> FieldValue {
        if is_falsy(&value) {
            return value;
        }

        let parsed = match &value {
            Value::Number(n) => n.as_i64().and_then(from_timestamp),
            Value::String(s) => parse_date(s.trim()),
            _ => None,
        };

        match parsed {
            Some(date) => Value::String(date.format(SOLR_DATE_FORMAT).to_string()),
            None => {
                debug!(value = %value, "Date value left unchanged");
                value
            }
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn from_timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse::<i64>().ok().and_then(from_timestamp);
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(input) {
        return Some(date.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
