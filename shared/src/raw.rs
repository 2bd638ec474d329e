//! Defensive parsing boundary for loosely-typed backend payloads.
//!
//! Backend responses are treated as opaque JSON of uncertain shape. Everything
//! in here is total: a missing or malformed value degrades to a default instead
//! of producing an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Return the first alias that is present (and not `null`) on `record`.
pub fn resolve_field<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let object = record.as_object()?;
    aliases
        .iter()
        .filter_map(|alias| object.get(*alias))
        .find(|value| !value.is_null())
}

/// Parse as a number, falling back to 0 when the result is not finite.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Some(0.0)
            } else {
                text.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|number| number.is_finite()).unwrap_or(0.0)
}

/// Use the value when it is a string, otherwise an empty string.
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        _ => String::new(),
    }
}

/// Like [`coerce_string`], with `"-"` standing in for absent or blank text.
pub fn display_string(value: Option<&Value>) -> String {
    let text = coerce_string(value);
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text
    }
}

/// Positive integral identifier, or `None` when the row must be discarded.
pub fn coerce_id(value: Option<&Value>) -> Option<i64> {
    let number = coerce_number(value);
    if number > 0.0 && number.fract() == 0.0 && number <= i64::MAX as f64 {
        Some(number as i64)
    } else {
        None
    }
}

/// True only for a JSON number equal to `code`. Strings are never consulted.
pub fn is_numeric_code(value: Option<&Value>, code: i64) -> bool {
    match value {
        Some(Value::Number(number)) => number.as_f64() == Some(code as f64),
        _ => false,
    }
}

/// The row-bearing part of a payload: the payload itself when it is an array,
/// its `data` field when that is an array, otherwise nothing.
pub fn extract_rows(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(rows) => rows,
        Value::Object(object) => match object.get("data") {
            Some(Value::Array(rows)) => rows,
            _ => &[],
        },
        _ => &[],
    }
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-ish date into a naive local date-time.
///
/// Offsets in RFC 3339 input are kept as written (the wall-clock time at the
/// given offset), bare dates resolve to midnight.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.naive_local());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Milliseconds since the Unix epoch, or `None` when unparseable.
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.timestamp_millis());
    }
    parse_date_time(text).map(|date_time| date_time.and_utc().timestamp_millis())
}

/// Sort key for dates: unparseable values count as the epoch so they sort first.
pub fn timestamp_or_epoch(text: &str) -> i64 {
    parse_timestamp(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_field_first_present_wins() {
        let record = json!({"category": "Dom", "categoryLabel": "Mieszkanie", "categoryName": null});
        let aliases = ["categoryName", "category", "categoryLabel"];
        assert_eq!(resolve_field(&record, &aliases), Some(&json!("Dom")));
        assert_eq!(resolve_field(&record, &["missing"]), None);
        assert_eq!(resolve_field(&json!([1, 2]), &aliases), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(Some(&json!(12.5))), 12.5);
        assert_eq!(coerce_number(Some(&json!("12.50"))), 12.5);
        assert_eq!(coerce_number(Some(&json!(" 7 "))), 7.0);
        assert_eq!(coerce_number(Some(&json!(""))), 0.0);
        assert_eq!(coerce_number(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_number(Some(&json!("inf"))), 0.0);
        assert_eq!(coerce_number(Some(&json!("NaN"))), 0.0);
        assert_eq!(coerce_number(Some(&json!(true))), 0.0);
        assert_eq!(coerce_number(None), 0.0);
    }

    #[test]
    fn test_coerce_string_and_display_string() {
        assert_eq!(coerce_string(Some(&json!("Czynsz"))), "Czynsz");
        assert_eq!(coerce_string(Some(&json!(42))), "");
        assert_eq!(coerce_string(None), "");
        assert_eq!(display_string(Some(&json!("  "))), "-");
        assert_eq!(display_string(None), "-");
        assert_eq!(display_string(Some(&json!("Prąd"))), "Prąd");
    }

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(Some(&json!(5))), Some(5));
        assert_eq!(coerce_id(Some(&json!("17"))), Some(17));
        assert_eq!(coerce_id(Some(&json!(0))), None);
        assert_eq!(coerce_id(Some(&json!(-3))), None);
        assert_eq!(coerce_id(Some(&json!(2.5))), None);
        assert_eq!(coerce_id(Some(&json!("x"))), None);
        assert_eq!(coerce_id(None), None);
    }

    #[test]
    fn test_numeric_code_ignores_strings() {
        assert!(is_numeric_code(Some(&json!(1)), 1));
        assert!(is_numeric_code(Some(&json!(1.0)), 1));
        assert!(!is_numeric_code(Some(&json!("1")), 1));
        assert!(!is_numeric_code(Some(&json!(2)), 1));
        assert!(!is_numeric_code(None, 1));
    }

    #[test]
    fn test_extract_rows() {
        let top_level = json!([{"id": 1}]);
        assert_eq!(extract_rows(&top_level).len(), 1);

        let wrapped = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(extract_rows(&wrapped).len(), 2);

        assert!(extract_rows(&json!({"data": {"id": 1}})).is_empty());
        assert!(extract_rows(&json!(null)).is_empty());
        assert!(extract_rows(&json!("rows")).is_empty());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp("1970-01-01T00:00:01"), Some(1_000));
        assert_eq!(parse_timestamp("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_timestamp("1970-01-01 00:01"), Some(60_000));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("10/01/2025"), None);
        assert_eq!(timestamp_or_epoch("not a date"), 0);
    }

    #[test]
    fn test_parse_date_time_keeps_wall_clock() {
        let parsed = parse_date_time("2025-01-10T23:30:00+02:00").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }
}
