/// Field extraction and display formatting helpers
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Number, Value};

/// Placeholder for a field that was never supplied
pub const NOT_AVAILABLE: &str = "N/A";
pub const TIME_NOT_AVAILABLE: &str = "Time N/A";
pub const DATE_NOT_AVAILABLE: &str = "Date N/A";
pub const NO_VALUE: &str = "--";

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Extract number from JSON value, keeping the producer's own digits
pub fn num(v: &Value) -> Option<Number> {
    match v {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => s.trim().parse::<Number>().ok(),
        _ => None,
    }
}

/// Pick a non-empty text value for `key`, rendering bare numbers as text
pub fn s_pick(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Pick a numeric value for `key`
pub fn n_pick(v: &Value, key: &str) -> Option<Number> {
    v.get(key).and_then(num)
}

/// Parse an ISO-8601 timestamp into the wall-clock time it names.
///
/// Offsets are kept as written rather than converted, so
/// `08:15:00+02:00` stays `08:15`. A trailing `Z` is read as UTC and a bare
/// date as midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    let with_offset = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn format_timestamp(raw: Option<&str>, fmt: &str, unparsable: &str) -> String {
    match raw {
        None | Some("") => NOT_AVAILABLE.to_string(),
        Some(s) => parse_timestamp(s)
            .map(|dt| dt.format(fmt).to_string())
            .unwrap_or_else(|| unparsable.to_string()),
    }
}

/// Render a timestamp as a 12-hour clock, e.g. `08:15 AM`
pub fn format_time(raw: Option<&str>) -> String {
    format_timestamp(raw, "%I:%M %p", TIME_NOT_AVAILABLE)
}

/// Render a timestamp as a long-form date, e.g. `January 01, 2024`
pub fn format_date(raw: Option<&str>) -> String {
    format_timestamp(raw, "%B %d, %Y", DATE_NOT_AVAILABLE)
}

/// Render a measurement with its unit. Zero is a reading, not a gap.
pub fn format_measure(value: Option<&Number>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v}{suffix}"),
        None => NO_VALUE.to_string(),
    }
}
