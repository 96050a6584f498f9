//! Lenient timestamp parsing for datetime-typed columns

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::value::CellValue;

const DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M",
	"%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parses a timestamp from text, trying RFC 3339 first and then a fixed
/// list of common layouts.
///
/// Offsets in RFC 3339 input are converted to UTC before the offset is
/// dropped.
///
/// ```
/// use reinhardt_dataset::datetime::parse_timestamp;
///
/// assert!(parse_timestamp("2018-01-05").is_some());
/// assert!(parse_timestamp("2018-01-05T10:30:00+02:00").is_some());
/// assert!(parse_timestamp("not a date").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
	let text = text.trim();
	if text.is_empty() {
		return None;
	}
	if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
		return Some(parsed.naive_utc());
	}
	DATETIME_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
		.or_else(|| {
			DATE_FORMATS
				.iter()
				.find_map(|format| NaiveDate::parse_from_str(text, format).ok())
				.map(|date| date.and_time(chrono::NaiveTime::MIN))
		})
}

/// Normalizes one cell of a datetime-typed column.
///
/// Strings that parse become [`CellValue::Timestamp`]; every other value,
/// including unparsable strings, is returned unchanged.
pub fn normalize_cell(value: CellValue) -> CellValue {
	match value {
		CellValue::String(text) => match parse_timestamp(&text) {
			Some(ts) => CellValue::Timestamp(ts),
			None => {
				tracing::debug!(value = %text, "leaving unparsable datetime value as text");
				CellValue::String(text)
			}
		},
		other => other,
	}
}
