//! Cell values

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A single scalar stored in a dataset cell.
///
/// The variant is the cell's semantic type. Renderers match on it
/// exhaustively, so a boolean is never mistaken for an integer and a
/// timestamp is never treated as text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
	/// Text
	String(String),
	/// Signed integer
	Integer(i64),
	/// Floating point, possibly NaN
	Float(f64),
	/// Date and time without a time zone
	Timestamp(NaiveDateTime),
	/// Boolean
	Boolean(bool),
	/// Missing value
	Null,
}

/// The semantic type of a [`CellValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// [`CellValue::String`]
	String,
	/// [`CellValue::Integer`]
	Integer,
	/// [`CellValue::Float`]
	Float,
	/// [`CellValue::Timestamp`]
	Timestamp,
	/// [`CellValue::Boolean`]
	Boolean,
	/// [`CellValue::Null`]
	Null,
}

impl CellValue {
	/// Returns the semantic type of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			CellValue::String(_) => ValueKind::String,
			CellValue::Integer(_) => ValueKind::Integer,
			CellValue::Float(_) => ValueKind::Float,
			CellValue::Timestamp(_) => ValueKind::Timestamp,
			CellValue::Boolean(_) => ValueKind::Boolean,
			CellValue::Null => ValueKind::Null,
		}
	}

	/// Returns the text if this is a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			CellValue::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the value as `f64` for integers and floats.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			CellValue::Integer(i) => Some(*i as f64),
			CellValue::Float(f) => Some(*f),
			_ => None,
		}
	}

	/// Returns the timestamp if this is a timestamp value.
	pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
		match self {
			CellValue::Timestamp(ts) => Some(ts),
			_ => None,
		}
	}

	/// Returns `true` for [`CellValue::Null`] and NaN floats.
	pub fn is_missing(&self) -> bool {
		match self {
			CellValue::Null => true,
			CellValue::Float(f) => f.is_nan(),
			_ => false,
		}
	}
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CellValue::String(s) => f.write_str(s),
			CellValue::Integer(i) => write!(f, "{i}"),
			CellValue::Float(x) => write!(f, "{x}"),
			CellValue::Timestamp(ts) => write!(f, "{ts}"),
			CellValue::Boolean(b) => write!(f, "{b}"),
			CellValue::Null => Ok(()),
		}
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		CellValue::String(value.to_string())
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		CellValue::String(value)
	}
}

impl From<&String> for CellValue {
	fn from(value: &String) -> Self {
		CellValue::String(value.clone())
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		CellValue::Integer(value)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		CellValue::Integer(i64::from(value))
	}
}

impl From<u32> for CellValue {
	fn from(value: u32) -> Self {
		CellValue::Integer(i64::from(value))
	}
}

impl From<usize> for CellValue {
	fn from(value: usize) -> Self {
		match i64::try_from(value) {
			Ok(i) => CellValue::Integer(i),
			Err(_) => CellValue::Float(value as f64),
		}
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		CellValue::Float(value)
	}
}

impl From<f32> for CellValue {
	fn from(value: f32) -> Self {
		CellValue::Float(f64::from(value))
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		CellValue::Boolean(value)
	}
}

impl From<NaiveDateTime> for CellValue {
	fn from(value: NaiveDateTime) -> Self {
		CellValue::Timestamp(value)
	}
}

impl From<NaiveDate> for CellValue {
	fn from(value: NaiveDate) -> Self {
		CellValue::Timestamp(value.and_time(chrono::NaiveTime::MIN))
	}
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CellValue {
	fn from(value: DateTime<Tz>) -> Self {
		CellValue::Timestamp(value.naive_utc())
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => CellValue::Null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(y, m, d)
			.and_then(|date| date.and_hms_opt(0, 0, 0))
			.unwrap()
	}

	#[rstest]
	#[case(CellValue::from("Apple"), ValueKind::String)]
	#[case(CellValue::from(12_i64), ValueKind::Integer)]
	#[case(CellValue::from(0.5), ValueKind::Float)]
	#[case(CellValue::from(true), ValueKind::Boolean)]
	#[case(CellValue::from(ts(2018, 1, 1)), ValueKind::Timestamp)]
	#[case(CellValue::from(None::<i64>), ValueKind::Null)]
	fn test_kind(#[case] value: CellValue, #[case] expected: ValueKind) {
		assert_eq!(value.kind(), expected);
	}

	#[rstest]
	fn test_booleans_are_not_integers() {
		assert_ne!(CellValue::from(true), CellValue::from(1_i64));
		assert_eq!(CellValue::from(true).as_f64(), None);
	}

	#[rstest]
	#[case(CellValue::from("Apple"), "Apple")]
	#[case(CellValue::from(1234_i64), "1234")]
	#[case(CellValue::from(false), "false")]
	#[case(CellValue::Null, "")]
	#[case(CellValue::from(ts(2018, 1, 5)), "2018-01-05 00:00:00")]
	fn test_display(#[case] value: CellValue, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_nan_is_missing_and_never_equal() {
		let nan = CellValue::from(f64::NAN);
		assert!(nan.is_missing());
		assert_ne!(nan, CellValue::from(f64::NAN));
		assert!(!CellValue::from(0.0).is_missing());
	}

	#[rstest]
	fn test_date_becomes_midnight_timestamp() {
		let date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
		assert_eq!(CellValue::from(date), CellValue::Timestamp(ts(2018, 1, 1)));
	}
}
