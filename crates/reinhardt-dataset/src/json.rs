//! Row-oriented JSON input
//!
//! Accepts the shape produced by most dataframe exporters with
//! `orient="records"`: an array of flat objects. Object key order is kept,
//! so the first record fixes the column order.

use serde_json::Value;

use crate::dataset::Dataset;
use crate::datetime::parse_timestamp;
use crate::error::{DatasetError, Result};
use crate::value::CellValue;

impl Dataset {
	/// Builds a dataset from a JSON array of objects.
	///
	/// Integers that fit in `i64` become [`CellValue::Integer`], other
	/// numbers become [`CellValue::Float`], and `null` becomes
	/// [`CellValue::Null`]. Nested arrays and objects are kept as their JSON
	/// text.
	///
	/// JSON has no date type, so a column whose non-null values are all
	/// strings that parse as timestamps is marked datetime-typed. The strings
	/// themselves are kept until [`Dataset::normalize_datetimes`] runs.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::Json`] for malformed JSON,
	/// [`DatasetError::JsonShape`] when the input is not an array of objects,
	/// and [`DatasetError::RecordShape`] when the objects disagree on their
	/// keys.
	///
	/// ```
	/// use reinhardt_dataset::{CellValue, Dataset};
	///
	/// let dataset = Dataset::from_json_records(
	///     r#"[{"Company": "Apple", "Value2": 12}, {"Company": "IBM", "Value2": null}]"#,
	/// )
	/// .unwrap();
	/// assert_eq!(dataset.rows()[0].get("Value2"), Some(&CellValue::Integer(12)));
	/// assert_eq!(dataset.rows()[1].get("Value2"), Some(&CellValue::Null));
	/// ```
	pub fn from_json_records(json: &str) -> Result<Self> {
		let parsed: Value = serde_json::from_str(json)?;
		let items = match parsed {
			Value::Array(items) => items,
			other => {
				return Err(DatasetError::JsonShape(format!(
					"expected an array, found {}",
					json_type_name(&other)
				)));
			}
		};

		let records = items
			.into_iter()
			.enumerate()
			.map(|(position, item)| match item {
				Value::Object(map) => Ok(map
					.into_iter()
					.map(|(key, value)| (key, json_to_cell(value)))
					.collect::<Vec<_>>()),
				other => Err(DatasetError::JsonShape(format!(
					"record {position} is {}, expected an object",
					json_type_name(&other)
				))),
			})
			.collect::<Result<Vec<_>>>()?;

		let dataset = Self::from_records(records)?;
		let inferred: Vec<String> = dataset
			.columns()
			.iter()
			.filter(|column| holds_only_timestamps(&dataset, column))
			.cloned()
			.collect();
		if !inferred.is_empty() {
			tracing::debug!(columns = ?inferred, "inferred datetime columns from JSON strings");
		}
		Ok(inferred
			.into_iter()
			.fold(dataset, |dataset, column| dataset.mark_datetime(column)))
	}
}

fn holds_only_timestamps(dataset: &Dataset, column: &str) -> bool {
	let Some(values) = dataset.column_values(column) else {
		return false;
	};
	let mut seen = false;
	for value in values {
		match value {
			CellValue::Null => {}
			CellValue::String(text) if parse_timestamp(text).is_some() => seen = true,
			_ => return false,
		}
	}
	seen
}

fn json_to_cell(value: Value) -> CellValue {
	match value {
		Value::Null => CellValue::Null,
		Value::Bool(b) => CellValue::Boolean(b),
		Value::Number(n) => match n.as_i64() {
			Some(i) => CellValue::Integer(i),
			None => n.as_f64().map_or(CellValue::Null, CellValue::Float),
		},
		Value::String(s) => CellValue::String(s),
		nested @ (Value::Array(_) | Value::Object(_)) => CellValue::String(nested.to_string()),
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_key_order_is_preserved() {
		let dataset =
			Dataset::from_json_records(r#"[{"Zeta": 1, "Alpha": 2.5, "Mid": true}]"#).unwrap();
		assert_eq!(dataset.columns(), ["Zeta", "Alpha", "Mid"]);
		assert_eq!(dataset.rows()[0].get("Alpha"), Some(&CellValue::Float(2.5)));
		assert_eq!(dataset.rows()[0].get("Mid"), Some(&CellValue::Boolean(true)));
	}

	#[rstest]
	fn test_nested_values_become_text() {
		let dataset = Dataset::from_json_records(r#"[{"tags": ["a", "b"]}]"#).unwrap();
		assert_eq!(
			dataset.rows()[0].get("tags"),
			Some(&CellValue::from(r#"["a","b"]"#))
		);
	}

	#[rstest]
	#[case(r#"{"a": 1}"#)]
	#[case(r#"[1, 2]"#)]
	fn test_wrong_shape(#[case] json: &str) {
		assert!(matches!(
			Dataset::from_json_records(json),
			Err(DatasetError::JsonShape(_))
		));
	}

	#[rstest]
	fn test_malformed_json() {
		assert!(matches!(
			Dataset::from_json_records("[{"),
			Err(DatasetError::Json(_))
		));
	}

	#[rstest]
	fn test_date_strings_mark_datetime_columns() {
		let mut dataset = Dataset::from_json_records(
			r#"[{"Date": "2018-01-05T00:00:00", "Note": "2018-01-05", "Code": "20180105"},
			    {"Date": "2018-01-07", "Note": "soon", "Code": 7}]"#,
		)
		.unwrap();
		assert_eq!(dataset.datetime_columns(), vec!["Date"]);

		dataset.normalize_datetimes();
		assert!(matches!(
			dataset.rows()[1].get("Date"),
			Some(CellValue::Timestamp(_))
		));
		assert_eq!(dataset.rows()[0].get("Note"), Some(&CellValue::from("2018-01-05")));
	}

	#[rstest]
	fn test_all_null_column_is_not_datetime() {
		let dataset = Dataset::from_json_records(r#"[{"Date": null}]"#).unwrap();
		assert!(dataset.datetime_columns().is_empty());
	}

	#[rstest]
	fn test_empty_array() {
		let dataset = Dataset::from_json_records("[]").unwrap();
		assert!(dataset.is_empty());
	}
}
