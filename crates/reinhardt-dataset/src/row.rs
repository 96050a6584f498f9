//! Rows and the column schema they share

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DatasetError, Result};
use crate::value::CellValue;

/// Ordered column names with a name-to-position lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
	names: Vec<String>,
	positions: HashMap<String, usize>,
}

impl Schema {
	/// Creates a schema, rejecting duplicate names.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::DuplicateColumn`] when a name repeats.
	pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
		let names: Vec<String> = names.into_iter().map(Into::into).collect();
		let mut positions = HashMap::with_capacity(names.len());
		for (position, name) in names.iter().enumerate() {
			if positions.insert(name.clone(), position).is_some() {
				return Err(DatasetError::DuplicateColumn(name.clone()));
			}
		}
		Ok(Self { names, positions })
	}

	/// Returns the column names in order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Returns the position of a column.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.positions.get(name).copied()
	}

	/// Returns the number of columns.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns `true` if there are no columns.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// One dataset row: a value per schema column.
///
/// Rows are immutable. Lookups by a column the schema does not contain
/// return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
	schema: Arc<Schema>,
	values: Vec<CellValue>,
}

impl Row {
	/// Creates a row over a shared schema.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::RaggedRow`] (reported as row 0) when the
	/// value count differs from the schema length.
	pub fn new(schema: Arc<Schema>, values: Vec<CellValue>) -> Result<Self> {
		if values.len() != schema.len() {
			return Err(DatasetError::RaggedRow {
				row: 0,
				expected: schema.len(),
				found: values.len(),
			});
		}
		Ok(Self { schema, values })
	}

	/// Builds a standalone row from `(column, value)` pairs.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::DuplicateColumn`] when a column repeats.
	pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
	where
		K: Into<String>,
		V: Into<CellValue>,
	{
		let (names, values): (Vec<String>, Vec<CellValue>) = pairs
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.unzip();
		let schema = Arc::new(Schema::new(names)?);
		Ok(Self { schema, values })
	}

	pub(crate) fn with_row_position(
		schema: Arc<Schema>,
		values: Vec<CellValue>,
		row: usize,
	) -> Result<Self> {
		Self::new(schema, values).map_err(|err| match err {
			DatasetError::RaggedRow {
				expected, found, ..
			} => DatasetError::RaggedRow {
				row,
				expected,
				found,
			},
			other => other,
		})
	}

	/// Returns the value of a column.
	pub fn get(&self, column: &str) -> Option<&CellValue> {
		self.schema
			.position(column)
			.and_then(|position| self.values.get(position))
	}

	/// Returns `true` if the row's schema has this column.
	pub fn contains(&self, column: &str) -> bool {
		self.schema.position(column).is_some()
	}

	/// Returns the column names.
	pub fn columns(&self) -> &[String] {
		self.schema.names()
	}

	/// Returns the values in column order.
	pub fn values(&self) -> &[CellValue] {
		&self.values
	}

	/// Iterates `(column, value)` pairs in column order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
		self.schema
			.names()
			.iter()
			.map(String::as_str)
			.zip(self.values.iter())
	}

	pub(crate) fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	/// Rewrites each value in place; the width cannot change.
	pub(crate) fn map_values(self, mut f: impl FnMut(usize, CellValue) -> CellValue) -> Self {
		let values = self
			.values
			.into_iter()
			.enumerate()
			.map(|(position, value)| f(position, value))
			.collect();
		Self {
			schema: self.schema,
			values,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_schema_rejects_duplicates() {
		let err = Schema::new(["Company", "Value", "Company"]).unwrap_err();
		assert!(matches!(err, DatasetError::DuplicateColumn(name) if name == "Company"));
	}

	#[rstest]
	fn test_row_lookup() {
		let row = Row::from_pairs([("Company", CellValue::from("Apple")), ("Value", 0.5.into())])
			.unwrap();
		assert_eq!(row.get("Value"), Some(&CellValue::Float(0.5)));
		assert_eq!(row.get("Missing"), None);
		assert!(row.contains("Company"));
		assert_eq!(row.columns(), ["Company", "Value"]);
	}

	#[rstest]
	fn test_row_iter_keeps_order() {
		let row = Row::from_pairs([("b", 1_i64), ("a", 2_i64)]).unwrap();
		let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["b", "a"]);
	}

	#[rstest]
	fn test_row_new_rejects_wrong_width() {
		let schema = Arc::new(Schema::new(["a", "b"]).unwrap());
		let err = Row::new(schema, vec![CellValue::Null]).unwrap_err();
		assert!(matches!(
			err,
			DatasetError::RaggedRow {
				expected: 2,
				found: 1,
				..
			}
		));
	}
}
