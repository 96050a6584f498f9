//! The dataset container

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::datetime::normalize_cell;
use crate::error::{DatasetError, Result};
use crate::row::{Row, Schema};
use crate::value::{CellValue, ValueKind};

/// Column name used for an unnamed index after [`Dataset::reset_index`].
pub const DEFAULT_INDEX_NAME: &str = "index";

/// Row labels kept beside the data columns.
///
/// When a dataset has no explicit index, its implicit index is the row
/// position `0..len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
	name: Option<String>,
	labels: Vec<CellValue>,
}

impl Index {
	/// Returns the index name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the labels.
	pub fn labels(&self) -> &[CellValue] {
		&self.labels
	}
}

/// An ordered sequence of rows sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
	schema: Arc<Schema>,
	rows: Vec<Row>,
	index: Option<Index>,
	datetime_columns: BTreeSet<String>,
}

impl Dataset {
	/// Creates an empty dataset with the given columns.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::DuplicateColumn`] when a name repeats.
	pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
		Ok(Self::with_schema(Arc::new(Schema::new(columns)?)))
	}

	fn with_schema(schema: Arc<Schema>) -> Self {
		Self {
			schema,
			rows: Vec::new(),
			index: None,
			datetime_columns: BTreeSet::new(),
		}
	}

	/// Appends a row of values in column order.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::RaggedRow`] when the value count differs from
	/// the column count, or [`DatasetError::IndexLength`] when an explicit
	/// index is attached, since the new row would have no label.
	pub fn push_row(&mut self, values: Vec<CellValue>) -> Result<()> {
		if let Some(index) = &self.index {
			return Err(DatasetError::IndexLength {
				expected: self.rows.len() + 1,
				found: index.labels.len(),
			});
		}
		let row = Row::with_row_position(Arc::clone(&self.schema), values, self.rows.len())?;
		self.rows.push(row);
		Ok(())
	}

	/// Builds a dataset from row-oriented records.
	///
	/// The first record fixes the column order. Every later record must name
	/// exactly the same columns, in any order.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::RecordShape`] when a record has a missing,
	/// extra or repeated column.
	pub fn from_records<R, K, V>(records: impl IntoIterator<Item = R>) -> Result<Self>
	where
		R: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<CellValue>,
	{
		let mut records = records.into_iter();
		let Some(first) = records.next() else {
			return Self::new(Vec::<String>::new());
		};
		let first = Row::from_pairs(first).map_err(|err| match err {
			DatasetError::DuplicateColumn(column) => DatasetError::RecordShape { row: 0, column },
			other => other,
		})?;
		let mut dataset = Self::with_schema(Arc::clone(first.schema()));
		dataset.rows.push(first);

		for (position, record) in records.enumerate() {
			let row = position + 1;
			let mut values: Vec<Option<CellValue>> = vec![None; dataset.schema.len()];
			for (key, value) in record {
				let key = key.into();
				let slot = dataset
					.schema
					.position(&key)
					.and_then(|i| values.get_mut(i))
					.filter(|slot| slot.is_none());
				match slot {
					Some(slot) => *slot = Some(value.into()),
					None => return Err(DatasetError::RecordShape { row, column: key }),
				}
			}
			let values = values
				.into_iter()
				.zip(dataset.schema.names())
				.map(|(value, column)| {
					value.ok_or_else(|| DatasetError::RecordShape {
						row,
						column: column.clone(),
					})
				})
				.collect::<Result<Vec<_>>>()?;
			dataset.push_row(values)?;
		}
		Ok(dataset)
	}

	/// Builds a dataset from column-oriented data.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::ColumnLength`] when the columns differ in
	/// length, or [`DatasetError::DuplicateColumn`] when a name repeats.
	pub fn from_columns<K>(columns: impl IntoIterator<Item = (K, Vec<CellValue>)>) -> Result<Self>
	where
		K: Into<String>,
	{
		let (names, columns): (Vec<String>, Vec<Vec<CellValue>>) = columns
			.into_iter()
			.map(|(name, values)| (name.into(), values))
			.unzip();
		let mut dataset = Self::new(names)?;
		let height = columns.first().map_or(0, Vec::len);
		for (name, values) in dataset.schema.names().iter().zip(&columns) {
			if values.len() != height {
				return Err(DatasetError::ColumnLength {
					column: name.clone(),
					expected: height,
					found: values.len(),
				});
			}
		}

		let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
		for _ in 0..height {
			let values = iters.iter_mut().filter_map(Iterator::next).collect();
			dataset.push_row(values)?;
		}
		Ok(dataset)
	}

	/// Attaches explicit row labels.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::IndexLength`] unless there is one label per row.
	pub fn with_index(
		mut self,
		name: Option<impl Into<String>>,
		labels: Vec<CellValue>,
	) -> Result<Self> {
		if labels.len() != self.rows.len() {
			return Err(DatasetError::IndexLength {
				expected: self.rows.len(),
				found: labels.len(),
			});
		}
		self.index = Some(Index {
			name: name.map(Into::into),
			labels,
		});
		Ok(self)
	}

	/// Declares a column as datetime-typed even if it holds no timestamps yet.
	pub fn mark_datetime(mut self, column: impl Into<String>) -> Self {
		self.datetime_columns.insert(column.into());
		self
	}

	/// Returns the column names in order.
	pub fn columns(&self) -> &[String] {
		self.schema.names()
	}

	/// Returns the rows in order.
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Returns the explicit index, if any.
	pub fn index(&self) -> Option<&Index> {
		self.index.as_ref()
	}

	/// Returns the number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns `true` if the dataset has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns `true` if the dataset has this column.
	pub fn has_column(&self, column: &str) -> bool {
		self.schema.position(column).is_some()
	}

	/// Returns the position of a column.
	pub fn column_index(&self, column: &str) -> Option<usize> {
		self.schema.position(column)
	}

	/// Iterates over one column's values, or returns `None` for an unknown
	/// column.
	pub fn column_values(&self, column: &str) -> Option<impl Iterator<Item = &CellValue>> {
		let position = self.schema.position(column)?;
		Some(self.rows.iter().filter_map(move |row| row.values().get(position)))
	}

	/// Returns the datetime-typed columns in column order.
	///
	/// A column is datetime-typed when it was declared with
	/// [`Dataset::mark_datetime`] or when any of its values is a timestamp.
	pub fn datetime_columns(&self) -> Vec<&str> {
		self.columns()
			.iter()
			.filter(|column| {
				self.datetime_columns.contains(column.as_str())
					|| self.column_values(column).is_some_and(|mut values| {
						values.any(|value| value.kind() == ValueKind::Timestamp)
					})
			})
			.map(String::as_str)
			.collect()
	}

	/// Moves the index into a regular first column.
	///
	/// The new column is named `label` when given, otherwise after the
	/// index name, or `"index"` for an unnamed index. Without an explicit
	/// index the row positions are used.
	///
	/// # Errors
	///
	/// Returns [`DatasetError::DuplicateColumn`] if the new column name is
	/// already taken, or [`DatasetError::IndexLength`] if the index does not
	/// have one label per row.
	pub fn reset_index(&self, label: Option<&str>) -> Result<Self> {
		let name = label
			.or_else(|| self.index.as_ref().and_then(Index::name))
			.unwrap_or(DEFAULT_INDEX_NAME)
			.to_string();
		let labels = match &self.index {
			Some(index) => index.labels.clone(),
			None => (0..self.rows.len()).map(CellValue::from).collect(),
		};
		if labels.len() != self.rows.len() {
			return Err(DatasetError::IndexLength {
				expected: self.rows.len(),
				found: labels.len(),
			});
		}

		let names = std::iter::once(name).chain(self.columns().iter().cloned());
		let mut dataset = Self::with_schema(Arc::new(Schema::new(names)?));
		dataset.datetime_columns = self.datetime_columns.clone();
		for (label, row) in labels.into_iter().zip(&self.rows) {
			let mut values = Vec::with_capacity(dataset.schema.len());
			values.push(label);
			values.extend(row.values().iter().cloned());
			dataset.push_row(values)?;
		}
		Ok(dataset)
	}

	/// Parses string values of datetime-typed columns into timestamps.
	///
	/// Unparsable values are kept as they are.
	pub fn normalize_datetimes(&mut self) {
		let positions: Vec<usize> = self
			.datetime_columns()
			.into_iter()
			.filter_map(|column| self.schema.position(column))
			.collect();
		if positions.is_empty() {
			return;
		}
		tracing::debug!(columns = positions.len(), "normalizing datetime columns");

		self.rows = std::mem::take(&mut self.rows)
			.into_iter()
			.map(|row| {
				row.map_values(|position, value| {
					if positions.contains(&position) {
						normalize_cell(value)
					} else {
						value
					}
				})
			})
			.collect();
	}
}
