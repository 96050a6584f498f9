//! Error types for reinhardt-dataset

use thiserror::Error;

/// Error type for dataset construction
#[derive(Debug, Error)]
pub enum DatasetError {
	/// The same column name appears twice
	#[error("Duplicate column name: {0}")]
	DuplicateColumn(String),

	/// A row does not have one value per column
	#[error("Row {row} has {found} values but the dataset has {expected} columns")]
	RaggedRow {
		/// Zero-based row position
		row: usize,
		/// Number of dataset columns
		expected: usize,
		/// Number of values supplied
		found: usize,
	},

	/// A record is missing a column or names an unknown one
	#[error("Record {row} does not match the dataset columns at '{column}'")]
	RecordShape {
		/// Zero-based record position
		row: usize,
		/// The offending column name
		column: String,
	},

	/// Columns of a column-oriented input have different lengths
	#[error("Column '{column}' has {found} values, expected {expected}")]
	ColumnLength {
		/// The offending column name
		column: String,
		/// Length of the first column
		expected: usize,
		/// Length of this column
		found: usize,
	},

	/// The index does not have one label per row
	#[error("Index has {found} labels but the dataset has {expected} rows")]
	IndexLength {
		/// Number of rows
		expected: usize,
		/// Number of index labels
		found: usize,
	},

	/// JSON input could not be parsed
	#[error("Invalid JSON records: {0}")]
	Json(#[from] serde_json::Error),

	/// JSON input parsed but is not an array of objects
	#[error("JSON records must be an array of objects: {0}")]
	JsonShape(String),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
