//! Error types for reinhardt-tables

use reinhardt_dataset::DatasetError;
use thiserror::Error;

/// Error type for table configuration and rendering
///
/// Every variant except [`TableError::Dataset`] and
/// [`TableError::MissingColumn`] is a configuration error: it points at a
/// rule or option the caller supplied, and is raised at the point of misuse
/// instead of producing a silently unstyled table.
#[derive(Debug, Error)]
pub enum TableError {
	/// A style rule produced an attribute name that cannot be emitted
	#[error("Style rule for column '{column}' produced invalid attribute name '{name}'")]
	InvalidAttribute {
		/// Column the rule is registered for
		column: String,
		/// The rejected attribute name
		name: String,
	},

	/// The float format specifier is not understood
	#[error("Invalid float format '{spec}': {reason}")]
	InvalidFloatFormat {
		/// The specifier as given
		spec: String,
		/// What is wrong with it
		reason: String,
	},

	/// The date pattern contains an unknown or unusable directive
	#[error("Invalid date format '{pattern}'")]
	InvalidDateFormat {
		/// The pattern as given
		pattern: String,
	},

	/// Settings could not be deserialized
	#[error("Invalid table settings: {0}")]
	InvalidSettings(#[from] toml::de::Error),

	/// A row lacks a column the table expects
	#[error("Row {row} has no column '{column}'")]
	MissingColumn {
		/// Zero-based row position
		row: usize,
		/// The missing column
		column: String,
	},

	/// The dataset could not be prepared
	#[error(transparent)]
	Dataset(#[from] DatasetError),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
