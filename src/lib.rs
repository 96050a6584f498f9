//! # Reinhardt Frames
//!
//! Styled HTML tables from tabular datasets.
//!
//! Reinhardt Frames turns a dataset into a markup tree for a table, adding
//! conditional cell styling, hyperlinks taken from sibling `_HREF` columns,
//! custom per-column renderers, markdown cells and type-aware number and
//! date formatting.
//!
//! ## Feature Flags
//!
//! - `tables` (default) - Table building, includes `minimal`
//! - `minimal` - Markup tree and datasets only
//! - `markup` - Markup tree, HTML serialization and markdown
//! - `dataset` - Typed datasets
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_frames::prelude::*;
//!
//! let dataset = Dataset::from_records(vec![
//!     vec![("Company", CellValue::from("Apple")), ("Value", CellValue::from(0.5))],
//!     vec![("Company", CellValue::from("Oracle")), ("Value", CellValue::from(-0.25))],
//! ])
//! .unwrap();
//!
//! let options = TableOptions::new().style_rule(
//!     "Value",
//!     StyleRule::predicate(|v| match v.as_f64() {
//!         Some(x) if x > 0.0 => Some(attributes([("class", "table-success")])),
//!         Some(x) if x < 0.0 => Some(attributes([("class", "table-danger")])),
//!         _ => None,
//!     }),
//! );
//!
//! let table = TableBuilder::new(options).unwrap().build(&dataset).unwrap();
//! let html = table.render_to_string();
//! assert!(html.contains("<td class=\"table-success\">0.50</td>"));
//! assert!(html.contains("<td class=\"table-danger\">-0.25</td>"));
//! ```

#![warn(missing_docs)]

#[cfg(feature = "dataset")]
pub mod dataset;
#[cfg(feature = "markup")]
pub mod markup;
#[cfg(feature = "tables")]
pub mod tables;

/// Prelude module for convenient imports
pub mod prelude {
	#[cfg(feature = "dataset")]
	pub use crate::dataset::{CellValue, Dataset, DatasetError, Row};

	#[cfg(feature = "markup")]
	pub use crate::markup::{IntoMarkup, Markup, MarkupElement};

	#[cfg(feature = "tables")]
	pub use crate::tables::{
		Attributes, ContentRule, StyleRule, TableBuilder, TableError, TableOptions, TableSettings,
		attributes, build_table,
	};
}
