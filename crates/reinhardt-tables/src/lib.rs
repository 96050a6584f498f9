//! Styled HTML tables from tabular datasets for Reinhardt
//!
//! This crate renders a [`reinhardt_dataset::Dataset`] into a
//! [`reinhardt_markup::Markup`] table with per-cell conditional styling,
//! hyperlinks synthesized from sibling href columns, per-column custom
//! renderers, markdown columns and type-aware formatting.
//!
//! # Features
//!
//! - **Style rules**: first-match value lists or predicates producing cell attributes
//! - **Content rules**: custom renderers that take over a column entirely
//! - **Link columns**: `Company` + `Company_HREF` renders an anchor in the `Company` cell
//! - **Markdown columns**: cell text rendered through CommonMark
//! - **Formatting**: float specifiers, thousands separators, strftime dates
//! - **Settings**: the non-code options load from TOML
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableBuilder] --> B[TableOptions]
//!     B --> C[StyleRule]
//!     B --> D[ContentRule]
//!     B --> E[TableSettings]
//!     A --> F[resolve_columns]
//!     A --> G[RowRenderer]
//!     G --> H[FloatFormat]
//!     G --> I[DateFormat]
//!     G --> J[markdown]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_dataset::{CellValue, Dataset};
//! use reinhardt_tables::{StyleRule, TableOptions, attributes, build_table};
//!
//! let dataset = Dataset::from_records(vec![
//!     vec![("Company", CellValue::from("Apple")), ("Value2", CellValue::from(12_i64))],
//!     vec![("Company", CellValue::from("Oracle")), ("Value2", CellValue::from(5_i64))],
//! ])
//! .unwrap();
//!
//! let options = TableOptions::new().style_rule(
//!     "Value2",
//!     StyleRule::predicate(|v| match v.as_f64() {
//!         Some(x) if x > 10.0 => Some(attributes([("style", "background-color:#7FFFD4")])),
//!         _ => None,
//!     }),
//! );
//!
//! let html = build_table(&dataset, options).unwrap().render_to_string();
//! assert!(html.contains("<td style=\"background-color:#7FFFD4\">12</td>"));
//! assert!(html.contains("<td>5</td>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod format;
pub mod options;
pub mod row;
pub mod rules;
pub mod table;

// Re-exports for convenience
pub use column::{clean_header_name, resolve_columns};
pub use error::{Result, TableError};
pub use format::{DateFormat, FloatFormat, format_integer};
pub use options::{HeaderTransform, TableOptions, TableSettings};
pub use row::RowRenderer;
pub use rules::{Attributes, ContentRule, StyleRule, attributes};
pub use table::{TableBuilder, build_table};
