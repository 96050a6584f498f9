//! Typed tabular datasets for Reinhardt data tables
//!
//! A [`Dataset`] is an ordered sequence of [`Row`]s sharing one set of named
//! columns. Every cell holds a [`CellValue`], a tagged value whose variant
//! decides how the table renderer formats it.
//!
//! # Example
//!
//! ```rust
//! use reinhardt_dataset::{CellValue, Dataset};
//!
//! let dataset = Dataset::from_records(vec![
//!     vec![("Company", CellValue::from("Apple")), ("Value", CellValue::from(0.5))],
//!     vec![("Company", CellValue::from("Oracle")), ("Value", CellValue::from(-0.3))],
//! ])
//! .unwrap();
//!
//! assert_eq!(dataset.columns(), ["Company", "Value"]);
//! assert_eq!(dataset.rows()[1].get("Company"), Some(&CellValue::from("Oracle")));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod dataset;
pub mod datetime;
pub mod error;
pub mod json;
pub mod row;
pub mod value;

pub use dataset::{Dataset, Index};
pub use error::{DatasetError, Result};
pub use row::{Row, Schema};
pub use value::{CellValue, ValueKind};
