//! Tables module.
//!
//! This module provides table building, style rules and formatting.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_frames::dataset::{CellValue, Dataset};
//! use reinhardt_frames::tables::{TableOptions, build_table};
//!
//! let dataset = Dataset::from_records(vec![vec![("Revenue", CellValue::from(1234567_i64))]]).unwrap();
//! let html = build_table(&dataset, TableOptions::new()).unwrap().render_to_string();
//! assert!(html.contains("<td>1,234,567</td>"));
//! ```

pub use reinhardt_tables::*;
