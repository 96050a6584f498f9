//! Dataset module.
//!
//! This module provides typed rows and datasets.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_frames::dataset::Dataset;
//!
//! let dataset = Dataset::from_json_records(r#"[{"Company": "Apple", "Value": 0.5}]"#).unwrap();
//! assert_eq!(dataset.columns(), ["Company", "Value"]);
//! ```

pub use reinhardt_dataset::*;
