//! Markup module.
//!
//! This module provides the node tree tables render into.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_frames::markup::{IntoMarkup, MarkupElement};
//!
//! let cell = MarkupElement::new("td").child("Apple").into_markup();
//! assert_eq!(cell.render_to_string(), "<td>Apple</td>");
//! ```

pub use reinhardt_markup::*;
