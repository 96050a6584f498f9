//! Markup tree for Reinhardt data tables
//!
//! Table rendering produces a tree of [`Markup`] nodes rather than a byte
//! stream. Hosts embed the tree directly into their own component trees, or
//! call [`Markup::render_to_string`] for server-side output.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_markup::{IntoMarkup, MarkupElement};
//!
//! let cell = MarkupElement::new("td")
//!     .attr("class", "table-success")
//!     .child("0.50")
//!     .into_markup();
//!
//! assert_eq!(cell.render_to_string(), "<td class=\"table-success\">0.50</td>");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod markdown;
pub mod markup;

pub use markup::{BOOLEAN_ATTRS, IntoMarkup, Markup, MarkupElement, html_escape, is_boolean_attr_truthy};
