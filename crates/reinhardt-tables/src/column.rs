//! Column resolution and header labels
//!
//! A dataset column `C` is link-bearing when a sibling named `C` plus the
//! link suffix exists. The sibling supplies the href and never becomes a
//! visible column of its own.

pub mod header;
pub mod resolve;

pub use header::{clean_header_name, header_class};
pub use resolve::{is_link_column, resolve_columns, visible_columns};
