//! Ordering of visible and link columns

use std::collections::HashMap;

/// Returns `true` if `column` carries the link suffix.
///
/// An empty suffix marks no column.
pub fn is_link_column(column: &str, suffix: &str) -> bool {
	!suffix.is_empty() && column.ends_with(suffix)
}

/// Resolves the ordered column list of a table.
///
/// Without an explicit list, the dataset order is used as is. With one, the
/// result holds the explicit columns that exist in the dataset, plus each
/// link column whose base is one of them. Columns are ordered by their first
/// position in the explicit list; link columns not listed follow in dataset
/// order. Unknown names in the explicit list are dropped.
///
/// Feeding the result back in as the dataset columns yields the same list.
///
/// ```
/// use reinhardt_tables::column::resolve_columns;
///
/// let dataset = ["Company", "Company_HREF", "Value", "Date"].map(String::from);
/// let explicit = ["Value", "Company", "Missing"].map(String::from);
/// assert_eq!(
///     resolve_columns(&dataset, Some(explicit.as_slice()), "_HREF"),
///     ["Value", "Company", "Company_HREF"],
/// );
/// ```
pub fn resolve_columns(
	dataset_columns: &[String],
	explicit: Option<&[String]>,
	suffix: &str,
) -> Vec<String> {
	let Some(explicit) = explicit else {
		return dataset_columns.to_vec();
	};

	let mut order: HashMap<&str, usize> = HashMap::with_capacity(explicit.len());
	for (position, name) in explicit.iter().enumerate() {
		order.entry(name.as_str()).or_insert(position);
	}

	let mut resolved: Vec<&String> = dataset_columns
		.iter()
		.filter(|column| {
			order.contains_key(column.as_str())
				|| link_base(column, suffix).is_some_and(|base| {
					order.contains_key(base) && dataset_columns.iter().any(|c| c == base)
				})
		})
		.collect();
	resolved.sort_by_key(|column| order.get(column.as_str()).copied().unwrap_or(usize::MAX));
	resolved.into_iter().cloned().collect()
}

/// Drops link columns from a resolved list.
pub fn visible_columns<'a>(resolved: &'a [String], suffix: &str) -> Vec<&'a str> {
	resolved
		.iter()
		.map(String::as_str)
		.filter(|column| !is_link_column(column, suffix))
		.collect()
}

fn link_base<'a>(column: &'a str, suffix: &str) -> Option<&'a str> {
	if suffix.is_empty() {
		return None;
	}
	column.strip_suffix(suffix)
}
