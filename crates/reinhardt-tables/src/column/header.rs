//! Header labels and header classes

use reinhardt_dataset::CellValue;

use crate::error::Result;
use crate::rules::StyleRule;

/// Turns a column name into a header label.
///
/// Underscores become spaces, then each run of letters is title-cased: its
/// first letter upper-cased and the rest lower-cased.
///
/// ```
/// use reinhardt_tables::column::clean_header_name;
///
/// assert_eq!(clean_header_name("market_cap"), "Market Cap");
/// assert_eq!(clean_header_name("VALUE2"), "Value2");
/// ```
pub fn clean_header_name(name: &str) -> String {
	let mut label = String::with_capacity(name.len());
	let mut previous_is_letter = false;
	for ch in name.chars() {
		let ch = if ch == '_' { ' ' } else { ch };
		if ch.is_alphabetic() {
			if previous_is_letter {
				label.extend(ch.to_lowercase());
			} else {
				label.extend(ch.to_uppercase());
			}
			previous_is_letter = true;
		} else {
			label.push(ch);
			previous_is_letter = false;
		}
	}
	label
}

/// Computes the class of a header cell from the column's style rule.
///
/// The rule is evaluated with the column name standing in for a cell value.
/// The `class` attribute of the result is used, with `className` accepted
/// as an alias.
///
/// # Errors
///
/// Propagates [`crate::TableError::InvalidAttribute`] from the rule.
pub fn header_class(rule: &StyleRule, column: &str) -> Result<Option<String>> {
	let mut attrs = rule.evaluate(column, &CellValue::from(column))?;
	Ok(attrs
		.remove("class")
		.or_else(|| attrs.remove("className"))
		.filter(|class| !class.is_empty()))
}
