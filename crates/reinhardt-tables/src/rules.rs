//! Per-column style and content rules
//!
//! A [`StyleRule`] turns a raw cell value into HTML attributes for the cell.
//! A [`ContentRule`] replaces the built-in content rendering of a column
//! entirely.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use reinhardt_dataset::{CellValue, Row};
use reinhardt_markup::Markup;

use crate::error::{Result, TableError};

/// HTML attributes produced by a style rule, e.g. `{"class": "table-success"}`.
pub type Attributes = BTreeMap<String, String>;

/// Builds an [`Attributes`] map from pairs.
///
/// ```
/// use reinhardt_tables::rules::attributes;
///
/// let attrs = attributes([("class", "table-danger")]);
/// assert_eq!(attrs.get("class").map(String::as_str), Some("table-danger"));
/// ```
pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	pairs
		.into_iter()
		.map(|(k, v)| (k.into(), v.into()))
		.collect()
}

type StylePredicate = Arc<dyn Fn(&CellValue) -> Option<Attributes> + Send + Sync>;

/// One entry of a [`StyleRule::MatchList`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry {
	/// Values this entry applies to
	pub values: Vec<CellValue>,
	/// Attributes applied when the cell value is one of `values`
	pub attributes: Attributes,
}

/// Styling logic for one column.
#[derive(Clone)]
pub enum StyleRule {
	/// Entries scanned in order; the first whose value set contains the cell
	/// value wins.
	MatchList(Vec<MatchEntry>),
	/// A function of the raw cell value. `None` means no styling.
	Predicate(StylePredicate),
}

impl StyleRule {
	/// Creates a first-match rule from `(values, attributes)` pairs.
	///
	/// ```
	/// use reinhardt_dataset::CellValue;
	/// use reinhardt_tables::rules::{StyleRule, attributes};
	///
	/// let rule = StyleRule::match_list([
	///     (vec!["Yahoo".into(), "Apple".into()], attributes([("style", "font-weight: bold")])),
	///     (vec!["Oracle".into()], attributes([("class", "table-danger")])),
	/// ]);
	/// let attrs = rule.evaluate("Company", &CellValue::from("Oracle")).unwrap();
	/// assert_eq!(attrs, attributes([("class", "table-danger")]));
	/// ```
	pub fn match_list(entries: impl IntoIterator<Item = (Vec<CellValue>, Attributes)>) -> Self {
		StyleRule::MatchList(
			entries
				.into_iter()
				.map(|(values, attributes)| MatchEntry { values, attributes })
				.collect(),
		)
	}

	/// Creates a rule from a function of the cell value.
	///
	/// ```
	/// use reinhardt_dataset::CellValue;
	/// use reinhardt_tables::rules::{StyleRule, attributes};
	///
	/// let rule = StyleRule::predicate(|value| match value.as_f64() {
	///     Some(v) if v > 10.0 => Some(attributes([("style", "background-color: #7FFFD4")])),
	///     _ => None,
	/// });
	/// assert!(rule.evaluate("Value2", &CellValue::from(5_i64)).unwrap().is_empty());
	/// ```
	pub fn predicate<F>(predicate: F) -> Self
	where
		F: Fn(&CellValue) -> Option<Attributes> + Send + Sync + 'static,
	{
		StyleRule::Predicate(Arc::new(predicate))
	}

	/// Computes the attributes for a cell value of `column`.
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidAttribute`] when the rule produces an
	/// attribute name that is not a valid HTML attribute name.
	pub fn evaluate(&self, column: &str, value: &CellValue) -> Result<Attributes> {
		let attrs = match self {
			StyleRule::MatchList(entries) => entries
				.iter()
				.find(|entry| entry.values.contains(value))
				.map(|entry| entry.attributes.clone())
				.unwrap_or_default(),
			StyleRule::Predicate(predicate) => predicate(value).unwrap_or_default(),
		};
		validate_attributes(column, &attrs)?;
		Ok(attrs)
	}

	/// Checks the attributes of a match list up front.
	///
	/// Predicates can only be checked when they run.
	pub(crate) fn validate(&self, column: &str) -> Result<()> {
		match self {
			StyleRule::MatchList(entries) => entries
				.iter()
				.try_for_each(|entry| validate_attributes(column, &entry.attributes)),
			StyleRule::Predicate(_) => Ok(()),
		}
	}
}

impl fmt::Debug for StyleRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StyleRule::MatchList(entries) => f.debug_tuple("MatchList").field(entries).finish(),
			StyleRule::Predicate(_) => f.debug_tuple("Predicate").field(&"<closure>").finish(),
		}
	}
}

/// Returns `true` for names made of ASCII alphanumerics, `-`, `_`, `:` and `.`.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& name
			.bytes()
			.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
}

fn validate_attributes(column: &str, attrs: &Attributes) -> Result<()> {
	match attrs.keys().find(|name| !is_valid_attribute_name(name)) {
		Some(name) => Err(TableError::InvalidAttribute {
			column: column.to_string(),
			name: name.clone(),
		}),
		None => Ok(()),
	}
}

type ContentFn = Arc<dyn Fn(&Row, &str) -> Markup + Send + Sync>;

/// Custom renderer for a column.
///
/// The function receives the whole row and the column name. Its output is
/// used as the cell content verbatim, without style attributes.
#[derive(Clone)]
pub struct ContentRule(ContentFn);

impl ContentRule {
	/// Creates a content rule.
	pub fn new<F>(render: F) -> Self
	where
		F: Fn(&Row, &str) -> Markup + Send + Sync + 'static,
	{
		Self(Arc::new(render))
	}

	/// Runs the rule.
	pub fn render(&self, row: &Row, column: &str) -> Markup {
		(self.0)(row, column)
	}
}

impl fmt::Debug for ContentRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ContentRule").field(&"<closure>").finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn bold() -> Attributes {
		attributes([("style", "font-weight: bold")])
	}

	#[rstest]
	fn test_match_list_first_match_wins() {
		let s1 = attributes([("class", "s1")]);
		let s2 = attributes([("class", "s2")]);
		let rule = StyleRule::match_list([
			(vec!["A".into(), "B".into()], s1.clone()),
			(vec!["B".into()], s2),
		]);
		assert_eq!(rule.evaluate("c", &CellValue::from("B")).unwrap(), s1);
	}

	#[rstest]
	fn test_match_list_no_match_is_empty() {
		let rule = StyleRule::match_list([(vec!["Apple".into()], bold())]);
		assert!(rule.evaluate("c", &CellValue::from("IBM")).unwrap().is_empty());
	}

	#[rstest]
	fn test_match_list_is_type_aware() {
		let rule = StyleRule::match_list([(vec![CellValue::from(1_i64)], bold())]);
		assert!(rule.evaluate("c", &CellValue::from(true)).unwrap().is_empty());
		assert_eq!(rule.evaluate("c", &CellValue::from(1_i64)).unwrap(), bold());
	}

	#[rstest]
	#[case(12, true)]
	#[case(5, false)]
	fn test_predicate(#[case] value: i64, #[case] styled: bool) {
		let rule = StyleRule::predicate(|v| match v.as_f64() {
			Some(x) if x > 10.0 => Some(attributes([("style", "background-color:#7FFFD4")])),
			_ => Some(Attributes::new()),
		});
		let attrs = rule.evaluate("Value2", &CellValue::from(value)).unwrap();
		assert_eq!(attrs.contains_key("style"), styled);
	}

	#[rstest]
	#[case("class", true)]
	#[case("data-row-id", true)]
	#[case("xml:lang", true)]
	#[case("", false)]
	#[case("on click", false)]
	#[case("style\"", false)]
	#[case("a=b", false)]
	fn test_attribute_names(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_attribute_name(name), valid);
	}

	#[rstest]
	fn test_predicate_with_bad_attribute_is_error() {
		let rule = StyleRule::predicate(|_| Some(attributes([("bad name", "x")])));
		let err = rule.evaluate("Value", &CellValue::from(1.0)).unwrap_err();
		assert!(matches!(
			err,
			TableError::InvalidAttribute { column, name } if column == "Value" && name == "bad name"
		));
	}

	#[rstest]
	fn test_validate_match_list_up_front() {
		let rule = StyleRule::match_list([(vec!["x".into()], attributes([("", "x")]))]);
		assert!(rule.validate("c").is_err());
		assert!(StyleRule::predicate(|_| None).validate("c").is_ok());
	}

	#[rstest]
	fn test_content_rule_receives_row_and_column() {
		let rule = ContentRule::new(|row, column| {
			Markup::text(format!("{column}={}", row.get(column).map(ToString::to_string).unwrap_or_default()))
		});
		let row = Row::from_pairs([("Company", "Apple")]).unwrap();
		assert_eq!(rule.render(&row, "Company").render_to_string(), "Company=Apple");
	}
}
