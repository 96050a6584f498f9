//! Table options and serializable settings
//!
//! [`TableOptions`] is the full configuration of a table build, rules
//! included. [`TableSettings`] is the part of it that can live in a TOML
//! file; rules are code and get attached afterwards.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use reinhardt_markup::Markup;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{DEFAULT_DATE_FORMAT, DEFAULT_FLOAT_FORMAT};
use crate::rules::{ContentRule, StyleRule};

/// Default suffix marking href columns.
pub const DEFAULT_LINK_COLUMN_SUFFIX: &str = "_HREF";

/// Default class list of the `<table>` element.
pub const DEFAULT_TABLE_CLASS: &str = "table table-striped";

/// Default inline style of the `<table>` element.
pub const DEFAULT_TABLE_STYLE: &str = "width: 75%";

/// Replaces the cleaned header label of a column.
pub type HeaderTransform = Arc<dyn Fn(&str) -> Markup + Send + Sync>;

/// Configuration of one table build.
///
/// ```
/// use reinhardt_tables::options::TableOptions;
/// use reinhardt_tables::rules::{StyleRule, attributes};
///
/// let options = TableOptions::new()
///     .columns(["Company", "Value"])
///     .float_format(",.1f")
///     .style_rule("Company", StyleRule::match_list([
///         (vec!["Apple".into()], attributes([("style", "font-weight: bold")])),
///     ]))
///     .markdown_column("Notes");
/// assert_eq!(options.float_format_spec(), ",.1f");
/// ```
#[derive(Clone)]
pub struct TableOptions {
	pub(crate) columns: Option<Vec<String>>,
	pub(crate) link_column_suffix: String,
	pub(crate) style_rules: HashMap<String, StyleRule>,
	pub(crate) float_format: String,
	pub(crate) index: bool,
	pub(crate) index_label: Option<String>,
	pub(crate) date_format: Option<String>,
	pub(crate) header_label_transform: Option<HeaderTransform>,
	pub(crate) link_target: String,
	pub(crate) markdown_columns: BTreeSet<String>,
	pub(crate) content_rules: HashMap<String, ContentRule>,
	pub(crate) apply_style_rules_to_headers: bool,
	pub(crate) table_class: String,
	pub(crate) table_style: String,
	pub(crate) log_cell_styles: bool,
}

impl TableOptions {
	/// Creates options with every default.
	pub fn new() -> Self {
		Self::from_settings(TableSettings::default())
	}

	/// Builds options from loaded settings. Rules start empty.
	pub fn from_settings(settings: TableSettings) -> Self {
		Self {
			columns: settings.columns,
			link_column_suffix: settings.link_column_suffix,
			style_rules: HashMap::new(),
			float_format: settings.float_format,
			index: settings.index,
			index_label: settings.index_label,
			date_format: settings.date_format.filter(|pattern| !pattern.is_empty()),
			header_label_transform: None,
			link_target: settings.link_target,
			markdown_columns: settings.markdown_columns,
			content_rules: HashMap::new(),
			apply_style_rules_to_headers: settings.apply_style_rules_to_headers,
			table_class: settings.table_class,
			table_style: settings.table_style,
			log_cell_styles: settings.log_cell_styles,
		}
	}

	/// Sets the explicit visible-column order.
	pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.columns = Some(columns.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the suffix that marks href columns. An empty suffix disables links.
	pub fn link_column_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.link_column_suffix = suffix.into();
		self
	}

	/// Registers the style rule of a column, replacing any previous one.
	pub fn style_rule(mut self, column: impl Into<String>, rule: StyleRule) -> Self {
		self.style_rules.insert(column.into(), rule);
		self
	}

	/// Sets the float specifier, e.g. `.2f` or `,.0f`.
	pub fn float_format(mut self, spec: impl Into<String>) -> Self {
		self.float_format = spec.into();
		self
	}

	/// Turns the dataset index into a leading column.
	pub fn index(mut self, index: bool) -> Self {
		self.index = index;
		self
	}

	/// Names the column produced by [`TableOptions::index`].
	pub fn index_label(mut self, label: impl Into<String>) -> Self {
		self.index_label = Some(label.into());
		self
	}

	/// Sets the date pattern. `None` or an empty pattern renders timestamps
	/// with their default string form.
	pub fn date_format(mut self, pattern: Option<impl Into<String>>) -> Self {
		self.date_format = pattern.map(Into::into).filter(|p: &String| !p.is_empty());
		self
	}

	/// Replaces header labels with the output of `transform`.
	pub fn header_label_transform<F>(mut self, transform: F) -> Self
	where
		F: Fn(&str) -> Markup + Send + Sync + 'static,
	{
		self.header_label_transform = Some(Arc::new(transform));
		self
	}

	/// Sets the `target` of generated anchors.
	pub fn link_target(mut self, target: impl Into<String>) -> Self {
		self.link_target = target.into();
		self
	}

	/// Renders a column's values as markdown.
	pub fn markdown_column(mut self, column: impl Into<String>) -> Self {
		self.markdown_columns.insert(column.into());
		self
	}

	/// Registers the content rule of a column, replacing any previous one.
	pub fn content_rule(mut self, column: impl Into<String>, rule: ContentRule) -> Self {
		self.content_rules.insert(column.into(), rule);
		self
	}

	/// Uses style rules to pick header classes.
	pub fn apply_style_rules_to_headers(mut self, apply: bool) -> Self {
		self.apply_style_rules_to_headers = apply;
		self
	}

	/// Sets the class list of the `<table>` element.
	pub fn table_class(mut self, class: impl Into<String>) -> Self {
		self.table_class = class.into();
		self
	}

	/// Sets the inline style of the `<table>` element.
	pub fn table_style(mut self, style: impl Into<String>) -> Self {
		self.table_style = style.into();
		self
	}

	/// Emits a `trace` event for every styled cell.
	pub fn log_cell_styles(mut self, enabled: bool) -> Self {
		self.log_cell_styles = enabled;
		self
	}

	/// Returns the float specifier as given.
	pub fn float_format_spec(&self) -> &str {
		&self.float_format
	}

	/// Returns the date pattern, if timestamps are formatted.
	pub fn date_format_pattern(&self) -> Option<&str> {
		self.date_format.as_deref()
	}

	/// Returns the link column suffix.
	pub fn link_suffix(&self) -> &str {
		&self.link_column_suffix
	}
}

impl Default for TableOptions {
	fn default() -> Self {
		Self::new()
	}
}

impl From<TableSettings> for TableOptions {
	fn from(settings: TableSettings) -> Self {
		Self::from_settings(settings)
	}
}

impl fmt::Debug for TableOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut style_columns: Vec<&String> = self.style_rules.keys().collect();
		style_columns.sort();
		let mut content_columns: Vec<&String> = self.content_rules.keys().collect();
		content_columns.sort();
		f.debug_struct("TableOptions")
			.field("columns", &self.columns)
			.field("link_column_suffix", &self.link_column_suffix)
			.field("style_rules", &style_columns)
			.field("float_format", &self.float_format)
			.field("index", &self.index)
			.field("index_label", &self.index_label)
			.field("date_format", &self.date_format)
			.field(
				"header_label_transform",
				&self.header_label_transform.as_ref().map(|_| "<closure>"),
			)
			.field("link_target", &self.link_target)
			.field("markdown_columns", &self.markdown_columns)
			.field("content_rules", &content_columns)
			.field(
				"apply_style_rules_to_headers",
				&self.apply_style_rules_to_headers,
			)
			.field("table_class", &self.table_class)
			.field("table_style", &self.table_style)
			.field("log_cell_styles", &self.log_cell_styles)
			.finish()
	}
}

/// The file-backed part of [`TableOptions`].
///
/// ```
/// use reinhardt_tables::options::TableSettings;
///
/// let settings = TableSettings::from_toml_str(r#"
/// columns = ["Company", "Value"]
/// float_format = ".3f"
/// markdown_columns = ["Notes"]
/// "#).unwrap();
/// assert_eq!(settings.float_format, ".3f");
/// assert_eq!(settings.link_column_suffix, "_HREF");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSettings {
	/// Explicit visible-column order
	#[serde(default)]
	pub columns: Option<Vec<String>>,

	/// Suffix marking href columns
	#[serde(default = "default_link_column_suffix")]
	pub link_column_suffix: String,

	/// Float specifier
	#[serde(default = "default_float_format")]
	pub float_format: String,

	/// Turn the dataset index into a column
	#[serde(default)]
	pub index: bool,

	/// Name of the index column
	#[serde(default)]
	pub index_label: Option<String>,

	/// Date pattern; empty disables date formatting
	#[serde(default = "default_date_format")]
	pub date_format: Option<String>,

	/// Anchor target
	#[serde(default)]
	pub link_target: String,

	/// Columns rendered as markdown
	#[serde(default)]
	pub markdown_columns: BTreeSet<String>,

	/// Use style rules for header classes
	#[serde(default)]
	pub apply_style_rules_to_headers: bool,

	/// Table class list
	#[serde(default = "default_table_class")]
	pub table_class: String,

	/// Table inline style
	#[serde(default = "default_table_style")]
	pub table_style: String,

	/// Emit a trace event per styled cell
	#[serde(default)]
	pub log_cell_styles: bool,
}

fn default_link_column_suffix() -> String {
	DEFAULT_LINK_COLUMN_SUFFIX.to_string()
}

fn default_float_format() -> String {
	DEFAULT_FLOAT_FORMAT.to_string()
}

fn default_date_format() -> Option<String> {
	Some(DEFAULT_DATE_FORMAT.to_string())
}

fn default_table_class() -> String {
	DEFAULT_TABLE_CLASS.to_string()
}

fn default_table_style() -> String {
	DEFAULT_TABLE_STYLE.to_string()
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			columns: None,
			link_column_suffix: default_link_column_suffix(),
			float_format: default_float_format(),
			index: false,
			index_label: None,
			date_format: default_date_format(),
			link_target: String::new(),
			markdown_columns: BTreeSet::new(),
			apply_style_rules_to_headers: false,
			table_class: default_table_class(),
			table_style: default_table_style(),
			log_cell_styles: false,
		}
	}
}

impl TableSettings {
	/// Loads settings from TOML text. Missing keys take their defaults.
	///
	/// # Errors
	///
	/// Returns [`crate::TableError::InvalidSettings`] for malformed TOML,
	/// wrong value types, or unknown keys.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TableError;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let options = TableOptions::new();
		assert_eq!(options.link_suffix(), "_HREF");
		assert_eq!(options.float_format_spec(), ".2f");
		assert_eq!(options.date_format_pattern(), Some("%Y-%m-%d"));
		assert_eq!(options.table_class, "table table-striped");
		assert_eq!(options.table_style, "width: 75%");
		assert!(!options.apply_style_rules_to_headers);
		assert!(!options.index);
		assert!(options.columns.is_none());
	}

	#[rstest]
	fn test_empty_toml_is_default() {
		assert_eq!(
			TableSettings::from_toml_str("").unwrap(),
			TableSettings::default()
		);
	}

	#[rstest]
	fn test_toml_overrides() {
		let settings = TableSettings::from_toml_str(
			r#"
columns = ["Date", "Company"]
link_column_suffix = "_URL"
index = true
index_label = "Row"
date_format = "%d/%m/%Y"
link_target = "_blank"
apply_style_rules_to_headers = true
table_class = "table"
log_cell_styles = true
"#,
		)
		.unwrap();
		let options = TableOptions::from(settings);
		assert_eq!(
			options.columns,
			Some(vec!["Date".to_string(), "Company".to_string()])
		);
		assert_eq!(options.link_suffix(), "_URL");
		assert_eq!(options.index_label.as_deref(), Some("Row"));
		assert_eq!(options.date_format_pattern(), Some("%d/%m/%Y"));
		assert_eq!(options.link_target, "_blank");
		assert!(options.apply_style_rules_to_headers);
		assert_eq!(options.table_style, "width: 75%");
		assert!(options.log_cell_styles);
	}

	#[rstest]
	fn test_empty_date_format_disables_dates() {
		let settings = TableSettings::from_toml_str(r#"date_format = """#).unwrap();
		assert_eq!(TableOptions::from(settings).date_format_pattern(), None);
		assert_eq!(
			TableOptions::new()
				.date_format(Some(""))
				.date_format_pattern(),
			None
		);
		assert_eq!(
			TableOptions::new()
				.date_format(None::<String>)
				.date_format_pattern(),
			None
		);
	}

	#[rstest]
	#[case("colums = [\"a\"]")]
	#[case("index = \"yes\"")]
	#[case("columns = ")]
	fn test_bad_toml_is_rejected(#[case] source: &str) {
		assert!(matches!(
			TableSettings::from_toml_str(source),
			Err(TableError::InvalidSettings(_))
		));
	}

	#[rstest]
	fn test_rules_replace_by_column() {
		let options = TableOptions::new()
			.style_rule("Value", StyleRule::predicate(|_| None))
			.style_rule("Value", StyleRule::MatchList(Vec::new()))
			.content_rule("Company", ContentRule::new(|_, _| Markup::empty()));
		assert_eq!(options.style_rules.len(), 1);
		assert!(matches!(
			options.style_rules.get("Value"),
			Some(StyleRule::MatchList(_))
		));
		assert!(format!("{options:?}").contains("Company"));
	}
}
