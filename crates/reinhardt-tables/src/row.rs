//! Per-row cell rendering
//!
//! [`RowRenderer`] decides, for each visible column of a row, which
//! attributes the cell carries and how its content is represented. Content
//! is chosen in a fixed priority order:
//!
//! 1. a [`ContentRule`](crate::rules::ContentRule) registered for the column
//! 2. a link, when the row has an href in the column's link sibling
//! 3. markdown, for columns flagged as markdown
//! 4. floats, through the configured [`FloatFormat`]
//! 5. integers, with thousands separators
//! 6. timestamps, through the configured [`DateFormat`]
//! 7. strings, as is
//! 8. anything else, through its `Display` form without attributes

use std::collections::HashSet;

use chrono::NaiveDateTime;
use reinhardt_dataset::{CellValue, Row};
use reinhardt_markup::{IntoMarkup, Markup, MarkupElement, markdown};

use crate::column::is_link_column;
use crate::error::{Result, TableError};
use crate::format::{DateFormat, FloatFormat, format_integer};
use crate::options::TableOptions;
use crate::rules::Attributes;

/// Renders table rows. Holds only borrowed, read-only configuration, so one
/// renderer serves every row of a build.
#[derive(Debug, Clone, Copy)]
pub struct RowRenderer<'a> {
	options: &'a TableOptions,
	float_format: &'a FloatFormat,
	date_format: Option<&'a DateFormat>,
}

/// What a cell shows, before it becomes markup.
enum CellContent<'v> {
	Custom(Markup),
	Link { label: String, href: String },
	Markdown(String),
	Float(f64),
	Integer(i64),
	Timestamp(&'v NaiveDateTime, &'v DateFormat),
	Text(&'v str),
	Fallback(&'v CellValue),
}

impl<'a> RowRenderer<'a> {
	/// Creates a renderer over parsed formats and the options they came from.
	pub fn new(
		options: &'a TableOptions,
		float_format: &'a FloatFormat,
		date_format: Option<&'a DateFormat>,
	) -> Self {
		Self {
			options,
			float_format,
			date_format,
		}
	}

	/// Renders one `<tr>`.
	///
	/// `columns` is the resolved column list. Link columns in it are used
	/// as href sources and never rendered as cells.
	///
	/// # Errors
	///
	/// Returns [`TableError::MissingColumn`] when the row lacks a visible
	/// column, and [`TableError::InvalidAttribute`] when a style rule
	/// produces a bad attribute name.
	pub fn render_row(&self, row: &Row, position: usize, columns: &[String]) -> Result<Markup> {
		let suffix = self.options.link_column_suffix.as_str();
		let link_columns: HashSet<&str> = columns
			.iter()
			.map(String::as_str)
			.filter(|column| is_link_column(column, suffix))
			.collect();

		let cells = columns
			.iter()
			.filter(|column| !is_link_column(column, suffix))
			.map(|column| self.render_cell(row, position, column, &link_columns))
			.collect::<Result<Vec<_>>>()?;
		Ok(MarkupElement::new("tr").children(cells).into_markup())
	}

	fn render_cell(
		&self,
		row: &Row,
		position: usize,
		column: &str,
		link_columns: &HashSet<&str>,
	) -> Result<Markup> {
		let value = row.get(column).ok_or_else(|| TableError::MissingColumn {
			row: position,
			column: column.to_string(),
		})?;
		let attrs = self.cell_attributes(column, value)?;

		let cell = match self.content(row, column, value, link_columns) {
			CellContent::Custom(content) => MarkupElement::new("td").child(content),
			CellContent::Link { label, href } => styled_td(attrs).child(self.anchor(label, href)),
			CellContent::Markdown(source) => {
				MarkupElement::new("td").child(markdown::to_markup(&source))
			}
			CellContent::Float(f) => styled_td(attrs).child(self.float_format.format(f)),
			CellContent::Integer(i) => styled_td(attrs).child(format_integer(i)),
			CellContent::Timestamp(ts, format) => styled_td(attrs).child(format.format(ts)),
			CellContent::Text(text) => styled_td(attrs).child(text.to_string()),
			CellContent::Fallback(value) => MarkupElement::new("td").child(value.to_string()),
		};
		Ok(cell.into_markup())
	}

	fn cell_attributes(&self, column: &str, value: &CellValue) -> Result<Attributes> {
		let Some(rule) = self.options.style_rules.get(column) else {
			return Ok(Attributes::new());
		};
		let attrs = rule.evaluate(column, value)?;
		if self.options.log_cell_styles && !attrs.is_empty() {
			tracing::trace!(column, value = %value, attrs = ?attrs, "styled table cell");
		}
		Ok(attrs)
	}

	fn content<'v>(
		&'v self,
		row: &Row,
		column: &str,
		value: &'v CellValue,
		link_columns: &HashSet<&str>,
	) -> CellContent<'v> {
		if let Some(rule) = self.options.content_rules.get(column) {
			return CellContent::Custom(rule.render(row, column));
		}
		if let Some(href) = self.href(row, column, link_columns) {
			return CellContent::Link {
				label: value.to_string(),
				href,
			};
		}
		if self.options.markdown_columns.contains(column) {
			return CellContent::Markdown(value.to_string());
		}
		match value {
			CellValue::Float(f) if f.is_nan() => CellContent::Float(0.0),
			CellValue::Float(f) => CellContent::Float(*f),
			CellValue::Integer(i) => CellContent::Integer(*i),
			CellValue::Timestamp(ts) => match self.date_format {
				Some(format) => CellContent::Timestamp(ts, format),
				None => CellContent::Fallback(value),
			},
			CellValue::String(text) => CellContent::Text(text),
			CellValue::Boolean(_) | CellValue::Null => CellContent::Fallback(value),
		}
	}

	/// Looks up the href of `column`. Missing values mean no link.
	fn href(&self, row: &Row, column: &str, link_columns: &HashSet<&str>) -> Option<String> {
		let suffix = &self.options.link_column_suffix;
		if suffix.is_empty() {
			return None;
		}
		let href_column = format!("{column}{suffix}");
		if !link_columns.contains(href_column.as_str()) {
			return None;
		}
		match row.get(&href_column)? {
			value if value.is_missing() => None,
			CellValue::String(href) => Some(href.clone()),
			other => Some(other.to_string()),
		}
	}

	/// Builds the anchor of a link cell.
	///
	/// HTTP(S) hrefs navigate. Anything else renders a disabled anchor that
	/// keeps the value in `data-href`.
	fn anchor(&self, label: String, href: String) -> MarkupElement {
		if is_http_url(&href) {
			MarkupElement::new("a")
				.attr("href", href)
				.attr("target", self.options.link_target.clone())
				.child(label)
		} else {
			MarkupElement::new("a")
				.attr("class", "disabled")
				.attr("aria-disabled", "true")
				.attr("data-href", href)
				.child(label)
		}
	}
}

fn styled_td(attrs: Attributes) -> MarkupElement {
	MarkupElement::new("td").attrs(attrs)
}

/// Returns `true` for `http://` and `https://` URLs, in any letter case.
pub fn is_http_url(href: &str) -> bool {
	let lower = href.get(..8).unwrap_or(href).to_ascii_lowercase();
	lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::{ContentRule, StyleRule, attributes};
	use chrono::NaiveDate;
	use rstest::{fixture, rstest};

	fn render(options: &TableOptions, row: &Row, columns: &[&str]) -> Result<Markup> {
		let float_format = FloatFormat::parse(&options.float_format)?;
		let date_format = options
			.date_format
			.as_deref()
			.map(DateFormat::parse)
			.transpose()?;
		let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
		RowRenderer::new(options, &float_format, date_format.as_ref()).render_row(row, 0, &columns)
	}

	fn cell_html(options: &TableOptions, row: &Row, column: &str) -> String {
		let markup = render(options, row, &[column]).unwrap();
		markup.find_all("td")[0].clone().into_markup().render_to_string()
	}

	#[fixture]
	fn apple() -> Row {
		Row::from_pairs([
			("Company", CellValue::from("Apple")),
			("Company_HREF", CellValue::from("https://apple.com")),
			("Value", CellValue::from(0.5)),
		])
		.unwrap()
	}

	#[rstest]
	fn test_link_cell_carries_style(apple: Row) {
		let options = TableOptions::new()
			.link_target("_blank")
			.style_rule(
				"Company",
				StyleRule::match_list([(vec!["Apple".into()], attributes([("class", "bold")]))]),
			);
		let markup = render(&options, &apple, &["Company", "Company_HREF", "Value"]).unwrap();
		assert_eq!(markup.find_all("td").len(), 2);
		assert_eq!(
			markup.find_all("td")[0].clone().into_markup().render_to_string(),
			"<td class=\"bold\"><a href=\"https://apple.com\" target=\"_blank\">Apple</a></td>"
		);
	}

	#[rstest]
	fn test_non_http_href_renders_disabled_anchor() {
		let row = Row::from_pairs([("Company", "IBM"), ("Company_HREF", "mailto:ir@ibm.com")]).unwrap();
		let markup = render(&TableOptions::new(), &row, &["Company", "Company_HREF"]).unwrap();
		let anchor = markup.find_all("a")[0];
		assert_eq!(anchor.attr_value("href"), None);
		assert_eq!(anchor.attr_value("data-href"), Some("mailto:ir@ibm.com"));
		assert_eq!(anchor.attr_value("aria-disabled"), Some("true"));
		assert_eq!(anchor.attr_value("class"), Some("disabled"));
	}

	#[rstest]
	#[case(CellValue::Null)]
	#[case(CellValue::from(f64::NAN))]
	fn test_missing_href_skips_link(#[case] href: CellValue) {
		let row = Row::from_pairs([("Company", CellValue::from("IBM")), ("Company_HREF", href)])
			.unwrap();
		let markup = render(&TableOptions::new(), &row, &["Company", "Company_HREF"]).unwrap();
		assert!(markup.find_all("a").is_empty());
		assert_eq!(markup.text_content(), "IBM");
	}

	#[rstest]
	fn test_href_outside_resolved_columns_is_ignored(apple: Row) {
		let markup = render(&TableOptions::new(), &apple, &["Company"]).unwrap();
		assert!(markup.find_all("a").is_empty());
	}

	#[rstest]
	fn test_content_rule_beats_link_and_markdown(apple: Row) {
		let options = TableOptions::new()
			.markdown_column("Company")
			.style_rule(
				"Company",
				StyleRule::predicate(|_| Some(attributes([("class", "ignored")]))),
			)
			.content_rule(
				"Company",
				ContentRule::new(|row, column| {
					Markup::text(format!("custom {}", row.get(column).map(ToString::to_string).unwrap_or_default()))
				}),
			);
		let markup = render(&options, &apple, &["Company", "Company_HREF"]).unwrap();
		assert_eq!(markup.render_to_string(), "<tr><td>custom Apple</td></tr>");
	}

	#[rstest]
	fn test_markdown_cell_has_no_style() {
		let row = Row::from_pairs([("Notes", "**up**")]).unwrap();
		let options = TableOptions::new().markdown_column("Notes").style_rule(
			"Notes",
			StyleRule::predicate(|_| Some(attributes([("class", "x")]))),
		);
		assert_eq!(cell_html(&options, &row, "Notes"), "<td><p><strong>up</strong></p></td>");
	}

	#[rstest]
	#[case(CellValue::from(0.5), "<td class=\"hit\">0.50</td>")]
	#[case(CellValue::from(f64::NAN), "<td class=\"hit\">0.00</td>")]
	#[case(CellValue::from(1234567_i64), "<td class=\"hit\">1,234,567</td>")]
	#[case(CellValue::from("Oracle"), "<td class=\"hit\">Oracle</td>")]
	#[case(CellValue::from(true), "<td>true</td>")]
	#[case(CellValue::Null, "<td></td>")]
	fn test_scalar_branches(#[case] value: CellValue, #[case] expected: &str) {
		let row = Row::from_pairs([("X", value)]).unwrap();
		let options = TableOptions::new().style_rule(
			"X",
			StyleRule::predicate(|_| Some(attributes([("class", "hit")]))),
		);
		assert_eq!(cell_html(&options, &row, "X"), expected);
	}

	#[rstest]
	fn test_timestamp_uses_date_format_when_enabled() {
		let ts = NaiveDate::from_ymd_opt(2018, 1, 5)
			.and_then(|d| d.and_hms_opt(9, 30, 0))
			.unwrap();
		let row = Row::from_pairs([("Date", ts)]).unwrap();
		assert_eq!(
			cell_html(&TableOptions::new(), &row, "Date"),
			"<td>2018-01-05</td>"
		);
		assert_eq!(
			cell_html(&TableOptions::new().date_format(None::<&str>), &row, "Date"),
			"<td>2018-01-05 09:30:00</td>"
		);
	}

	#[rstest]
	fn test_missing_column_is_error(apple: Row) {
		let err = render(&TableOptions::new(), &apple, &["Ticker"]).unwrap_err();
		assert!(matches!(err, TableError::MissingColumn { row: 0, column } if column == "Ticker"));
	}

	#[rstest]
	fn test_bad_predicate_output_fails_the_row(apple: Row) {
		let options = TableOptions::new().style_rule(
			"Value",
			StyleRule::predicate(|_| Some(attributes([("on click", "x")]))),
		);
		assert!(matches!(
			render(&options, &apple, &["Value"]),
			Err(TableError::InvalidAttribute { .. })
		));
	}

	#[rstest]
	#[case("https://apple.com", true)]
	#[case("HTTP://EXAMPLE.COM", true)]
	#[case("http://", true)]
	#[case("httpfoo", false)]
	#[case("ftp://example.com", false)]
	#[case("", false)]
	#[case("/relative/path", false)]
	fn test_is_http_url(#[case] href: &str, #[case] expected: bool) {
		assert_eq!(is_http_url(href), expected);
	}
}
