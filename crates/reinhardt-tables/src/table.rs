//! Table assembly

use std::borrow::Cow;

use reinhardt_dataset::Dataset;
use reinhardt_markup::{IntoMarkup, Markup, MarkupElement};

use crate::column::{clean_header_name, header_class, resolve_columns, visible_columns};
use crate::error::Result;
use crate::format::{DateFormat, FloatFormat};
use crate::options::TableOptions;
use crate::row::RowRenderer;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Builds styled HTML tables from datasets.
///
/// Options are checked once in [`TableBuilder::new`]; a builder can then
/// render any number of datasets.
///
/// # Pipeline
///
/// ```mermaid
/// graph LR
///     D[Dataset] --> E{empty?}
///     E -- yes --> P["&lt;div&gt; placeholder"]
///     E -- no --> I[reset index]
///     I --> N[normalize datetimes]
///     N --> C[resolve columns]
///     C --> H["thead: labels + header classes"]
///     C --> R["tbody: RowRenderer per row"]
///     H --> T["&lt;table&gt;"]
///     R --> T
/// ```
///
/// # Example
///
/// ```
/// use reinhardt_dataset::{CellValue, Dataset};
/// use reinhardt_tables::{StyleRule, TableBuilder, TableOptions, attributes};
///
/// let dataset = Dataset::from_records(vec![vec![
///     ("Company", CellValue::from("Apple")),
///     ("Company_HREF", CellValue::from("https://apple.com")),
///     ("Value", CellValue::from(0.5)),
/// ]])
/// .unwrap();
/// let options = TableOptions::new().style_rule(
///     "Value",
///     StyleRule::predicate(|v| match v.as_f64() {
///         Some(x) if x > 0.0 => Some(attributes([("class", "table-success")])),
///         _ => None,
///     }),
/// );
///
/// let table = TableBuilder::new(options).unwrap().build(&dataset).unwrap();
/// assert_eq!(table.find_all("th").len(), 2);
/// assert_eq!(table.find_all("a")[0].attr_value("href"), Some("https://apple.com"));
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
	options: TableOptions,
	float_format: FloatFormat,
	date_format: Option<DateFormat>,
}

impl TableBuilder {
	/// Validates options and creates a builder.
	///
	/// # Errors
	///
	/// Returns [`crate::TableError::InvalidFloatFormat`] or
	/// [`crate::TableError::InvalidDateFormat`] for bad specifiers, and
	/// [`crate::TableError::InvalidAttribute`] for a match-list rule with a
	/// bad attribute name.
	pub fn new(options: TableOptions) -> Result<Self> {
		let float_format = FloatFormat::parse(&options.float_format)?;
		let date_format = options
			.date_format
			.as_deref()
			.map(DateFormat::parse)
			.transpose()?;
		for (column, rule) in &options.style_rules {
			rule.validate(column)?;
		}
		Ok(Self {
			options,
			float_format,
			date_format,
		})
	}

	/// Returns the options this builder was created with.
	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	/// Returns a renderer for single rows.
	pub fn row_renderer(&self) -> RowRenderer<'_> {
		RowRenderer::new(&self.options, &self.float_format, self.date_format.as_ref())
	}

	/// Resolves the ordered column list, link columns included, for a dataset.
	pub fn resolve_columns(&self, dataset: &Dataset) -> Vec<String> {
		resolve_columns(
			dataset.columns(),
			self.options.columns.as_deref(),
			&self.options.link_column_suffix,
		)
	}

	/// Renders a dataset as a `<table>`.
	///
	/// An empty dataset renders an empty `<div>`. The dataset is never
	/// modified; index reset and datetime normalization work on a copy.
	///
	/// # Errors
	///
	/// Returns [`crate::TableError::Dataset`] when the index column name is
	/// already taken, [`crate::TableError::InvalidAttribute`] when a style
	/// rule produces a bad attribute name, and
	/// [`crate::TableError::MissingColumn`] for rows lacking a column.
	pub fn build(&self, dataset: &Dataset) -> Result<Markup> {
		let span = tracing::debug_span!("build_table", rows = dataset.len());
		let _enter = span.enter();

		if dataset.is_empty() {
			tracing::debug!("empty dataset, rendering placeholder");
			return Ok(MarkupElement::new("div").into_markup());
		}

		let mut data = Cow::Borrowed(dataset);
		if self.options.index {
			data = Cow::Owned(dataset.reset_index(self.options.index_label.as_deref())?);
		}
		if !data.datetime_columns().is_empty() {
			data.to_mut().normalize_datetimes();
		}

		let columns = self.resolve_columns(&data);
		let visible = visible_columns(&columns, &self.options.link_column_suffix);

		let header = visible
			.iter()
			.map(|column| self.header_cell(column))
			.collect::<Result<Vec<_>>>()?;

		let renderer = self.row_renderer();
		let body = data
			.rows()
			.iter()
			.enumerate()
			.map(|(position, row)| renderer.render_row(row, position, &columns))
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(
			rows = body.len(),
			columns = visible.len(),
			"built table"
		);

		Ok(MarkupElement::new("table")
			.attr("class", self.options.table_class.clone())
			.attr("style", self.options.table_style.clone())
			.child(MarkupElement::new("thead").child(MarkupElement::new("tr").children(header)))
			.child(MarkupElement::new("tbody").children(body))
			.into_markup())
	}

	fn header_cell(&self, column: &str) -> Result<MarkupElement> {
		let label = clean_header_name(column);
		let content = match &self.options.header_label_transform {
			Some(transform) => transform(&label),
			None => Markup::text(label),
		};

		let class = match self.options.style_rules.get(column) {
			Some(rule) if self.options.apply_style_rules_to_headers => header_class(rule, column)?,
			_ => None,
		};
		Ok(MarkupElement::new("th").attr_opt("class", class).child(content))
	}
}

/// Builds a table in one call.
///
/// # Errors
///
/// See [`TableBuilder::new`] and [`TableBuilder::build`].
pub fn build_table(dataset: &Dataset, options: TableOptions) -> Result<Markup> {
	TableBuilder::new(options)?.build(dataset)
}
