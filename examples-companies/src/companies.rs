//! The company dashboard: sample data and its style rules

use chrono::{Datelike, NaiveDate, Weekday};
use reinhardt_frames::prelude::*;

const COMPANIES: [&str; 9] = [
	"Apple",
	"Google",
	"Yahoo",
	"Facebook",
	"Microsoft",
	"Amazon",
	"IBM",
	"Intel",
	"Oracle",
];

/// Column rendered as markdown
pub const MARKDOWN_COLUMN: &str = "markdown_example";

/// Nine companies with links, two numeric columns, a date and a markdown note.
pub fn dataset() -> Result<Dataset, DatasetError> {
	let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default();
	let records = COMPANIES.iter().enumerate().map(|(n, company)| {
		let n_f = n as f64;
		vec![
			("Company", CellValue::from(*company)),
			(
				"Company_HREF",
				CellValue::from(format!("https://{}.com", company.to_lowercase())),
			),
			("Value", CellValue::from((n_f - 4.0) / 13.0)),
			("Value2", CellValue::from(n_f.powi(4) / 13.0)),
			(
				"Date",
				CellValue::from(start + chrono::Days::new(n as u64)),
			),
			(
				MARKDOWN_COLUMN,
				CellValue::from(format!(
					"Everything in **here** is plain text in _Markdown_, created for Company **{company}**"
				)),
			),
		]
	});
	Dataset::from_records(records)
}

/// `table-success` for positive values, `table-danger` for negative ones.
pub fn color_positive() -> StyleRule {
	StyleRule::predicate(|value| match value.as_f64() {
		Some(v) if v > 0.0 => Some(attributes([("class", "table-success")])),
		Some(v) if v < 0.0 => Some(attributes([("class", "table-danger")])),
		_ => None,
	})
}

/// Highlights values above ten.
pub fn highlight_large() -> StyleRule {
	StyleRule::predicate(|value| match value.as_f64() {
		Some(v) if v > 10.0 => Some(attributes([("style", "background-color: #7FFFD4")])),
		_ => None,
	})
}

/// Flags Fridays and Sundays.
pub fn flag_weekend_edges() -> StyleRule {
	StyleRule::predicate(|value| {
		let ts = value.as_timestamp()?;
		matches!(ts.weekday(), Weekday::Fri | Weekday::Sun)
			.then(|| attributes([("class", "table-danger")]))
	})
}

/// Bold for Apple and Yahoo, danger for Oracle.
pub fn company_highlights() -> StyleRule {
	StyleRule::match_list([
		(
			vec!["Yahoo".into(), "Apple".into()],
			attributes([("style", "font-weight: bold")]),
		),
		(
			vec!["Oracle".into()],
			attributes([("class", "table-danger")]),
		),
	])
}

/// Attaches the dashboard rules to `options`.
pub fn with_rules(options: TableOptions) -> TableOptions {
	options
		.markdown_column(MARKDOWN_COLUMN)
		.style_rule("Company", company_highlights())
		.style_rule("Value2", highlight_large())
		.style_rule("Date", flag_weekend_edges())
		.style_rule("Value", color_positive())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn table() -> Markup {
		let dataset = dataset().unwrap();
		TableBuilder::new(with_rules(TableOptions::new()))
			.unwrap()
			.build(&dataset)
			.unwrap()
	}

	#[rstest]
	fn test_dataset_shape() {
		let dataset = dataset().unwrap();
		assert_eq!(dataset.len(), 9);
		assert_eq!(
			dataset.columns(),
			["Company", "Company_HREF", "Value", "Value2", "Date", MARKDOWN_COLUMN]
		);
	}

	#[rstest]
	fn test_headers(table: Markup) {
		let labels: Vec<String> = table
			.find_all("th")
			.into_iter()
			.map(|th| th.clone().into_markup().text_content())
			.collect();
		assert_eq!(
			labels,
			vec!["Company", "Value", "Value2", "Date", "Markdown Example"]
		);
	}

	#[rstest]
	fn test_every_company_links_out(table: Markup) {
		let hrefs: Vec<&str> = table
			.find_all("a")
			.into_iter()
			.filter_map(|a| a.attr_value("href"))
			.collect();
		assert_eq!(hrefs.len(), 9);
		assert_eq!(hrefs[8], "https://oracle.com");
	}

	#[rstest]
	fn test_rules_apply(table: Markup) {
		let html = table.render_to_string();
		// 2018-01-05 is a Friday, 2018-01-07 a Sunday
		assert!(html.contains("<td class=\"table-danger\">2018-01-05</td>"));
		assert!(html.contains("<td class=\"table-danger\">2018-01-07</td>"));
		assert!(html.contains("<td>2018-01-06</td>"));
		// Value for n = 0 is -4/13
		assert!(html.contains("<td class=\"table-danger\">-0.31</td>"));
		// Value2 for n = 2 is 16/13
		assert!(html.contains("<td>1.23</td>"));
		assert!(html.contains("<td style=\"background-color: #7FFFD4\">19.69</td>"));
		assert!(html.contains("<strong>Oracle</strong>"));
	}
}
