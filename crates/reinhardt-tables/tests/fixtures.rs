//! Common test fixtures for reinhardt-tables tests

use chrono::NaiveDate;
use reinhardt_dataset::{CellValue, Dataset};
use reinhardt_markup::{IntoMarkup, Markup};
use reinhardt_tables::{StyleRule, attributes};
use rstest::*;

/// One company row with a link sibling
#[fixture]
pub fn apple() -> Dataset {
	Dataset::from_records(vec![vec![
		("Company", CellValue::from("Apple")),
		("Company_HREF", CellValue::from("https://apple.com")),
		("Value", CellValue::from(0.5)),
	]])
	.unwrap()
}

/// A small dashboard with every cell type
#[fixture]
pub fn dashboard() -> Dataset {
	let date = |d: u32| CellValue::from(NaiveDate::from_ymd_opt(2018, 1, d).unwrap());
	Dataset::from_records(vec![
		vec![
			("Company", CellValue::from("Apple")),
			("Company_HREF", CellValue::from("https://apple.com")),
			("Value", CellValue::from(0.5)),
			("Value2", CellValue::from(12_i64)),
			("Date", date(5)),
			("Notes", CellValue::from("*strong* quarter")),
			("Listed", CellValue::from(true)),
		],
		vec![
			("Company", CellValue::from("Oracle")),
			("Company_HREF", CellValue::from("oracle.com")),
			("Value", CellValue::from(f64::NAN)),
			("Value2", CellValue::from(5_i64)),
			("Date", date(7)),
			("Notes", CellValue::from("flat")),
			("Listed", CellValue::from(false)),
		],
		vec![
			("Company", CellValue::from("Yahoo")),
			("Company_HREF", CellValue::Null),
			("Value", CellValue::from(-1234.567)),
			("Value2", CellValue::from(1_234_567_i64)),
			("Date", date(8)),
			("Notes", CellValue::Null),
			("Listed", CellValue::from(true)),
		],
	])
	.unwrap()
}

/// `{"class": "table-success"}` for positive numbers
pub fn color_positive() -> StyleRule {
	StyleRule::predicate(|value| match value.as_f64() {
		Some(v) if v > 0.0 => Some(attributes([("class", "table-success")])),
		_ => None,
	})
}

/// Text of every header cell
pub fn header_labels(table: &Markup) -> Vec<String> {
	table
		.find_all("th")
		.into_iter()
		.map(|th| th.clone().into_markup().text_content())
		.collect()
}

/// Body rows, each as the list of its cell elements rendered to HTML
pub fn body_cells(table: &Markup) -> Vec<Vec<String>> {
	table
		.find_all("tbody")
		.into_iter()
		.flat_map(|tbody| tbody.child_views())
		.map(|tr| {
			tr.find_all("td")
				.into_iter()
				.map(|td| td.clone().into_markup().render_to_string())
				.collect()
		})
		.collect()
}
