//! Common test fixtures for reinhardt-dataset tests

use reinhardt_dataset::{CellValue, Dataset};
use rstest::*;

/// Quarterly figures with a string date column
#[fixture]
pub fn quarterly() -> Dataset {
	Dataset::from_records(vec![
		vec![
			("Company", CellValue::from("Apple")),
			("Date", CellValue::from("2018-01-05")),
			("Revenue", CellValue::from(88_293_i64)),
		],
		vec![
			("Company", CellValue::from("Oracle")),
			("Date", CellValue::from("not reported")),
			("Revenue", CellValue::from(9_768_i64)),
		],
	])
	.unwrap()
	.mark_datetime("Date")
}
