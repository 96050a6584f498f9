//! Company dashboard demo
//!
//! Renders the sample company table as HTML.
//!
//! ## Usage
//!
//! ```bash
//! companies
//! companies --settings table.toml --output dashboard.html -vv
//! companies --data companies.json
//! ```

mod companies;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use reinhardt_frames::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "companies")]
#[command(about = "Render the company dashboard table as HTML", long_about = None)]
#[command(version)]
struct Cli {
	/// TOML file with table settings
	#[arg(short, long, value_name = "FILE")]
	settings: Option<PathBuf>,

	/// JSON records to render instead of the built-in companies
	#[arg(short, long, value_name = "FILE")]
	data: Option<PathBuf>,

	/// Write the HTML here instead of stdout
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let settings = match &cli.settings {
		Some(path) => load_settings(path)?,
		None => TableSettings::default(),
	};
	let dataset = match &cli.data {
		Some(path) => load_dataset(path)?,
		None => companies::dataset().context("building the sample dataset")?,
	};

	let html = render(&dataset, settings)?;
	match &cli.output {
		Some(path) => {
			fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
			tracing::info!(path = %path.display(), bytes = html.len(), "wrote table");
		}
		None => println!("{html}"),
	}
	Ok(())
}

fn init_tracing(verbosity: u8) {
	let default = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_target(true).with_writer(std::io::stderr))
		.init();
}

fn load_settings(path: &Path) -> Result<TableSettings> {
	let source =
		fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	TableSettings::from_toml_str(&source)
		.with_context(|| format!("parsing settings in {}", path.display()))
}

/// Date strings in the records become datetime columns, so `Date` is
/// formatted and styled like the built-in data.
fn load_dataset(path: &Path) -> Result<Dataset> {
	let source =
		fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	Dataset::from_json_records(&source)
		.with_context(|| format!("parsing records in {}", path.display()))
}

fn render(dataset: &Dataset, settings: TableSettings) -> Result<String> {
	let options = companies::with_rules(TableOptions::from_settings(settings));
	let table = TableBuilder::new(options)?.build(dataset)?;
	Ok(table.render_to_string())
}
