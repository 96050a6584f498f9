//! Number and date formatting for table cells
//!
//! Format specifiers are parsed once into [`FloatFormat`] and [`DateFormat`]
//! values, so text supplied in settings is never used as a runtime format
//! string.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

use crate::error::{Result, TableError};

/// Default float specifier: two decimals.
pub const DEFAULT_FLOAT_FORMAT: &str = ".2f";

/// Default date pattern.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

const MAX_PRECISION: usize = 64;
const DEFAULT_PRECISION: usize = 6;

/// Presentation type of a [`FloatFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle {
	/// `f`: fixed point
	Fixed,
	/// `F`: fixed point, `INF`/`NAN` upper-cased
	FixedUpper,
	/// `e`: scientific, `1.50e+03`
	Exponent,
	/// `E`: scientific, `1.50E+03`
	ExponentUpper,
	/// `%`: multiplied by 100, fixed point, followed by `%`
	Percent,
}

/// A parsed float specifier of the form `[+][,][.N](f|F|e|E|%)`.
///
/// ```
/// use reinhardt_tables::format::FloatFormat;
///
/// let format = FloatFormat::parse(",.1f").unwrap();
/// assert_eq!(format.format(1234567.89), "1,234,567.9");
/// assert_eq!(FloatFormat::parse(".0%").unwrap().format(0.25), "25%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatFormat {
	spec: String,
	sign: bool,
	grouping: bool,
	precision: usize,
	style: FloatStyle,
}

impl FloatFormat {
	/// Parses a specifier.
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidFloatFormat`] for anything outside the
	/// grammar, or a precision above 64.
	pub fn parse(spec: &str) -> Result<Self> {
		let invalid = |reason: &str| TableError::InvalidFloatFormat {
			spec: spec.to_string(),
			reason: reason.to_string(),
		};

		let mut rest = spec;
		let sign = match rest.strip_prefix('+') {
			Some(stripped) => {
				rest = stripped;
				true
			}
			None => false,
		};
		let grouping = match rest.strip_prefix(',') {
			Some(stripped) => {
				rest = stripped;
				true
			}
			None => false,
		};

		let mut chars = rest.chars();
		let style = match chars.next_back() {
			Some('f') => FloatStyle::Fixed,
			Some('F') => FloatStyle::FixedUpper,
			Some('e') => FloatStyle::Exponent,
			Some('E') => FloatStyle::ExponentUpper,
			Some('%') => FloatStyle::Percent,
			Some(other) => return Err(invalid(&format!("unknown presentation type '{other}'"))),
			None => return Err(invalid("missing presentation type")),
		};

		let body = chars.as_str();
		let precision = if body.is_empty() {
			DEFAULT_PRECISION
		} else {
			let digits = body
				.strip_prefix('.')
				.ok_or_else(|| invalid("expected '.' before the precision"))?;
			if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
				return Err(invalid("precision must be a decimal number"));
			}
			let precision: usize = digits
				.parse()
				.map_err(|_| invalid("precision out of range"))?;
			if precision > MAX_PRECISION {
				return Err(invalid("precision out of range"));
			}
			precision
		};

		Ok(Self {
			spec: spec.to_string(),
			sign,
			grouping,
			precision,
			style,
		})
	}

	/// Returns the specifier this format was parsed from.
	pub fn spec(&self) -> &str {
		&self.spec
	}

	/// Returns the number of digits after the decimal point.
	pub fn precision(&self) -> usize {
		self.precision
	}

	/// Returns the presentation type.
	pub fn style(&self) -> FloatStyle {
		self.style
	}

	/// Formats a value.
	///
	/// NaN is not replaced here; the row renderer zeroes it before calling.
	pub fn format(&self, value: f64) -> String {
		let precision = self.precision;
		let mut text = match self.style {
			FloatStyle::Fixed | FloatStyle::FixedUpper => format!("{value:.precision$}"),
			FloatStyle::Percent => format!("{:.precision$}", value * 100.0),
			FloatStyle::Exponent | FloatStyle::ExponentUpper => {
				exponent_form(&format!("{value:.precision$e}"))
			}
		};

		if self.grouping && value.is_finite() {
			text = group_fixed(&text);
		}
		if self.sign && !text.starts_with('-') {
			text.insert(0, '+');
		}
		match self.style {
			FloatStyle::FixedUpper | FloatStyle::ExponentUpper => text.to_uppercase(),
			FloatStyle::Percent => text + "%",
			FloatStyle::Fixed | FloatStyle::Exponent => text,
		}
	}
}

impl Default for FloatFormat {
	fn default() -> Self {
		Self {
			spec: DEFAULT_FLOAT_FORMAT.to_string(),
			sign: false,
			grouping: false,
			precision: 2,
			style: FloatStyle::Fixed,
		}
	}
}

impl FromStr for FloatFormat {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for FloatFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.spec)
	}
}

/// Rewrites Rust's `1.5e3` as `1.5e+03`.
fn exponent_form(text: &str) -> String {
	match text.split_once('e') {
		Some((mantissa, exponent)) => format!("{mantissa}e{}", normalize_exponent(exponent)),
		None => text.to_string(),
	}
}

fn normalize_exponent(exponent: &str) -> String {
	let (sign, digits) = match exponent.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("+", exponent.trim_start_matches('+')),
	};
	let trimmed = digits.trim_start_matches('0');
	let core = if trimmed.is_empty() { "0" } else { trimmed };
	format!("{sign}{core:0>2}")
}

/// Groups the integer part of a fixed-point rendering.
fn group_fixed(text: &str) -> String {
	let (int_part, frac_part) = match text.split_once('.') {
		Some((int_part, frac)) => (int_part, Some(frac)),
		None => (text, None),
	};
	if int_part.contains('e') {
		return text.to_string();
	}
	let grouped = group_signed(int_part);
	match frac_part {
		Some(frac) => format!("{grouped}.{frac}"),
		None => grouped,
	}
}

fn group_signed(value: &str) -> String {
	let (sign, digits) = match value.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", value),
	};
	format!("{sign}{}", group_digits(digits))
}

fn group_digits(digits: &str) -> String {
	if digits.len() <= 3 {
		return digits.to_string();
	}
	let mut head = digits.len() % 3;
	if head == 0 {
		head = 3;
	}
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	grouped.push_str(&digits[..head]);
	for chunk in digits.as_bytes()[head..].chunks(3) {
		grouped.push(',');
		// ASCII digits only, so byte chunks are valid chars
		chunk.iter().for_each(|b| grouped.push(char::from(*b)));
	}
	grouped
}

/// Formats an integer with `,` thousands separators.
///
/// ```
/// use reinhardt_tables::format::format_integer;
///
/// assert_eq!(format_integer(1234567), "1,234,567");
/// assert_eq!(format_integer(-1000), "-1,000");
/// ```
pub fn format_integer(value: i64) -> String {
	group_signed(&value.to_string())
}

/// A validated `chrono` strftime pattern.
///
/// ```
/// use chrono::NaiveDate;
/// use reinhardt_tables::format::DateFormat;
///
/// let format = DateFormat::parse("%d %b %Y").unwrap();
/// let ts = NaiveDate::from_ymd_opt(2018, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(format.format(&ts), "05 Jan 2018");
/// assert!(DateFormat::parse("%Q").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
	pattern: String,
}

impl DateFormat {
	/// Parses and validates a pattern.
	///
	/// Patterns needing a time zone (`%z`, `%Z`) cannot format a naive
	/// timestamp and are rejected here rather than at render time.
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidDateFormat`] for unknown directives or
	/// directives that cannot apply to a naive timestamp.
	pub fn parse(pattern: &str) -> Result<Self> {
		let invalid = || TableError::InvalidDateFormat {
			pattern: pattern.to_string(),
		};
		if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
			return Err(invalid());
		}
		let mut probe = String::new();
		write!(
			probe,
			"{}",
			NaiveDateTime::default().format_with_items(StrftimeItems::new(pattern))
		)
		.map_err(|_| invalid())?;
		Ok(Self {
			pattern: pattern.to_string(),
		})
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Formats a timestamp.
	pub fn format(&self, ts: &NaiveDateTime) -> String {
		let mut out = String::new();
		if write!(out, "{}", ts.format_with_items(StrftimeItems::new(&self.pattern))).is_err() {
			tracing::warn!(pattern = %self.pattern, "date pattern failed at render time");
			return ts.to_string();
		}
		out
	}
}

impl Default for DateFormat {
	fn default() -> Self {
		Self {
			pattern: DEFAULT_DATE_FORMAT.to_string(),
		}
	}
}

impl FromStr for DateFormat {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}
