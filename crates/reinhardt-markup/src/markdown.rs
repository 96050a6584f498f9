//! Markdown cell content.
//!
//! Markdown is converted to HTML with `pulldown-cmark` and wrapped in
//! [`Markup::Raw`]. HTML embedded in the source is demoted to text and
//! `javascript:` link and image targets are dropped, so the resulting raw node only
//! contains markup produced by the converter itself.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::markup::Markup;

/// Converts markdown source into a raw markup node.
///
/// ```
/// use reinhardt_markup::markdown::to_markup;
///
/// let html = to_markup("Everything in **here**").render_to_string();
/// assert_eq!(html, "<p>Everything in <strong>here</strong></p>");
/// ```
pub fn to_markup(source: &str) -> Markup {
	let mut options = Options::empty();
	options.insert(Options::ENABLE_TABLES);
	options.insert(Options::ENABLE_STRIKETHROUGH);

	let parser = Parser::new_ext(source, options).map(sanitize_event);

	let mut output = String::with_capacity(source.len() * 3 / 2);
	html::push_html(&mut output, parser);
	output.truncate(output.trim_end().len());
	Markup::raw(output)
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
	match event {
		Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
		Event::Start(Tag::Link {
			link_type,
			dest_url,
			title,
			id,
		}) if is_script_url(&dest_url) => Event::Start(Tag::Link {
			link_type,
			dest_url: CowStr::Borrowed(""),
			title,
			id,
		}),
		Event::Start(Tag::Image {
			link_type,
			dest_url,
			title,
			id,
		}) if is_script_url(&dest_url) => Event::Start(Tag::Image {
			link_type,
			dest_url: CowStr::Borrowed(""),
			title,
			id,
		}),
		other => other,
	}
}

fn is_script_url(url: &str) -> bool {
	let lowered = url.trim_start().to_ascii_lowercase();
	lowered.starts_with("javascript:") || lowered.starts_with("vbscript:")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_emphasis_and_strong() {
		let html = to_markup("plain text in _Markdown_ for **Apple**").render_to_string();
		assert_eq!(
			html,
			"<p>plain text in <em>Markdown</em> for <strong>Apple</strong></p>"
		);
	}

	#[rstest]
	fn test_output_is_raw_node() {
		assert!(matches!(to_markup("x"), Markup::Raw(_)));
	}

	#[rstest]
	fn test_inline_html_is_escaped() {
		let html = to_markup("hi <script>alert(1)</script>").render_to_string();
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}

	#[rstest]
	fn test_script_links_are_neutralized() {
		let html = to_markup("[click](javascript:alert(1))").render_to_string();
		assert!(!html.contains("javascript:"));
		assert!(html.contains(">click</a>"));
	}

	#[rstest]
	#[case("![x](javascript:alert(1))")]
	#[case("![x]( JavaScript:alert(1))")]
	#[case("![x](vbscript:msgbox)")]
	fn test_script_images_are_neutralized(#[case] source: &str) {
		let html = to_markup(source).render_to_string();
		assert!(!html.to_ascii_lowercase().contains("script:"));
		assert!(html.contains("<img src=\"\""));
	}

	#[rstest]
	fn test_regular_images_survive() {
		let html = to_markup("![logo](https://apple.com/logo.png)").render_to_string();
		assert!(html.contains("<img src=\"https://apple.com/logo.png\" alt=\"logo\""));
	}

	#[rstest]
	fn test_regular_links_survive() {
		let html = to_markup("[Apple](https://apple.com)").render_to_string();
		assert_eq!(html, "<p><a href=\"https://apple.com\">Apple</a></p>");
	}

	#[rstest]
	fn test_empty_source() {
		assert_eq!(to_markup("").render_to_string(), "");
	}
}
