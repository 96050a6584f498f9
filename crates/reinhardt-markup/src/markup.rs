//! Markup node types.
//!
//! `Markup` is the unit of output for table rendering. It can represent an
//! element, a text node, pre-rendered HTML, a fragment, or nothing at all.
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup::{IntoMarkup, Markup, MarkupElement};
//!
//! let row = MarkupElement::new("tr")
//!     .child(MarkupElement::new("td").child("Apple"))
//!     .child(MarkupElement::new("td").child("0.50"))
//!     .into_markup();
//!
//! assert_eq!(row.find_all("td").len(), 2);
//! assert_eq!(row.text_content(), "Apple0.50");
//! ```

mod util;

pub use util::{BOOLEAN_ATTRS, html_escape, is_boolean_attr_truthy};

use std::borrow::Cow;

/// A node of renderable markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
	/// An HTML element.
	Element(MarkupElement),
	/// A text node. Escaped on serialization.
	Text(Cow<'static, str>),
	/// Pre-rendered HTML inserted verbatim on serialization.
	///
	/// Only produced from sources that have already been sanitized, such as
	/// [`crate::markdown::to_markup`].
	Raw(Cow<'static, str>),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Markup>),
	/// Renders nothing.
	Empty,
}

/// An element in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Markup>,
	is_void: bool,
}

impl MarkupElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds every attribute of an iterator, in iteration order.
	pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		self.attrs
			.extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
		self
	}

	/// Adds the attribute only when `value` is `Some`.
	pub fn attr_opt(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoMarkup) -> Self {
		self.children.push(child.into_markup());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoMarkup>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_markup()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs_list(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute named `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(k, _)| k == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child nodes.
	pub fn child_views(&self) -> &[Markup] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Consumes the element and returns its children.
	pub fn into_children(self) -> Vec<Markup> {
		self.children
	}
}

impl Markup {
	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> MarkupElement {
		MarkupElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a raw HTML node.
	pub fn raw(html: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(html.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoMarkup>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_markup()).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&MarkupElement> {
		match self {
			Markup::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Collects every element with the given tag, depth-first in document order.
	pub fn find_all(&self, tag: &str) -> Vec<&MarkupElement> {
		let mut found = Vec::new();
		self.collect_tag(tag, &mut found);
		found
	}

	fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a MarkupElement>) {
		match self {
			Markup::Element(el) => {
				if el.tag_name() == tag {
					found.push(el);
				}
				for child in el.child_views() {
					child.collect_tag(tag, found);
				}
			}
			Markup::Fragment(children) => {
				for child in children {
					child.collect_tag(tag, found);
				}
			}
			Markup::Text(_) | Markup::Raw(_) | Markup::Empty => {}
		}
	}

	/// Concatenates all text nodes below this node.
	///
	/// Raw HTML is included as-is.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.text_content_inner(&mut output);
		output
	}

	fn text_content_inner(&self, output: &mut String) {
		match self {
			Markup::Element(el) => {
				for child in el.child_views() {
					child.text_content_inner(output);
				}
			}
			Markup::Fragment(children) => {
				for child in children {
					child.text_content_inner(output);
				}
			}
			Markup::Text(text) | Markup::Raw(text) => output.push_str(text),
			Markup::Empty => {}
		}
	}

	/// Renders the tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Markup::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs_list() {
					// Skip boolean attributes with falsy values (empty, "false", "0")
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Markup::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Markup::Raw(html) => {
				output.push_str(html);
			}
			Markup::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Markup::Empty => {}
		}
	}
}

/// Conversion into a [`Markup`] node.
pub trait IntoMarkup {
	/// Converts self into markup.
	fn into_markup(self) -> Markup;
}

impl IntoMarkup for Markup {
	fn into_markup(self) -> Markup {
		self
	}
}

impl IntoMarkup for MarkupElement {
	fn into_markup(self) -> Markup {
		Markup::Element(self)
	}
}

impl IntoMarkup for String {
	fn into_markup(self) -> Markup {
		Markup::Text(Cow::Owned(self))
	}
}

impl IntoMarkup for &String {
	fn into_markup(self) -> Markup {
		Markup::Text(Cow::Owned(self.clone()))
	}
}

impl IntoMarkup for &'static str {
	fn into_markup(self) -> Markup {
		Markup::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoMarkup> IntoMarkup for Option<T> {
	fn into_markup(self) -> Markup {
		match self {
			Some(v) => v.into_markup(),
			None => Markup::Empty,
		}
	}
}

impl<T: IntoMarkup> IntoMarkup for Vec<T> {
	fn into_markup(self) -> Markup {
		Markup::Fragment(self.into_iter().map(|v| v.into_markup()).collect())
	}
}

impl IntoMarkup for () {
	fn into_markup(self) -> Markup {
		Markup::Empty
	}
}
