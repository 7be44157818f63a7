use std::fmt::Write;

use crate::model::node::{Forest, NgramNode};

/// Character prepended per depth level when the root marker is empty.
pub const DEFAULT_OUTLINE_CHAR: char = '*';

/// Renders a tree as an Emacs outline-mode string.
///
/// Each node becomes one line `<level>[<frequency>]<key>`. The root uses
/// `marker` as its level; every depth adds one more copy of the marker's
/// first character in front (`"* "`, `"** "`, `"*** "`, ...).
///
/// Children follow their parent depth-first, in stored order.
pub fn render_outline(node: &NgramNode, marker: &str) -> String {
	let mut output = String::new();
	let repeat = marker.chars().next().unwrap_or(DEFAULT_OUTLINE_CHAR);
	write_outline(node, marker, repeat, 0, &mut output);
	output
}

fn write_outline(node: &NgramNode, marker: &str, repeat: char, depth: usize, output: &mut String) {
	output.extend(std::iter::repeat_n(repeat, depth));
	// Writing into a String cannot fail
	let _ = writeln!(output, "{marker}[{}]{}", node.frequency(), node.key());
	for child in node.children() {
		write_outline(child, marker, repeat, depth + 1, output);
	}
}

/// Renders every tree of the forest as one outline, roots in order.
pub fn render_forest_outline(forest: &Forest, marker: &str) -> String {
	forest.roots().iter().map(|root| render_outline(root, marker)).collect()
}

/// Renders a tree as an HTML list item.
///
/// - A node with children: `<li title="KEY">[F] KEY + <ul>...</ul></li>`
/// - A leaf: `<li title="KEY">[F] KEY </li>`
///
/// Key text is HTML-escaped.
pub fn render_html(node: &NgramNode) -> String {
	let mut output = String::new();
	write_html(node, &mut output);
	output
}

fn write_html(node: &NgramNode, output: &mut String) {
	let key = node.key().to_string();
	let title = html_escape::encode_double_quoted_attribute(&key);
	let label = html_escape::encode_text(&key);

	if node.is_leaf() {
		let _ = write!(output, "<li title=\"{title}\">[{}] {label} </li>", node.frequency());
		return;
	}

	let _ = write!(output, "<li title=\"{title}\">[{}] {label} + <ul>", node.frequency());
	for child in node.children() {
		write_html(child, output);
	}
	output.push_str("</ul></li>");
}

/// Renders the whole forest as one `<ul>` holding every tree.
pub fn render_forest_html(forest: &Forest) -> String {
	let mut output = String::from("<ul>");
	for root in forest.roots() {
		write_html(root, &mut output);
	}
	output.push_str("</ul>");
	output
}
