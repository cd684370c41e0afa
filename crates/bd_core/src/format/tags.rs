//! Tag lines.

use crate::models::{TagList, TagValue};

/// Leading whitespace for a nesting depth (two spaces per level).
pub fn indent(depth: usize) -> String {
    " ".repeat(2 * depth)
}

/// Format a single tag as `name: value`.
pub fn format_tag(name: &str, value: &TagValue, depth: usize) -> String {
    format!("{}{}: {}", indent(depth), name, value)
}

/// Format every tag of a list at the same depth, in list order.
pub fn format_tag_list(tags: &TagList, depth: usize) -> Vec<String> {
    tags.iter()
        .map(|(name, value)| format_tag(name, value, depth))
        .collect()
}
