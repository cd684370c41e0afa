//! Stream topology lines.

use crate::models::StreamInfoNode;

use super::tags::{format_tag_list, indent};

/// Format one stream: `<type>: <description>`, then its tags.
///
/// Tags go under a `Tags:` header one level deeper, and the tags
/// themselves one level deeper again.
pub fn format_stream_node(node: &StreamInfoNode, depth: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{}: {}",
        indent(depth),
        node.stream_type,
        node.description.as_deref().unwrap_or("")
    )];

    if let Some(tags) = &node.tags {
        lines.push(format!("{}Tags:", indent(depth + 1)));
        lines.extend(format_tag_list(tags, depth + 2));
    }

    lines
}

/// Format a topology tree in pre-order.
///
/// Each successor (the single `next` stream, or every container child) is
/// printed one level deeper than its parent.
pub fn format_topology(root: Option<&StreamInfoNode>, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(node) = root {
        push_topology(node, depth, &mut lines);
    }
    lines
}

fn push_topology(node: &StreamInfoNode, depth: usize, lines: &mut Vec<String>) {
    lines.extend(format_stream_node(node, depth));
    for child in node.successor.nodes() {
        push_topology(child, depth + 1, lines);
    }
}
