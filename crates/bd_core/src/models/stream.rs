//! Stream topology tree.

use serde::{Deserialize, Serialize};

use super::tags::TagList;

/// How a stream node continues into the rest of the topology.
///
/// A node either chains linearly into a single successor (e.g. a parser in
/// front of a decoder), branches into the streams of a container, or ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Successor {
    /// No further streams.
    Leaf,
    /// A single `next` stream.
    Linear(Box<StreamInfoNode>),
    /// The child streams of a container, in order.
    Branching(Vec<StreamInfoNode>),
}

impl Successor {
    /// Build a successor from the two ways a service can report one.
    ///
    /// A `next` link wins: when present, container children are never
    /// looked at. `children` returns `None` for non-container streams.
    pub fn resolve<F>(next: Option<StreamInfoNode>, children: F) -> Self
    where
        F: FnOnce() -> Option<Vec<StreamInfoNode>>,
    {
        match next {
            Some(node) => Successor::Linear(Box::new(node)),
            None => match children() {
                Some(streams) => Successor::Branching(streams),
                None => Successor::Leaf,
            },
        }
    }

    /// Nodes reached from this successor, in traversal order.
    pub fn nodes(&self) -> &[StreamInfoNode] {
        match self {
            Successor::Leaf => &[],
            Successor::Linear(node) => std::slice::from_ref(&**node),
            Successor::Branching(children) => children,
        }
    }
}

/// One node of the demuxed stream topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfoNode {
    /// Stream type nick (e.g., "container", "audio", "video").
    pub stream_type: String,
    /// Codec description, or the caps string when caps are not fixed.
    pub description: Option<String>,
    /// Tags attached to this stream.
    pub tags: Option<TagList>,
    /// Where the topology continues.
    pub successor: Successor,
}

impl StreamInfoNode {
    /// Create a leaf node of the given type.
    pub fn new(stream_type: impl Into<String>) -> Self {
        Self {
            stream_type: stream_type.into(),
            description: None,
            tags: None,
            successor: Successor::Leaf,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: TagList) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_successor(mut self, successor: Successor) -> Self {
        self.successor = successor;
        self
    }

    /// Chain a single `next` stream.
    pub fn with_next(self, next: StreamInfoNode) -> Self {
        self.with_successor(Successor::Linear(Box::new(next)))
    }

    /// Attach container children.
    pub fn with_children(self, children: Vec<StreamInfoNode>) -> Self {
        self.with_successor(Successor::Branching(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_next_over_children() {
        let mut children_queried = false;
        let successor = Successor::resolve(Some(StreamInfoNode::new("audio")), || {
            children_queried = true;
            Some(vec![StreamInfoNode::new("video"), StreamInfoNode::new("subtitles")])
        });

        assert!(!children_queried);
        assert_eq!(successor.nodes().len(), 1);
        assert_eq!(successor.nodes()[0].stream_type, "audio");
    }

    #[test]
    fn resolve_uses_children_without_next() {
        let successor = Successor::resolve(None, || {
            Some(vec![StreamInfoNode::new("video"), StreamInfoNode::new("audio")])
        });

        let types: Vec<&str> = successor.nodes().iter().map(|n| n.stream_type.as_str()).collect();
        assert_eq!(types, vec!["video", "audio"]);
    }

    #[test]
    fn resolve_without_either_is_leaf() {
        assert_eq!(Successor::resolve(None, || None), Successor::Leaf);
        assert!(Successor::Leaf.nodes().is_empty());
    }
}
