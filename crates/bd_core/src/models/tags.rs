//! Ordered tag lists attached to containers and streams.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tag value as reported by the discovery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagValue {
    /// The value was natively a string and is kept verbatim.
    Text(String),
    /// Any other type, in the service's generic serialized form.
    Serialized(String),
}

impl TagValue {
    /// The display text of this value.
    pub fn as_str(&self) -> &str {
        match self {
            TagValue::Text(s) | TagValue::Serialized(s) => s,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag name to value mapping that keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    entries: Vec<(String, TagValue)>,
}

impl TagList {
    /// Create an empty tag list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag. Duplicate names are kept in order.
    pub fn push(&mut self, name: impl Into<String>, value: TagValue) {
        self.entries.push((name.into(), value));
    }

    /// Builder-style variant of [`TagList::push`].
    pub fn with(mut self, name: impl Into<String>, value: TagValue) -> Self {
        self.push(name, value);
        self
    }

    /// Get the first value for a tag name.
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
