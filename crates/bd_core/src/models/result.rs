//! Per-URI discovery results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::stream::StreamInfoNode;
use super::tags::TagList;

/// Outcome of discovering a single URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscoveryStatus {
    /// Discovery succeeded.
    Ok,
    /// The URI was invalid.
    InvalidUri,
    /// An error occurred; see the result's error message.
    Error,
    /// Discovery did not finish within the session timeout.
    Timeout,
    /// The service was busy.
    Busy,
    /// Plugins needed to handle the URI are missing.
    MissingPlugins,
}

impl DiscoveryStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, DiscoveryStatus::Ok)
    }
}

/// Everything the service reported about one URI.
///
/// Produced once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    /// The URI that was discovered.
    pub uri: String,
    /// Result code.
    pub status: DiscoveryStatus,
    /// Total duration, if known.
    pub duration: Option<Duration>,
    /// Whether the media is seekable.
    pub seekable: bool,
    /// Global tags.
    pub tags: Option<TagList>,
    /// Root of the stream topology.
    pub stream_info: Option<StreamInfoNode>,
    /// Error message accompanying [`DiscoveryStatus::Error`].
    pub error_message: Option<String>,
    /// Serialized diagnostic structure accompanying
    /// [`DiscoveryStatus::MissingPlugins`].
    pub misc: Option<String>,
}

impl DiscoveryResult {
    /// Create a result with no metadata attached.
    pub fn new(uri: impl Into<String>, status: DiscoveryStatus) -> Self {
        Self {
            uri: uri.into(),
            status,
            duration: None,
            seekable: false,
            tags: None,
            stream_info: None,
            error_message: None,
            misc: None,
        }
    }

    pub fn with_duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_seekable(mut self, seekable: bool) -> Self {
        self.seekable = seekable;
        self
    }

    pub fn with_tags(mut self, tags: TagList) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_stream_info(mut self, root: StreamInfoNode) -> Self {
        self.stream_info = Some(root);
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_misc(mut self, misc: impl Into<String>) -> Self {
        self.misc = Some(misc.into());
        self
    }
}
