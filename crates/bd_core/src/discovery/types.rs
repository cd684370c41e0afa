//! Types shared between the discovery client and service implementations.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::models::DiscoveryResult;

/// A request to discover one URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRequest {
    pub uri: String,
}

impl DiscoveryRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Events a discovery session produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    /// One submitted URI completed (in completion order, not submission order).
    Discovered(DiscoveryResult),
    /// The session ran out of queued work.
    Finished,
}

/// Sending half of the event channel, handed to service sessions.
pub type EventSender = mpsc::UnboundedSender<DiscoveryEvent>;

/// Receiving half of the event channel, drained by the UI loop.
pub type EventReceiver = mpsc::UnboundedReceiver<DiscoveryEvent>;

/// Create a new event channel.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Errors reported by the discovery client.
///
/// The display text of each variant is the line shown in the log view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("Error creating discoverer instance: {0}")]
    SessionCreation(String),

    #[error("Failed to start discovering URI '{uri}'")]
    Submission { uri: String },
}
