//! The contract a media probing engine has to fulfil.

use std::time::Duration;

use super::types::{DiscoveryError, DiscoveryRequest, EventSender};

/// A media discovery engine able to open sessions.
pub trait DiscoveryService {
    /// Session type handed out by this service.
    type Session: DiscoverySession;

    /// Open a session that reports on `events`.
    ///
    /// Each URI gets at most `timeout` before it is reported as timed out.
    fn create_session(
        &self,
        timeout: Duration,
        events: EventSender,
    ) -> Result<Self::Session, DiscoveryError>;
}

/// A running discovery session.
///
/// Dropping the session stops it.
pub trait DiscoverySession {
    /// Queue a request without waiting for it.
    ///
    /// Returns `false` if the request could not be queued.
    fn discover_async(&self, request: &DiscoveryRequest) -> bool;
}
