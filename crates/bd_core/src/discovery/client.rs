//! Discovery client: one lazily created, long-lived session.

use std::time::Duration;

use crate::discovery::service::{DiscoveryService, DiscoverySession};
use crate::discovery::types::{DiscoveryError, DiscoveryRequest, EventSender};

/// Timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifecycle of a [`DiscoveryClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// No session.
    Idle,
    /// A session is running and accepts submissions.
    SessionStarted,
}

/// Issues discovery requests against a [`DiscoveryService`].
///
/// The session is created on the first submission and kept for the rest of
/// the client's life. A failed creation leaves the client idle, so the next
/// submission tries again.
pub struct DiscoveryClient<S: DiscoveryService> {
    service: S,
    events: EventSender,
    timeout: Duration,
    session: Option<S::Session>,
}

impl<S: DiscoveryService> DiscoveryClient<S> {
    /// Create an idle client that will report on `events`.
    pub fn new(service: S, events: EventSender) -> Self {
        Self {
            service,
            events,
            timeout: DEFAULT_TIMEOUT,
            session: None,
        }
    }

    /// Set the timeout used for lazily started sessions.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn state(&self) -> ClientState {
        if self.session.is_some() {
            ClientState::SessionStarted
        } else {
            ClientState::Idle
        }
    }

    /// Start a session with the given timeout.
    ///
    /// Does nothing if a session is already running.
    pub fn start_batch(&mut self, timeout: Duration) -> Result<(), DiscoveryError> {
        if self.session.is_some() {
            return Ok(());
        }

        tracing::debug!("Creating discovery session (timeout {:?})", timeout);
        match self.service.create_session(timeout, self.events.clone()) {
            Ok(session) => {
                self.timeout = timeout;
                self.session = Some(session);
                tracing::info!("Discovery session started");
                Ok(())
            }
            Err(e) => {
                tracing::error!("{}", e);
                Err(e)
            }
        }
    }

    /// Queue a URI for discovery and return immediately.
    ///
    /// Results arrive later as events. A rejected URI does not stop the
    /// session.
    pub fn submit(&mut self, uri: &str) -> Result<(), DiscoveryError> {
        self.start_batch(self.timeout)?;

        let request = DiscoveryRequest::new(uri);
        let queued = self
            .session
            .as_ref()
            .is_some_and(|session| session.discover_async(&request));

        if queued {
            tracing::debug!("Queued discovery of {}", uri);
            Ok(())
        } else {
            tracing::warn!("Discovery service rejected {}", uri);
            Err(DiscoveryError::Submission { uri: request.uri })
        }
    }

    /// Drop the running session, if any.
    pub fn shutdown(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("Discovery session stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::discovery::types::{event_channel, DiscoveryEvent};
    use crate::format::{event_lines, format_result};
    use crate::logging::LogBuffer;
    use crate::models::{DiscoveryResult, DiscoveryStatus};

    /// In-memory service: every queued URI completes immediately.
    #[derive(Default)]
    struct FakeService {
        fail_creation: Cell<bool>,
        created: Rc<Cell<usize>>,
        timeouts: Rc<RefCell<Vec<Duration>>>,
    }

    struct FakeSession {
        events: EventSender,
    }

    impl DiscoveryService for FakeService {
        type Session = FakeSession;

        fn create_session(
            &self,
            timeout: Duration,
            events: EventSender,
        ) -> Result<FakeSession, DiscoveryError> {
            if self.fail_creation.get() {
                return Err(DiscoveryError::SessionCreation("no decoders".to_string()));
            }
            self.created.set(self.created.get() + 1);
            self.timeouts.borrow_mut().push(timeout);
            Ok(FakeSession { events })
        }
    }

    impl DiscoverySession for FakeSession {
        fn discover_async(&self, request: &DiscoveryRequest) -> bool {
            if request.uri.starts_with("reject:") {
                return false;
            }
            let status = if request.uri.starts_with("file://") {
                DiscoveryStatus::Ok
            } else if !request.uri.contains(':') {
                DiscoveryStatus::InvalidUri
            } else {
                DiscoveryStatus::Error
            };
            let result = DiscoveryResult::new(request.uri.clone(), status)
                .with_error_message("Resource not found.");
            let _ = self.events.send(DiscoveryEvent::Discovered(result));
            let _ = self.events.send(DiscoveryEvent::Finished);
            true
        }
    }

    #[test]
    fn session_is_created_lazily_once() {
        let service = FakeService::default();
        let created = Rc::clone(&service.created);
        let (events, mut receiver) = event_channel();
        let mut client = DiscoveryClient::new(service, events);

        assert_eq!(client.state(), ClientState::Idle);
        assert_eq!(created.get(), 0);

        client.submit("file:///tmp/a.mp3").unwrap();
        client.submit("file:///tmp/b.mp3").unwrap();

        assert_eq!(client.state(), ClientState::SessionStarted);
        assert_eq!(created.get(), 1);

        let mut discovered = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            if let DiscoveryEvent::Discovered(result) = event {
                discovered.push(result.uri);
            }
        }
        assert_eq!(discovered, vec!["file:///tmp/a.mp3", "file:///tmp/b.mp3"]);
    }

    #[test]
    fn configured_timeout_reaches_the_service() {
        let service = FakeService::default();
        let timeouts = Rc::clone(&service.timeouts);
        let (events, _receiver) = event_channel();
        let mut client =
            DiscoveryClient::new(service, events).with_timeout(Duration::from_secs(12));

        client.submit("file:///tmp/a.mp3").unwrap();
        assert_eq!(*timeouts.borrow(), vec![Duration::from_secs(12)]);
    }

    #[test]
    fn creation_failure_is_reported_and_client_stays_idle() {
        let service = FakeService::default();
        service.fail_creation.set(true);
        let (events, mut receiver) = event_channel();
        let mut client = DiscoveryClient::new(service, events);

        let err = client.submit("file:///tmp/a.mp3").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error creating discoverer instance: no decoders"
        );
        assert_eq!(client.state(), ClientState::Idle);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn rejected_uri_keeps_session() {
        let (events, _receiver) = event_channel();
        let mut client = DiscoveryClient::new(FakeService::default(), events);

        let err = client.submit("reject:me").unwrap_err();
        assert_eq!(err.to_string(), "Failed to start discovering URI 'reject:me'");
        assert_eq!(client.state(), ClientState::SessionStarted);

        assert!(client.submit("file:///tmp/a.mp3").is_ok());
    }

    #[test]
    fn text_without_scheme_reaches_service_unchanged() {
        let (events, mut receiver) = event_channel();
        let mut client = DiscoveryClient::new(FakeService::default(), events);

        client.submit("notauri").unwrap();
        let Ok(DiscoveryEvent::Discovered(result)) = receiver.try_recv() else {
            panic!("expected a discovered event");
        };

        assert_eq!(result.uri, "notauri");
        assert_eq!(
            format_result(&result),
            vec!["Invalid URI 'notauri'", "This URI cannot be played"]
        );
    }

    #[test]
    fn shutdown_returns_to_idle() {
        let (events, _receiver) = event_channel();
        let mut client = DiscoveryClient::new(FakeService::default(), events);

        client.start_batch(Duration::from_secs(1)).unwrap();
        assert_eq!(client.state(), ClientState::SessionStarted);
        client.shutdown();
        assert_eq!(client.state(), ClientState::Idle);
    }

    #[test]
    fn unreachable_uri_produces_two_lines() {
        let (events, mut receiver) = event_channel();
        let mut client = DiscoveryClient::new(FakeService::default(), events);

        client.submit("http://unreachable.invalid/a.ogg").unwrap();
        let Ok(DiscoveryEvent::Discovered(result)) = receiver.try_recv() else {
            panic!("expected a discovered event");
        };

        assert_eq!(
            format_result(&result),
            vec![
                "Discoverer error: Resource not found.",
                "This URI cannot be played",
            ]
        );
    }

    #[test]
    fn clearing_mid_flight_keeps_later_events() {
        let (events, mut receiver) = event_channel();
        let mut client = DiscoveryClient::new(FakeService::default(), events);
        let mut log = LogBuffer::new();

        log.append_lines(["Discovering 'file:///tmp/a.mp3'", ""]);
        client.submit("file:///tmp/a.mp3").unwrap();

        log.clear();
        assert!(log.is_empty());

        while let Ok(event) = receiver.try_recv() {
            log.append_lines(event_lines(&event));
        }

        assert!(log.text().starts_with("Discovered 'file:///tmp/a.mp3'\n"));
        assert!(log.text().contains("Finished discovering\n"));
    }
}
