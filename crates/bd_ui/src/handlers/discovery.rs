//! Discovery handlers: submitting URIs and printing what comes back.

use bd_bridge::GstDiscoveryService;
use bd_core::config::ConfigSection;
use bd_core::discovery::{DiscoveryClient, DiscoveryEvent, EventSender};
use bd_core::format::{discovering_lines, event_lines};

use crate::app::App;

impl App {
    /// Announce and submit one URI.
    pub fn discover(&mut self, uri: String) {
        self.log.append_lines(discovering_lines(&uri));

        let Some(client) = self.client.as_mut() else {
            tracing::debug!("Event channel not ready yet, deferring {}", uri);
            self.pending_uris.push(uri);
            return;
        };

        if let Err(e) = client.submit(&uri) {
            self.log.append_line(e.to_string());
        }
    }

    /// Submit the URI entry exactly as typed.
    pub fn submit_uri_input(&mut self) {
        let uri = self.uri_input.clone();
        self.remember_last_uri(&uri);
        self.discover(uri);
    }

    /// The subscription is up: build the client and flush queued URIs.
    pub fn handle_events_ready(&mut self, events: EventSender) {
        let timeout = self.config().settings().discovery.timeout();
        if self.client.is_some() {
            tracing::debug!("Event channel replaced, restarting discovery client");
        }
        let mut client =
            DiscoveryClient::new(GstDiscoveryService::new(), events).with_timeout(timeout);
        for uri in std::mem::take(&mut self.pending_uris) {
            if let Err(e) = client.submit(&uri) {
                self.log.append_line(e.to_string());
            }
        }
        self.client = Some(client);
    }

    /// Print one event from the discovery service.
    pub fn handle_discovery_event(&mut self, event: DiscoveryEvent) {
        self.log.append_lines(event_lines(&event));
    }

    fn remember_last_uri(&mut self, input: &str) {
        if input.is_empty() {
            return;
        }

        let mut config = self.config();
        if config.settings().paths.last_uri == input {
            return;
        }
        config.settings_mut().paths.last_uri = input.to_string();
        if let Err(e) = config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to save last URI: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bd_core::config::ConfigManager;
    use bd_core::models::{DiscoveryResult, DiscoveryStatus, StreamInfoNode, TagList, TagValue};
    use tempfile::tempdir;

    use super::*;
    use crate::handlers::test_support::app_in;

    fn discovered(result: DiscoveryResult) -> DiscoveryEvent {
        DiscoveryEvent::Discovered(result)
    }

    #[test]
    fn submission_before_channel_is_announced_and_queued() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.uri_input = "https://example.com/a.ogg".to_string();

        app.submit_uri_input();

        assert_eq!(app.log.text(), "Discovering 'https://example.com/a.ogg'\n\n");
        assert_eq!(app.pending_uris, vec!["https://example.com/a.ogg"]);
    }

    #[test]
    fn typed_text_is_submitted_verbatim() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        for typed in ["notauri", "  /tmp/a.mp3 ", ""] {
            app.uri_input = typed.to_string();
            app.submit_uri_input();
        }

        assert_eq!(app.pending_uris, vec!["notauri", "  /tmp/a.mp3 ", ""]);
        assert!(app.log.text().starts_with("Discovering 'notauri'\n\n"));
    }

    #[test]
    fn submitted_uri_is_remembered_in_config() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.uri_input = "file:///tmp/a.mp3".to_string();

        app.submit_uri_input();

        let mut reloaded = ConfigManager::new(dir.path().join("settings.toml"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.settings().paths.last_uri, "file:///tmp/a.mp3");
    }

    #[test]
    fn ok_result_and_finish_are_printed() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        let stream = StreamInfoNode::new("audio")
            .with_description("MPEG-1 Layer 3 (MP3)")
            .with_tags(TagList::new().with("title", TagValue::Text("X".to_string())));
        let result = DiscoveryResult::new("file:///tmp/a.mp3", DiscoveryStatus::Ok)
            .with_duration(Some(Duration::from_secs(3)))
            .with_tags(TagList::new().with("title", TagValue::Text("X".to_string())))
            .with_stream_info(stream);

        app.handle_discovery_event(discovered(result));
        app.handle_discovery_event(DiscoveryEvent::Finished);

        let text = app.log.text();
        assert!(text.starts_with("Discovered 'file:///tmp/a.mp3'\n"));
        assert!(text.contains("Duration: 0:00:03.000000000\n"));
        assert!(text.contains("title: X\n"));
        assert!(text.contains("Seekable: no\n"));
        assert!(text.ends_with("Finished discovering\n***\n\n"));
    }

    #[test]
    fn clearing_mid_flight_keeps_later_events() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.uri_input = "http://unreachable.invalid/a.ogg".to_string();
        app.submit_uri_input();

        app.clear_log();
        assert!(app.log.is_empty());

        let result = DiscoveryResult::new("http://unreachable.invalid/a.ogg", DiscoveryStatus::Error)
            .with_error_message("Could not resolve server name.");
        app.handle_discovery_event(discovered(result));

        assert_eq!(
            app.log.text(),
            "Discoverer error: Could not resolve server name.\nThis URI cannot be played\n"
        );
    }
}
