//! Discoverer sessions running on a private GLib main loop.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gst::glib;
use gst_pbutils::prelude::*;
use gst_pbutils::Discoverer;
use gstreamer as gst;
use gstreamer_pbutils as gst_pbutils;

use bd_core::discovery::{
    DiscoveryError, DiscoveryEvent, DiscoveryRequest, DiscoveryService, DiscoverySession,
    EventSender,
};

use crate::convert::discovery_result;

/// Handshake from the discoverer thread: the running discoverer and its
/// loop, or the creation error message.
type Ready = Result<(Discoverer, glib::MainLoop), String>;

/// Discovery service backed by `GstDiscoverer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GstDiscoveryService;

impl GstDiscoveryService {
    pub fn new() -> Self {
        Self
    }
}

impl DiscoveryService for GstDiscoveryService {
    type Session = GstDiscoverySession;

    fn create_session(
        &self,
        timeout: Duration,
        events: EventSender,
    ) -> Result<GstDiscoverySession, DiscoveryError> {
        gst::init().map_err(|e| DiscoveryError::SessionCreation(e.to_string()))?;
        GstDiscoverySession::spawn(timeout, events)
    }
}

/// A started discoverer plus the thread iterating its main context.
pub struct GstDiscoverySession {
    discoverer: Discoverer,
    main_loop: glib::MainLoop,
    thread: Option<JoinHandle<()>>,
}

impl GstDiscoverySession {
    fn spawn(timeout: Duration, events: EventSender) -> Result<Self, DiscoveryError> {
        let (ready_tx, ready_rx) = mpsc::channel::<Ready>();

        let thread = thread::Builder::new()
            .name("discoverer".to_string())
            .spawn(move || run_discoverer(timeout, events, ready_tx))
            .map_err(|e| DiscoveryError::SessionCreation(e.to_string()))?;

        let ready = ready_rx
            .recv()
            .unwrap_or_else(|_| Err("discoverer thread exited during startup".to_string()));

        match ready {
            Ok((discoverer, main_loop)) => {
                tracing::info!("GStreamer discoverer started (timeout {:?})", timeout);
                Ok(Self {
                    discoverer,
                    main_loop,
                    thread: Some(thread),
                })
            }
            Err(message) => {
                let _ = thread.join();
                Err(DiscoveryError::SessionCreation(message))
            }
        }
    }
}

impl DiscoverySession for GstDiscoverySession {
    fn discover_async(&self, request: &DiscoveryRequest) -> bool {
        match self.discoverer.discover_uri_async(&request.uri) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("discover_uri_async({}) failed: {}", request.uri, e);
                false
            }
        }
    }
}

impl Drop for GstDiscoverySession {
    fn drop(&mut self) {
        self.main_loop.quit();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("Discoverer thread panicked");
            }
        }
    }
}

/// Body of the discoverer thread.
///
/// The discoverer is created and started with a fresh main context as the
/// thread default, so its signals are emitted from this thread's loop.
fn run_discoverer(timeout: Duration, events: EventSender, ready: mpsc::Sender<Ready>) {
    let context = glib::MainContext::new();
    let main_loop = glib::MainLoop::new(Some(&context), false);

    let outcome = context.with_thread_default(|| {
        let discoverer = match start_discoverer(timeout, events) {
            Ok(discoverer) => discoverer,
            Err(e) => {
                let _ = ready.send(Err(e.message().to_string()));
                return;
            }
        };

        if ready
            .send(Ok((discoverer.clone(), main_loop.clone())))
            .is_err()
        {
            discoverer.stop();
            return;
        }

        main_loop.run();
        discoverer.stop();
        tracing::debug!("Discoverer main loop exited");
    });

    if let Err(e) = outcome {
        tracing::error!("Cannot acquire discoverer main context: {}", e);
    }
}

fn start_discoverer(timeout: Duration, events: EventSender) -> Result<Discoverer, glib::Error> {
    let discoverer = Discoverer::new(gst::ClockTime::from_seconds(timeout.as_secs()))?;

    let discovered = events.clone();
    discoverer.connect_discovered(move |_, info, error| {
        let result = discovery_result(info, error);
        tracing::debug!("Discovered {} ({:?})", result.uri, result.status);
        let _ = discovered.send(DiscoveryEvent::Discovered(result));
    });

    discoverer.connect_finished(move |_| {
        tracing::debug!("Discoverer finished");
        let _ = events.send(DiscoveryEvent::Finished);
    });

    discoverer.start();
    Ok(discoverer)
}
