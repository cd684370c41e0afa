//! GStreamer bridge for bd_core
//!
//! Implements [`bd_core::discovery::DiscoveryService`] on top of
//! `GstDiscoverer`. The discoverer runs on its own thread with a private
//! GLib main loop; its `discovered` and `finished` signals are converted
//! into plain-data [`bd_core::discovery::DiscoveryEvent`]s and sent over the
//! session's event channel.

mod convert;
mod session;

pub use convert::{discovery_result, stream_node, tag_list};
pub use session::{GstDiscoveryService, GstDiscoverySession};

/// Initialize GStreamer and load its plugin registry.
///
/// Call once at startup so the first discovery does not pay for registry
/// loading on the UI thread. Sessions call it again, which is cheap once
/// initialized.
pub fn init() -> Result<(), gstreamer::glib::Error> {
    gstreamer::init()?;
    tracing::info!("{} initialized", gstreamer::version_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires a GStreamer runtime"]
    fn init_is_idempotent() {
        init().unwrap();
        init().unwrap();
        assert!(!gstreamer::version_string().is_empty());
    }
}
