//! Discovery client and the service contract it drives.
//!
//! The probing engine is an external collaborator reached through
//! [`DiscoveryService`]. Results come back as [`DiscoveryEvent`]s on an
//! unbounded channel, so whoever owns the receiving end (the UI loop, or a
//! test) decides where they are handled.
//!
//! # Example
//!
//! ```no_run
//! # use bd_core::discovery::{DiscoveryClient, DiscoveryService, event_channel};
//! # fn run<S: DiscoveryService>(service: S) {
//! let (events, mut receiver) = event_channel();
//! let mut client = DiscoveryClient::new(service, events);
//!
//! // The session is created on the first submission.
//! if let Err(e) = client.submit("file:///tmp/a.mp3") {
//!     eprintln!("{}", e);
//! }
//! # }
//! ```

mod client;
mod service;
mod types;

pub use client::{ClientState, DiscoveryClient, DEFAULT_TIMEOUT};
pub use service::{DiscoveryService, DiscoverySession};
pub use types::{
    event_channel, DiscoveryError, DiscoveryEvent, DiscoveryRequest, EventReceiver, EventSender,
};
