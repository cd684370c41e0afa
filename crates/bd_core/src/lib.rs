//! BD Core - Backend logic for Basic Discoverer
//!
//! This crate contains the formatting and discovery logic with zero UI
//! dependencies. The media probing engine is reached through the
//! [`discovery::DiscoveryService`] trait, implemented by `bd_bridge`.

pub mod config;
pub mod discovery;
pub mod format;
pub mod logging;
pub mod models;
pub mod uri;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
