//! Data models for Basic Discoverer.
//!
//! These are plain-data snapshots of what the discovery service reports:
//! - Result status and per-URI results
//! - The stream topology tree
//! - Ordered tag lists

mod result;
mod stream;
mod tags;

pub use result::{DiscoveryResult, DiscoveryStatus};
pub use stream::{StreamInfoNode, Successor};
pub use tags::{TagList, TagValue};
