//! Text formatting for discovery output.
//!
//! Every function here is pure: it turns models into the lines shown in the
//! log view. Lines carry no trailing newline; the log buffer adds those.
//!
//! # Example
//!
//! ```
//! use bd_core::format::format_result;
//! use bd_core::models::{DiscoveryResult, DiscoveryStatus};
//!
//! let result = DiscoveryResult::new("file:///missing.ogg", DiscoveryStatus::Timeout);
//! assert_eq!(format_result(&result), vec!["Timeout", "This URI cannot be played"]);
//! ```

mod events;
mod result;
mod tags;
mod topology;

pub use events::{
    cancelled_lines, discovering_lines, event_lines, finished_lines, selected_file_line,
};
pub use result::{format_clock_time, format_result, status_line, CANNOT_PLAY};
pub use tags::{format_tag, format_tag_list, indent};
pub use topology::{format_stream_node, format_topology};
