//! Per-URI result lines.

use std::time::Duration;

use crate::models::{DiscoveryResult, DiscoveryStatus};

use super::tags::format_tag_list;
use super::topology::format_topology;

/// Line printed after the status of any result that is not OK.
pub const CANNOT_PLAY: &str = "This URI cannot be played";

/// Printed for an unknown duration, matching GStreamer's `GST_CLOCK_TIME_NONE`.
const UNKNOWN_CLOCK_TIME: &str = "99:99:99.999999999";

/// Format a duration as `H:MM:SS.NNNNNNNNN`.
pub fn format_clock_time(duration: Option<Duration>) -> String {
    let Some(duration) = duration else {
        return UNKNOWN_CLOCK_TIME.to_string();
    };

    let secs = duration.as_secs();
    format!(
        "{}:{:02}:{:02}.{:09}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        duration.subsec_nanos()
    )
}

/// The first line of a result, keyed by its status.
pub fn status_line(result: &DiscoveryResult) -> String {
    match result.status {
        DiscoveryStatus::Ok => format!("Discovered '{}'", result.uri),
        DiscoveryStatus::InvalidUri => format!("Invalid URI '{}'", result.uri),
        DiscoveryStatus::Error => format!(
            "Discoverer error: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        ),
        DiscoveryStatus::Timeout => "Timeout".to_string(),
        DiscoveryStatus::Busy => "Busy".to_string(),
        DiscoveryStatus::MissingPlugins => format!(
            "Missing plugins: {}",
            result.misc.as_deref().unwrap_or("")
        ),
    }
}

/// Format a full result.
///
/// Results that are not OK stop after the status line and [`CANNOT_PLAY`].
pub fn format_result(result: &DiscoveryResult) -> Vec<String> {
    let mut lines = vec![status_line(result)];

    if !result.status.is_ok() {
        lines.push(CANNOT_PLAY.to_string());
        return lines;
    }

    lines.push(String::new());
    lines.push(format!("Duration: {}", format_clock_time(result.duration)));

    if let Some(tags) = &result.tags {
        lines.push("Tags:".to_string());
        lines.extend(format_tag_list(tags, 1));
    }

    lines.push(format!(
        "Seekable: {}",
        if result.seekable { "yes" } else { "no" }
    ));
    lines.push(String::new());

    if let Some(root) = &result.stream_info {
        lines.push("Stream information:".to_string());
        lines.extend(format_topology(Some(root), 1));
        lines.push(String::new());
    }

    lines
}
