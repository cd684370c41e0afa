//! Lines for discovery events and shell actions.

use std::path::Path;

use crate::discovery::DiscoveryEvent;

use super::result::format_result;

/// Announce a submission: `Discovering '<uri>'` and a blank line.
pub fn discovering_lines(uri: &str) -> Vec<String> {
    vec![format!("Discovering '{}'", uri), String::new()]
}

/// Close a batch.
pub fn finished_lines() -> Vec<String> {
    vec![
        "Finished discovering".to_string(),
        "***".to_string(),
        String::new(),
    ]
}

/// Echo a file picked in the file chooser.
pub fn selected_file_line(path: &Path) -> String {
    format!("Selected file: {}", path.display())
}

/// Lines for a dismissed file chooser.
pub fn cancelled_lines() -> Vec<String> {
    vec![
        String::new(),
        "***".to_string(),
        "You pressed cancel".to_string(),
        "***".to_string(),
    ]
}

/// Map an event from the discovery service to the lines to append.
pub fn event_lines(event: &DiscoveryEvent) -> Vec<String> {
    match event {
        DiscoveryEvent::Discovered(result) => format_result(result),
        DiscoveryEvent::Finished => finished_lines(),
    }
}
