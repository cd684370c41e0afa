//! File browsing handlers.

use std::path::{Path, PathBuf};

use iced::Task;

use bd_core::format::{cancelled_lines, selected_file_line};
use bd_core::uri::path_to_uri;

use crate::app::{App, Message};

impl App {
    /// Browse for a media file.
    pub fn browse_file(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Choose the file to be discovered")
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::FileSelected,
        )
    }

    /// Handle the file chooser closing.
    pub fn handle_file_selected(&mut self, path: Option<PathBuf>) {
        match path {
            Some(p) => self.discover_file(&p),
            None => self.log.append_lines(cancelled_lines()),
        }
    }

    /// Handle a file dropped on the window.
    pub fn handle_file_dropped(&mut self, path: PathBuf) {
        tracing::debug!("File dropped: {}", path.display());
        self.discover_file(&path);
    }

    fn discover_file(&mut self, path: &Path) {
        self.log.append_line(selected_file_line(path));
        match path_to_uri(path) {
            Ok(uri) => self.discover(uri),
            Err(e) => {
                tracing::warn!("Cannot convert {} to a URI: {}", path.display(), e);
                self.log.append_line(e.to_string());
            }
        }
    }
}
