//! Log view handlers.

use bd_core::logging::{resolve_save_path, save_log};

use crate::app::App;

impl App {
    /// Empty the log view. Events still in flight append afterwards as usual.
    pub fn clear_log(&mut self) {
        self.log.clear();
        tracing::debug!("Log view cleared");
    }

    /// Write the log view to the file named in the save entry.
    ///
    /// Failures are traced but leave the log view untouched.
    pub fn save_log_to_file(&self) {
        let save_folder = self.config().settings().paths.save_folder.clone();

        let result = resolve_save_path(&self.save_filename, &save_folder)
            .and_then(|path| save_log(&self.log, &path));

        if let Err(e) = result {
            tracing::warn!("Failed to save log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bd_core::config::ConfigSection;
    use tempfile::tempdir;

    use crate::handlers::test_support::app_in;

    #[test]
    fn saved_file_matches_log_view() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        {
            let mut config = app.config();
            config.settings_mut().paths.save_folder = dir.path().display().to_string();
            config.update_section(ConfigSection::Paths).unwrap();
        }

        app.log.append_lines(["Discovering 'file:///tmp/a.mp3'", ""]);
        app.save_filename = "log.txt".to_string();
        app.save_log_to_file();

        let saved = fs::read_to_string(dir.path().join("log.txt")).unwrap();
        assert_eq!(saved, app.log.text());
    }

    #[test]
    fn failed_save_leaves_log_untouched() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.log.append_line("Finished discovering");

        app.save_filename = String::new();
        app.save_log_to_file();

        assert_eq!(app.log.text(), "Finished discovering\n");
    }

    #[test]
    fn filename_with_path_is_not_written() {
        let dir = tempdir().unwrap();
        let save_folder = dir.path().join("saves");
        fs::create_dir(&save_folder).unwrap();
        let mut app = app_in(dir.path());
        {
            let mut config = app.config();
            config.settings_mut().paths.save_folder = save_folder.display().to_string();
        }
        app.log.append_line("Timeout");

        let outside = dir.path().join("outside.txt");
        app.save_filename = outside.display().to_string();
        app.save_log_to_file();
        app.save_filename = "../outside.txt".to_string();
        app.save_log_to_file();

        assert!(!outside.exists());
        assert_eq!(fs::read_dir(&save_folder).unwrap().count(), 0);
    }

    #[test]
    fn clear_empties_log() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.log.append_line("Selected file: /tmp/a.mp3");

        app.clear_log();

        assert!(app.log.is_empty());
    }
}
