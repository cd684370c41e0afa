//! Saving the log view to a file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::log_buffer::LogBuffer;

/// Environment variables consulted, in order, for the current user name.
const USER_VARS: [&str; 2] = ["USER", "LOGNAME"];

/// Errors that can occur while saving the log.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("No filename given")]
    EmptyFilename,

    #[error("Filename must not contain path separators or '..': {0}")]
    InvalidFilename(String),

    #[error("Cannot determine the current user (USER and LOGNAME are unset)")]
    NoUser,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `/home/<user>/Downloads`, with the user name taken from the first
/// non-empty variable in `USER`, `LOGNAME` as reported by `lookup`.
pub fn downloads_dir_for<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    USER_VARS
        .iter()
        .filter_map(|&var| lookup(var))
        .find(|name| !name.is_empty())
        .map(|user| PathBuf::from("/home").join(user).join("Downloads"))
}

/// Build the destination path for a user-supplied filename.
///
/// The filename is used as typed but must name a file directly inside the
/// folder. An empty `save_folder` means the current user's Downloads folder.
pub fn resolve_save_path(filename: &str, save_folder: &str) -> Result<PathBuf, SaveError> {
    if filename.is_empty() {
        return Err(SaveError::EmptyFilename);
    }
    if filename.contains(['/', '\\']) || filename == "." || filename == ".." {
        return Err(SaveError::InvalidFilename(filename.to_string()));
    }

    let folder = if save_folder.is_empty() {
        downloads_dir_for(|var| std::env::var(var).ok()).ok_or(SaveError::NoUser)?
    } else {
        PathBuf::from(save_folder)
    };

    Ok(folder.join(filename))
}

/// Write the log text verbatim to `path`, replacing any existing file.
pub fn save_log(log: &LogBuffer, path: &Path) -> Result<(), SaveError> {
    fs::write(path, log.text()).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved log to {}", path.display());
    Ok(())
}
