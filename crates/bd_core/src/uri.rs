//! Turning file paths into URIs the discovery service accepts.

use std::io;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

/// Bytes escaped in the path part of a `file://` URI.
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Errors converting a path to a URI.
#[derive(Error, Debug)]
pub enum UriError {
    #[error("Cannot resolve relative path: {0}")]
    Io(#[from] io::Error),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),
}

/// Convert a filesystem path to a `file://` URI.
///
/// Relative paths are resolved against the current directory.
pub fn path_to_uri(path: &Path) -> Result<String, UriError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let text = absolute
        .to_str()
        .ok_or_else(|| UriError::NotUtf8(absolute.clone()))?;

    Ok(format!("file://{}", utf8_percent_encode(text, PATH_ESCAPES)))
}
