//! The text shown in the log view.

/// Append-only log text, owned by the application state.
///
/// Lines are stored newline-terminated so [`LogBuffer::text`] is exactly
/// what gets saved to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBuffer {
    text: String,
}

impl LogBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn append_line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    /// Append several lines in order.
    pub fn append_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.append_line(line);
        }
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The full text, newline-terminated.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_clear() {
        let mut log = LogBuffer::new();
        log.append_line("Discovering 'file:///a.ogg'");
        log.append_lines(["", "Timeout"]);

        assert_eq!(log.text(), "Discovering 'file:///a.ogg'\n\nTimeout\n");
        assert_eq!(log.lines().count(), 3);

        log.clear();
        assert!(log.is_empty());

        log.append_line("Finished discovering");
        assert_eq!(log.text(), "Finished discovering\n");
    }
}
