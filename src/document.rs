//! The document under lint.
//!
//! A [`Document`] is an immutable, ordered sequence of text lines. It is
//! constructed once per lint run and shared read-only by every rule.

/// An ordered sequence of lines split from raw document content.
///
/// Lines are split on `\n` only; a trailing `\r` stays part of the line
/// content so line numbers match what an editor shows for CRLF files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split document content into lines.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    /// Split raw bytes into lines, converting lossily from UTF-8.
    ///
    /// The linter makes no encoding promises; invalid sequences become
    /// replacement characters rather than aborting the run.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// All lines, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over lines with their 1-based line numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}
