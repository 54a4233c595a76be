//! Human-readable output formatter.
//!
//! Formats lint findings for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::Finding;
use console::style;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats lint output for human consumption.
///
/// Each finding becomes one line: `[FAIL] <path>:<line>: <message>` when the
/// finding is anchored to a line, `[FAIL] <path>: <message>` when it is
/// document-level.
pub struct HumanFormatter {
    path: PathBuf,
    use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter for findings against `path`.
    pub fn new(path: impl AsRef<Path>, use_color: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            use_color,
        }
    }

    fn fail_tag(&self) -> String {
        if self.use_color {
            style("[FAIL]").red().bold().to_string()
        } else {
            "[FAIL]".to_string()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        let tag = self.fail_tag();

        for finding in findings {
            match finding.line {
                Some(line) => writeln!(
                    writer,
                    "{} {}:{}: {}",
                    tag,
                    self.path.display(),
                    line,
                    finding.message
                )?,
                None => writeln!(writer, "{} {}: {}", tag, self.path.display(), finding.message)?,
            }
        }

        Ok(())
    }
}
