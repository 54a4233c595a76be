//! JSON output formatter.
//!
//! Formats lint findings as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::Finding;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats lint output as JSON.
pub struct JsonFormatter {
    path: PathBuf,
}

#[derive(Serialize)]
struct JsonOutput {
    findings: Vec<JsonFinding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding {
    rule_id: String,
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter for findings against `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        let json_findings: Vec<_> = findings
            .iter()
            .map(|f| JsonFinding {
                rule_id: f.rule_id.0.clone(),
                file: self.path.display().to_string(),
                line: f.line,
                message: f.message.clone(),
            })
            .collect();

        let output = JsonOutput {
            findings: json_findings,
            summary: JsonSummary {
                total: findings.len(),
            },
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}
