//! The lint engine.
//!
//! [`Linter`] owns a [`RuleRegistry`], reads the target document, and runs
//! every registered rule over one immutable line sequence.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::document::Document;
use crate::error::{ReadmeLintError, Result};

use super::finding::Finding;
use super::registry::RuleRegistry;
use super::rule::RuleId;

/// Runs a battery of lint rules against one document.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    /// Create a linter with all built-in rules.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }

    /// Create a linter with a custom rule registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Lint the document at `path`.
    ///
    /// A missing file is a reportable lint failure, not an error: the result
    /// is a single document-level "File not found" finding. Any other read
    /// failure propagates as a hard error so callers can distinguish a broken
    /// tool run from a failing document.
    pub fn run(&self, path: &Path) -> Result<Vec<Finding>> {
        tracing::debug!("Linting {}", path.display());

        let raw = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(vec![Finding::document(
                    RuleId::new("missing-file"),
                    "File not found",
                )]);
            }
            Err(source) => {
                return Err(ReadmeLintError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let doc = Document::from_bytes(&raw);
        Ok(self.check_document(&doc))
    }

    /// Run every registered rule over an already-parsed document.
    ///
    /// Rules run in registration order and their findings are concatenated;
    /// no rule short-circuits another, so the caller always sees the complete
    /// list of deficiencies in one pass.
    pub fn check_document(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for rule in self.registry.iter() {
            let produced = rule.check(doc);
            if !produced.is_empty() {
                tracing::debug!("{} reported {} finding(s)", rule.id(), produced.len());
            }
            findings.extend(produced);
        }

        findings
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
