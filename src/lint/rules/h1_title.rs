//! H1 title validation.
//!
//! This rule checks that the document opens with a level-1 heading.

use crate::document::Document;
use crate::lint::{Finding, LintRule, RuleId};

const MESSAGE: &str = "No H1 title found (e.g., # Project Name)";

/// Checks that the first non-blank line is an H1 heading.
///
/// Only the first non-blank line is ever inspected; a title appearing later
/// in the document does not satisfy the check.
pub struct H1TitleRule;

impl LintRule for H1TitleRule {
    fn id(&self) -> RuleId {
        RuleId::new("h1-title")
    }

    fn name(&self) -> &str {
        "H1 Title"
    }

    fn description(&self) -> &str {
        "Checks that the document starts with a level-1 heading"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        for (number, line) in doc.numbered() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with("# ") {
                return vec![];
            }
            return vec![Finding::at_line(self.id(), number, MESSAGE)];
        }
        // Empty or all-blank document.
        vec![Finding::at_line(self.id(), 1, MESSAGE)]
    }
}
