//! Lint findings.
//!
//! This module provides the [`Finding`] type for representing rule
//! violations, with optional line tracking for precise reporting.

use super::rule::RuleId;

/// A rule violation reported against the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// 1-based line number, or `None` for document-level findings.
    pub line: Option<usize>,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Create a finding anchored to a specific line (1-based).
    pub fn at_line(rule_id: RuleId, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a document-level finding with no specific line.
    pub fn document(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            line: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_line_carries_line_number() {
        let finding = Finding::at_line(RuleId::new("h1-title"), 3, "No H1 title");

        assert_eq!(finding.rule_id, RuleId::new("h1-title"));
        assert_eq!(finding.line, Some(3));
        assert_eq!(finding.message, "No H1 title");
    }

    #[test]
    fn document_level_has_no_line() {
        let finding = Finding::document(RuleId::new("required-sections"), "Missing section");

        assert_eq!(finding.line, None);
        assert_eq!(finding.message, "Missing section");
    }

    #[test]
    fn findings_compare_by_value() {
        let a = Finding::at_line(RuleId::new("r"), 1, "m");
        let b = Finding::at_line(RuleId::new("r"), 1, "m");
        let c = Finding::at_line(RuleId::new("r"), 2, "m");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
