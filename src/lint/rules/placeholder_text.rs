//! Placeholder text detection.
//!
//! This rule flags lines that still carry incomplete-content markers.

use crate::document::Document;
use crate::lint::{Finding, LintRule, RuleId};

/// Tokens that flag incomplete content, in test order.
const PLACEHOLDERS: [&str; 2] = ["TODO", "coming soon"];

/// Flags lines containing placeholder text.
///
/// Tokens are matched case-insensitively. Each offending line produces
/// exactly one finding: the first token that matches wins, even if the line
/// contains several.
pub struct PlaceholderTextRule;

impl LintRule for PlaceholderTextRule {
    fn id(&self) -> RuleId {
        RuleId::new("placeholder-text")
    }

    fn name(&self) -> &str {
        "Placeholder Text"
    }

    fn description(&self) -> &str {
        "Flags leftover placeholder text such as TODO or 'coming soon'"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (number, line) in doc.numbered() {
            let lower = line.to_lowercase();
            for placeholder in PLACEHOLDERS {
                if lower.contains(&placeholder.to_lowercase()) {
                    findings.push(Finding::at_line(
                        self.id(),
                        number,
                        format!("Found placeholder text: '{placeholder}'"),
                    ));
                    break;
                }
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<Finding> {
        PlaceholderTextRule.check(&Document::parse(content))
    }

    #[test]
    fn passes_clean_document() {
        assert!(check("# Project\n\nThis is complete.").is_empty());
    }

    #[test]
    fn flags_todo_with_line_number() {
        let findings = check("# Project\n\nTODO: Add docs");

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(3));
        assert_eq!(findings[0].message, "Found placeholder text: 'TODO'");
    }

    #[test]
    fn flags_coming_soon_case_insensitively() {
        let findings = check("# Project\n\nComing Soon");

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Found placeholder text: 'coming soon'");
    }

    #[test]
    fn flags_lowercase_todo() {
        let findings = check("todo: finish this");

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Found placeholder text: 'TODO'");
    }

    #[test]
    fn one_finding_per_offending_line() {
        let findings = check("# Project\n\nTODO: Fix\n\nComing soon");

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, Some(3));
        assert_eq!(findings[1].line, Some(5));
    }

    #[test]
    fn first_token_wins_on_one_line() {
        let findings = check("TODO and coming soon on one line");

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Found placeholder text: 'TODO'");
    }

    #[test]
    fn same_token_on_multiple_lines_reports_each() {
        let findings = check("TODO\nfine\nTODO again");

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, Some(1));
        assert_eq!(findings[1].line, Some(3));
    }
}
