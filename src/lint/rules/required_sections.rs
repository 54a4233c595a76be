//! Required section validation.
//!
//! This rule checks that the standard README sections exist somewhere in the
//! document.

use crate::document::Document;
use crate::lint::{Finding, LintRule, RuleId};

/// Section markers every README must contain, in report order.
///
/// The order is deliberate (Usage, Installation, License) and is neither
/// alphabetical nor document order.
const REQUIRED_SECTIONS: [&str; 3] = ["## Usage", "## Installation", "## License"];

/// Checks that all required sections are present.
///
/// Each marker is matched as a case-insensitive substring anywhere in the
/// document, so ordering and heading casing in the document don't matter.
pub struct RequiredSectionsRule;

impl LintRule for RequiredSectionsRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-sections")
    }

    fn name(&self) -> &str {
        "Required Sections"
    }

    fn description(&self) -> &str {
        "Checks that the Usage, Installation, and License sections exist"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for section in REQUIRED_SECTIONS {
            let needle = section.to_lowercase();
            let found = doc
                .lines()
                .iter()
                .any(|line| line.to_lowercase().contains(&needle));
            if !found {
                findings.push(Finding::document(
                    self.id(),
                    format!("Missing required section: {section}"),
                ));
            }
        }

        findings
    }
}
