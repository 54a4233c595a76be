//! License file validation.
//!
//! This rule checks that a document claiming a license section is backed by
//! an actual `LICENSE` file.

use crate::document::Document;
use crate::lint::probe::{CwdProbe, FileProbe};
use crate::lint::{Finding, LintRule, RuleId};

const LICENSE_FILE: &str = "LICENSE";

/// Checks that a `## License` section is backed by a `LICENSE` file.
///
/// A document without a license section is not required to have the file, so
/// the rule is conditional on the section's presence. The section scan here
/// is recomputed rather than shared with
/// [`RequiredSectionsRule`](super::RequiredSectionsRule); the two rules are
/// independent and may diverge as the rule set grows.
pub struct LicenseFileRule {
    probe: Box<dyn FileProbe>,
}

impl LicenseFileRule {
    /// Create the rule with an injected file-existence probe.
    pub fn new(probe: Box<dyn FileProbe>) -> Self {
        Self { probe }
    }
}

impl Default for LicenseFileRule {
    fn default() -> Self {
        Self::new(Box::new(CwdProbe))
    }
}

impl LintRule for LicenseFileRule {
    fn id(&self) -> RuleId {
        RuleId::new("license-file")
    }

    fn name(&self) -> &str {
        "License File"
    }

    fn description(&self) -> &str {
        "Checks that a LICENSE file exists when the document has a license section"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let has_license_section = doc
            .lines()
            .iter()
            .any(|line| line.to_lowercase().contains("## license"));
        if !has_license_section {
            return vec![];
        }

        if self.probe.exists(LICENSE_FILE) {
            vec![]
        } else {
            vec![Finding::document(
                self.id(),
                "No LICENSE file found in repository root",
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProbe {
        exists: bool,
    }

    impl FileProbe for StaticProbe {
        fn exists(&self, _name: &str) -> bool {
            self.exists
        }
    }

    fn rule(license_present: bool) -> LicenseFileRule {
        LicenseFileRule::new(Box::new(StaticProbe {
            exists: license_present,
        }))
    }

    #[test]
    fn no_license_section_means_no_finding() {
        let doc = Document::parse("# Project");

        assert!(rule(false).check(&doc).is_empty());
        assert!(rule(true).check(&doc).is_empty());
    }

    #[test]
    fn section_with_file_passes() {
        let doc = Document::parse("# Project\n\n## License\n\nMIT");

        assert!(rule(true).check(&doc).is_empty());
    }

    #[test]
    fn section_without_file_fails() {
        let doc = Document::parse("# Project\n\n## License\n\nMIT");
        let findings = rule(false).check(&doc);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, None);
        assert_eq!(findings[0].message, "No LICENSE file found in repository root");
    }

    #[test]
    fn section_heading_matches_case_insensitively() {
        let doc = Document::parse("# Project\n\n## LICENSE");
        let findings = rule(false).check(&doc);

        assert_eq!(findings.len(), 1);
    }
}
