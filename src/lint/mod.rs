//! Document linting.
//!
//! This module provides the rule-evaluation engine behind readme-lint.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual document checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of all rules ([`RuleRegistry`])
//! - **Findings** - Reported rule violations ([`Finding`])
//! - **Engine** - Reads the document and runs every rule ([`Linter`])
//! - **Formatters** - Human and JSON output ([`LintFormatter`])
//!
//! Rules are pure scans over an immutable [`Document`](crate::document::Document);
//! the registry's registration order is the report order, so re-running the
//! engine against identical content yields an identical ordered finding list.
//!
//! # Example
//!
//! ```
//! use readme_lint::document::Document;
//! use readme_lint::lint::Linter;
//!
//! let doc = Document::parse("## Subtitle\n\nDescription");
//! let findings = Linter::new().check_document(&doc);
//!
//! // The first non-blank line is not an H1 title.
//! assert!(findings[0].message.contains("No H1 title"));
//! ```

pub mod engine;
pub mod finding;
pub mod output;
pub mod probe;
pub mod registry;
pub mod rule;
pub mod rules;

pub use engine::Linter;
pub use finding::Finding;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter};
pub use probe::{CwdProbe, FileProbe};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId};
pub use rules::{H1TitleRule, LicenseFileRule, PlaceholderTextRule, RequiredSectionsRule};
