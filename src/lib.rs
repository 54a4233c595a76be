//! readme-lint - quality checks for README.md files.
//!
//! readme-lint inspects a single markdown document and reports structural
//! deficiencies: a missing H1 title, missing required sections, leftover
//! placeholder text, and a license section without a backing `LICENSE` file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`document`] - The immutable line sequence the rules scan
//! - [`error`] - Error types and result aliases
//! - [`lint`] - The rule engine, built-in rules, and output formatters
//!
//! # Example
//!
//! ```
//! use readme_lint::document::Document;
//! use readme_lint::lint::Linter;
//!
//! let doc = Document::parse("# My Project\n\nDescription");
//! let findings = Linter::new().check_document(&doc);
//!
//! // The title passes, but all three required sections are missing.
//! assert_eq!(findings.len(), 3);
//! ```
//!
//! For file-based linting, see [`lint::Linter::run`].

pub mod cli;
pub mod document;
pub mod error;
pub mod lint;

pub use error::{ReadmeLintError, Result};
