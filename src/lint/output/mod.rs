//! Lint output formatters.
//!
//! This module provides formatters for outputting lint findings in different
//! formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::Finding;
use std::io::Write;

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format findings to the given writer.
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
