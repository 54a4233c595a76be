//! Lint rule definitions.
//!
//! This module provides the core trait and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule

use super::finding::Finding;
use crate::document::Document;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lint rule that checks one aspect of a document.
///
/// Each rule is an independent scan over the document's lines and produces
/// zero or more findings. Rules cannot fail: a rule that finds nothing wrong
/// returns an empty vector, never a sentinel finding.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the document and return any findings.
    fn check(&self, doc: &Document) -> Vec<Finding>;
}
