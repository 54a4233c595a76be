//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all lint rules and provides methods for
//! registering, retrieving, and iterating over them. Registration order is
//! the report order: findings are emitted rule by rule in the order rules
//! were registered.

use super::rule::{LintRule, RuleId};
use super::rules::{H1TitleRule, LicenseFileRule, PlaceholderTextRule, RequiredSectionsRule};

/// Ordered registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    ///
    /// Registration order here is a presentation contract: title first, then
    /// required sections, then placeholders, then the license-file check.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(H1TitleRule));
        registry.register(Box::new(RequiredSectionsRule));
        registry.register(Box::new(PlaceholderTextRule));
        registry.register(Box::new(LicenseFileRule::default()));
        registry
    }

    /// Register a lint rule at the end of the run order.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::lint::Finding;

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn check(&self, _doc: &Document) -> Vec<Finding> {
            vec![]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("first"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("second"),
        }));

        let ids: Vec<_> = registry.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RuleId::new("first"), RuleId::new("second")]);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_with_builtins_runs_in_report_order() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.len(), 4);

        let ids: Vec<_> = registry.iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                RuleId::new("h1-title"),
                RuleId::new("required-sections"),
                RuleId::new("placeholder-text"),
                RuleId::new("license-file"),
            ]
        );
    }
}
