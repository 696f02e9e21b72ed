//! Name → rule lookup table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::field::FieldSpec;
use super::result::Validity;
use super::rules::{EMAIL, Email, FieldRule, MIN_LENGTH, MinLength, REQUIRED, Required, RuleOutcome};

/// Registry of validation rules, keyed by the names fields declare.
///
/// Cheap to clone; rules are shared behind `Arc`.
///
/// # Example
///
/// ```
/// use contact_form::validation::{FieldSpec, RuleOutcome, ValidatorRegistry};
///
/// let mut registry = ValidatorRegistry::with_defaults();
/// registry.register("noLinks", |value: &str, _: &FieldSpec| {
///     if value.contains("http") {
///         RuleOutcome::fail("Links are not allowed")
///     } else {
///         RuleOutcome::Pass
///     }
/// });
/// assert!(registry.contains("noLinks"));
/// ```
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    rules: HashMap<String, Arc<dyn FieldRule>>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `required`, `email` and `minLength`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(REQUIRED, Required);
        registry.register(EMAIL, Email);
        registry.register(MIN_LENGTH, MinLength);
        registry
    }

    /// Register a rule, replacing any rule already under `name`.
    pub fn register(&mut self, name: impl Into<String>, rule: impl FieldRule + 'static) {
        self.rules.insert(name.into(), Arc::new(rule));
    }

    /// Check if a rule is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run a single rule by name.
    ///
    /// Unknown names pass.
    pub fn run(&self, name: &str, value: &str, field: &FieldSpec) -> RuleOutcome {
        match self.rules.get(name) {
            Some(rule) => rule.check(value, field),
            None => {
                log::debug!(
                    "No validator named '{}' for field '{}', skipping",
                    name,
                    field.key()
                );
                RuleOutcome::Pass
            }
        }
    }

    /// Run all of a field's rules in declared order, stopping at the first failure.
    pub fn evaluate(&self, field: &FieldSpec, value: &str) -> Validity {
        for name in field.validator_names() {
            if let RuleOutcome::Fail(message) = self.run(name, value, field) {
                return Validity::Invalid(message);
            }
        }
        Validity::Valid
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
