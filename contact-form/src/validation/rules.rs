//! Built-in validation rules.

use std::sync::LazyLock;

use regex::Regex;

use super::field::FieldSpec;

/// Name of the non-empty rule.
pub const REQUIRED: &str = "required";
/// Name of the email format rule.
pub const EMAIL: &str = "email";
/// Name of the minimum length rule.
pub const MIN_LENGTH: &str = "minLength";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

/// Result of running one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule.
    Fail(String),
}

impl RuleOutcome {
    /// Creates a failing outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }

    /// Check if the rule passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Failure message, if the rule failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }
}

/// A named validation rule.
///
/// Rules receive the trimmed field value and the declaring field, so messages
/// can use the label and thresholds can come from the field.
pub trait FieldRule: Send + Sync {
    /// Check a value.
    fn check(&self, value: &str, field: &FieldSpec) -> RuleOutcome;
}

impl<F> FieldRule for F
where
    F: Fn(&str, &FieldSpec) -> RuleOutcome + Send + Sync,
{
    fn check(&self, value: &str, field: &FieldSpec) -> RuleOutcome {
        self(value, field)
    }
}

/// Value must be non-empty after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl FieldRule for Required {
    fn check(&self, value: &str, field: &FieldSpec) -> RuleOutcome {
        if value.trim().is_empty() {
            RuleOutcome::fail(format!("{} is required", field.label()))
        } else {
            RuleOutcome::Pass
        }
    }
}

/// Value must look like `local@domain.tld`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl FieldRule for Email {
    fn check(&self, value: &str, _field: &FieldSpec) -> RuleOutcome {
        if EMAIL_PATTERN.is_match(value) {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("Please enter a valid email address")
        }
    }
}

/// Value must have at least the field's threshold in characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLength;

impl FieldRule for MinLength {
    fn check(&self, value: &str, field: &FieldSpec) -> RuleOutcome {
        let min = field.min_length_threshold();
        if value.chars().count() >= min {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail(format!(
                "{} must be at least {} characters",
                field.label(),
                min
            ))
        }
    }
}
