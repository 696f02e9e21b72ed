//! Field declarations.

use super::rules::{EMAIL, MIN_LENGTH, REQUIRED};

/// Minimum length used when a field doesn't set its own.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Minimum length of the long-form message field.
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// Immutable declaration of a form field.
///
/// # Example
///
/// ```
/// use contact_form::validation::FieldSpec;
///
/// let spec = FieldSpec::new("company", "Company")
///     .validators(["required", "minLength"])
///     .min_length(3);
/// assert_eq!(spec.validator_names(), ["required", "minLength"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    key: String,
    label: String,
    validators: Vec<String>,
    min_length: usize,
}

impl FieldSpec {
    /// Creates a field with no validators and the default minimum length.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            validators: Vec::new(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Sets the ordered list of validator names.
    pub fn validators<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validators = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the threshold used by the `minLength` rule.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Stable identity of the field.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable label used in messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Validator names in evaluation order.
    pub fn validator_names(&self) -> &[String] {
        &self.validators
    }

    /// Threshold for the `minLength` rule, in characters.
    pub fn min_length_threshold(&self) -> usize {
        self.min_length
    }
}

/// The four fields of the contact form, in display order.
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Name").validators([REQUIRED, MIN_LENGTH]),
        FieldSpec::new("email", "Email").validators([REQUIRED, EMAIL]),
        FieldSpec::new("subject", "Subject").validators([REQUIRED, MIN_LENGTH]),
        FieldSpec::new("message", "Message")
            .validators([REQUIRED, MIN_LENGTH])
            .min_length(MESSAGE_MIN_LENGTH),
    ]
}
