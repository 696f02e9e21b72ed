//! Form controller configuration.

use std::time::Duration;

/// What to do when a field declares a validator name the registry doesn't know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownValidatorPolicy {
    /// Treat the unknown rule as always passing.
    ///
    /// Lets field declarations name rules that a later registry may provide.
    /// The skipped rule is logged at debug level on every run.
    #[default]
    Permissive,

    /// Refuse to build a form whose fields reference unknown rules.
    Strict,
}

/// Timing and policy settings for a [`ContactForm`](crate::ContactForm).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use contact_form::config::{FormConfig, UnknownValidatorPolicy};
///
/// let config = FormConfig::default()
///     .with_debounce(Duration::from_millis(150))
///     .with_unknown_validators(UnknownValidatorPolicy::Strict);
/// assert_eq!(config.debounce, Duration::from_millis(150));
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Quiet period after the last edit before a silent validation runs.
    ///
    /// Default: 300 ms
    pub debounce: Duration,

    /// How long the invalid-submit shake stays active.
    ///
    /// Default: 500 ms
    pub shake_duration: Duration,

    /// How long the success indicator is shown before the form resets.
    ///
    /// Default: 3 seconds
    pub success_display: Duration,

    /// Handling of unregistered validator names.
    pub unknown_validators: UnknownValidatorPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            shake_duration: Duration::from_millis(500),
            success_display: Duration::from_secs(3),
            unknown_validators: UnknownValidatorPolicy::Permissive,
        }
    }
}

impl FormConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input debounce interval.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the shake duration.
    pub fn with_shake_duration(mut self, duration: Duration) -> Self {
        self.shake_duration = duration;
        self
    }

    /// Sets how long the success indicator stays up before reset.
    pub fn with_success_display(mut self, duration: Duration) -> Self {
        self.success_display = duration;
        self
    }

    /// Sets the unknown validator policy.
    pub fn with_unknown_validators(mut self, policy: UnknownValidatorPolicy) -> Self {
        self.unknown_validators = policy;
        self
    }
}
