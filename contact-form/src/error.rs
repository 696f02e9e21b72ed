//! Error types

use std::any::Any;

/// Errors raised by the form controller itself.
///
/// Validation failures are not errors; they are reported as
/// [`Validity::Invalid`](crate::validation::Validity::Invalid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The key does not name a field of this form.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// A field references a validator that is not registered.
    ///
    /// Only raised under [`UnknownValidatorPolicy::Strict`](crate::config::UnknownValidatorPolicy::Strict).
    #[error("Field '{field}' references unknown validator '{validator}'")]
    UnknownValidator {
        /// The field declaring the rule.
        field: String,
        /// The unregistered rule name.
        validator: String,
    },
}

/// Errors a submission transport can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The receiving side refused the submission.
    #[error("Submission rejected: {reason}")]
    Rejected {
        /// Reason given by the receiver.
        reason: String,
    },

    /// The transport could not deliver the submission.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The transport panicked while submitting.
    #[error("Transport panicked: {0}")]
    Panicked(String),
}

impl SubmitError {
    /// Creates a rejection error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns the message to show the user.
    pub fn reason(&self) -> String {
        match self {
            Self::Rejected { reason } => reason.clone(),
            Self::Transport(_) | Self::Panicked(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Extract a human-readable message from a panic payload.
///
/// Panics can carry either `&str` or `String` payloads; anything else maps to
/// a generic message.
pub fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
