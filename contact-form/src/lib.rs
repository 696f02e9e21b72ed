//! Contact form controller
//!
//! Validates a contact form's fields against named rules, gives debounced
//! as-you-type feedback, and drives a single-flight asynchronous submission.
//! Presentation is left to a [`UiAdapter`](ui::UiAdapter) and delivery to a
//! [`SubmissionTransport`](submission::SubmissionTransport).

pub mod config;
pub mod error;
pub mod schedule;
pub mod submission;
pub mod ui;
pub mod validation;

mod controller;

pub use controller::*;

pub mod prelude {
    pub use crate::config::{FormConfig, UnknownValidatorPolicy};
    pub use crate::controller::{ContactForm, ContactFormBuilder, FormEvent, SubmitAttempt};
    pub use crate::error::{FormError, SubmitError};
    pub use crate::submission::{SimulatedTransport, SubmissionState, SubmissionTransport};
    pub use crate::ui::{LogUi, UiAdapter};
    pub use crate::validation::{
        FieldRule, FieldSpec, FieldState, RuleOutcome, ValidatorRegistry, Validity, contact_fields,
    };
}
