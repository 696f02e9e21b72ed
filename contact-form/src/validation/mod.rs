//! Contact form validation.
//!
//! Fields declare rules by name; a [`ValidatorRegistry`] maps names to rule
//! objects, and the [`FormValidator`] runs them per field or across the form.
//!
//! # Example
//!
//! ```
//! use contact_form::config::UnknownValidatorPolicy;
//! use contact_form::ui::LogUi;
//! use contact_form::validation::{FormValidator, ValidatorRegistry, Validity, contact_fields};
//!
//! let mut form = FormValidator::new(
//!     contact_fields(),
//!     ValidatorRegistry::with_defaults(),
//!     UnknownValidatorPolicy::Permissive,
//! )
//! .unwrap();
//!
//! form.set_value("email", "not an email").unwrap();
//! form.validate_field("email", false, &LogUi).unwrap();
//! assert_eq!(
//!     form.state("email").unwrap().validity,
//!     Validity::Invalid("Please enter a valid email address".into())
//! );
//! ```

mod engine;
mod field;
mod registry;
mod result;
pub mod rules;

pub use engine::FormValidator;
pub use field::{DEFAULT_MIN_LENGTH, FieldSpec, MESSAGE_MIN_LENGTH, contact_fields};
pub use registry::ValidatorRegistry;
pub use result::{FieldState, FormSnapshot, FormValues, Validity};
pub use rules::{FieldRule, RuleOutcome};
