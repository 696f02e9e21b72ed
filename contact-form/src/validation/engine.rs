//! Per-field and whole-form validation.

use crate::config::UnknownValidatorPolicy;
use crate::error::FormError;
use crate::ui::UiAdapter;

use super::field::FieldSpec;
use super::registry::ValidatorRegistry;
use super::result::{FieldState, FormSnapshot, FormValues, Validity};

/// A declared field together with its raw value and latest state.
#[derive(Debug, Clone)]
struct FieldEntry {
    spec: FieldSpec,
    raw: String,
    state: FieldState,
}

/// Runs validators for the fields of one form and keeps their states.
///
/// The engine is the only writer of field state. Results reach the UI only
/// through the [`UiAdapter`] passed to the non-silent calls.
#[derive(Debug, Clone)]
pub struct FormValidator {
    registry: ValidatorRegistry,
    fields: Vec<FieldEntry>,
}

impl FormValidator {
    /// Create an engine for `specs` using `registry`.
    ///
    /// Under [`UnknownValidatorPolicy::Strict`], every validator name must be
    /// registered.
    pub fn new(
        specs: Vec<FieldSpec>,
        registry: ValidatorRegistry,
        policy: UnknownValidatorPolicy,
    ) -> Result<Self, FormError> {
        if policy == UnknownValidatorPolicy::Strict {
            for spec in &specs {
                if let Some(name) = spec
                    .validator_names()
                    .iter()
                    .find(|name| !registry.contains(name))
                {
                    return Err(FormError::UnknownValidator {
                        field: spec.key().to_string(),
                        validator: name.clone(),
                    });
                }
            }
        }

        let fields = specs
            .into_iter()
            .map(|spec| FieldEntry {
                spec,
                raw: String::new(),
                state: FieldState::default(),
            })
            .collect();

        Ok(Self { registry, fields })
    }

    /// Declared fields, in order.
    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(|entry| &entry.spec)
    }

    /// Check if `key` names a field of this form.
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.iter().any(|entry| entry.spec.key() == key)
    }

    /// Replace a field's raw value.
    ///
    /// The field goes back to [`Validity::Unvalidated`] since its last result
    /// no longer describes the value.
    pub fn set_value(&mut self, key: &str, raw: impl Into<String>) -> Result<(), FormError> {
        let entry = self.entry_mut(key)?;
        entry.raw = raw.into();
        entry.state.validity = Validity::Unvalidated;
        Ok(())
    }

    /// Raw value as last entered.
    pub fn value(&self, key: &str) -> Result<&str, FormError> {
        Ok(&self.entry(key)?.raw)
    }

    /// Latest state of a field.
    pub fn state(&self, key: &str) -> Result<&FieldState, FormError> {
        Ok(&self.entry(key)?.state)
    }

    /// Validate one field and store the result.
    ///
    /// Unless `silent`, the result is rendered through `ui`.
    pub fn validate_field(
        &mut self,
        key: &str,
        silent: bool,
        ui: &dyn UiAdapter,
    ) -> Result<bool, FormError> {
        let registry = &self.registry;
        let entry = self
            .fields
            .iter_mut()
            .find(|entry| entry.spec.key() == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;

        let value = entry.raw.trim().to_string();
        let validity = registry.evaluate(&entry.spec, &value);
        let valid = validity.is_valid();

        log::debug!(
            "Validated '{}' (silent: {}): {:?}",
            key,
            silent,
            validity
        );

        if !silent {
            ui.render_field_result(key, valid, validity.message().unwrap_or_default());
        }

        entry.state = FieldState { value, validity };
        Ok(valid)
    }

    /// Validate every field in declaration order.
    ///
    /// Keeps going after a failure so every field's UI is refreshed.
    pub fn validate_form(&mut self, ui: &dyn UiAdapter) -> bool {
        let keys: Vec<String> = self.specs().map(|spec| spec.key().to_string()).collect();

        let mut all_valid = true;
        for key in &keys {
            // Keys come from our own field list, so lookup can't fail.
            let valid = self.validate_field(key, false, ui).unwrap_or(false);
            all_valid &= valid;
        }
        all_valid
    }

    /// Remove a field's error visuals without re-validating.
    pub fn clear_field_error(&self, key: &str, ui: &dyn UiAdapter) -> Result<(), FormError> {
        self.entry(key)?;
        ui.clear_field_visual(key);
        Ok(())
    }

    /// States of all fields.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::new(
            self.fields
                .iter()
                .map(|entry| (entry.spec.key().to_string(), entry.state.clone()))
                .collect(),
        )
    }

    /// Trimmed values of all fields.
    pub fn values(&self) -> FormValues {
        FormValues::new(
            self.fields
                .iter()
                .map(|entry| (entry.spec.key().to_string(), entry.raw.trim().to_string()))
                .collect(),
        )
    }

    /// Clear all values and states.
    pub fn reset(&mut self) {
        for entry in &mut self.fields {
            entry.raw.clear();
            entry.state = FieldState::default();
        }
    }

    fn entry(&self, key: &str) -> Result<&FieldEntry, FormError> {
        self.fields
            .iter()
            .find(|entry| entry.spec.key() == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    fn entry_mut(&mut self, key: &str) -> Result<&mut FieldEntry, FormError> {
        self.fields
            .iter_mut()
            .find(|entry| entry.spec.key() == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }
}
