//! The contact form controller.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::FormConfig;
use crate::error::{FormError, SubmitError};
use crate::schedule::{Scheduler, TaskKey, Ticket};
use crate::submission::{SubmissionMachine, SubmissionState, SubmissionTransport, dispatch};
use crate::ui::UiAdapter;
use crate::validation::{FieldSpec, FormSnapshot, FormValidator, FormValues, ValidatorRegistry, contact_fields};

/// Everything that can happen to a form.
///
/// The first four come from the user; `Timer` and `Settled` are produced by the
/// controller's own background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's raw value changed.
    Input {
        /// Field key.
        key: String,
        /// New raw value.
        value: String,
    },
    /// A field lost focus.
    Blur(String),
    /// The user asked to submit.
    Submit,
    /// The user asked to clear the form.
    Reset,
    /// A scheduled delay elapsed.
    Timer(Ticket),
    /// The transport finished.
    Settled(Result<(), SubmitError>),
}

impl From<Ticket> for FormEvent {
    fn from(ticket: Ticket) -> Self {
        Self::Timer(ticket)
    }
}

impl From<Result<(), SubmitError>> for FormEvent {
    fn from(outcome: Result<(), SubmitError>) -> Self {
        Self::Settled(outcome)
    }
}

/// What a submit request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The form was valid and the transport was started.
    Started,
    /// At least one field failed; the form shook and stayed idle.
    Invalid,
    /// Not idle; nothing happened.
    Rejected(SubmissionState),
}

/// Builder for [`ContactForm`].
#[derive(Debug, Clone)]
pub struct ContactFormBuilder {
    config: FormConfig,
    fields: Vec<FieldSpec>,
    registry: ValidatorRegistry,
}

impl Default for ContactFormBuilder {
    fn default() -> Self {
        Self {
            config: FormConfig::default(),
            fields: contact_fields(),
            registry: ValidatorRegistry::with_defaults(),
        }
    }
}

impl ContactFormBuilder {
    /// Start from the standard contact fields and default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the standard contact fields.
    pub fn fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    /// Replace the default rule registry.
    pub fn registry(mut self, registry: ValidatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Build the controller.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build<U: UiAdapter>(
        self,
        ui: U,
        transport: impl SubmissionTransport + 'static,
    ) -> Result<ContactForm<U>, FormError> {
        let validator = FormValidator::new(
            self.fields,
            self.registry,
            self.config.unknown_validators,
        )?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(ContactForm {
            config: self.config,
            validator,
            submission: SubmissionMachine::new(),
            ui,
            transport: Arc::new(transport),
            scheduler: Scheduler::new(tx.clone()),
            tx,
            rx,
        })
    }
}

/// A contact form: validation, debounce, shake and submission in one owner.
///
/// All state changes happen in `&mut self` methods on the owning task. Timers
/// and the transport run in background tasks and report back as
/// [`FormEvent`]s, which [`next_event`](Self::next_event) or
/// [`run`](Self::run) apply.
///
/// # Example
///
/// ```
/// use contact_form::{ContactForm, SubmitAttempt};
/// use contact_form::submission::SimulatedTransport;
/// use contact_form::ui::LogUi;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut form = ContactForm::new(LogUi, SimulatedTransport::default()).unwrap();
/// assert_eq!(form.submit(), SubmitAttempt::Invalid);
/// # }
/// ```
pub struct ContactForm<U: UiAdapter> {
    config: FormConfig,
    validator: FormValidator,
    submission: SubmissionMachine,
    ui: U,
    transport: Arc<dyn SubmissionTransport>,
    scheduler: Scheduler<FormEvent>,
    tx: mpsc::UnboundedSender<FormEvent>,
    rx: mpsc::UnboundedReceiver<FormEvent>,
}

impl<U: UiAdapter> ContactForm<U> {
    /// Standard four-field contact form with default settings.
    pub fn new(ui: U, transport: impl SubmissionTransport + 'static) -> Result<Self, FormError> {
        ContactFormBuilder::new().build(ui, transport)
    }

    /// The UI adapter.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Active configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current submission state.
    pub fn submission_state(&self) -> &SubmissionState {
        self.submission.state()
    }

    /// The submission state machine.
    pub fn submission(&self) -> &SubmissionMachine {
        &self.submission
    }

    /// States of all fields.
    pub fn snapshot(&self) -> FormSnapshot {
        self.validator.snapshot()
    }

    /// Trimmed values of all fields.
    pub fn values(&self) -> FormValues {
        self.validator.values()
    }

    /// Raw value of a field.
    pub fn value(&self, key: &str) -> Result<&str, FormError> {
        self.validator.value(key)
    }

    /// Check if background work (timers or a submission) is outstanding.
    pub fn is_busy(&self) -> bool {
        self.scheduler.has_pending() || self.submission.is_pending()
    }

    // -------------------------------------------------------------------------
    // User events
    // -------------------------------------------------------------------------

    /// Apply an edit: store the value, clear error visuals, restart the debounce.
    pub fn input(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.validator.set_value(key, value)?;
        self.validator.clear_field_error(key, &self.ui)?;
        self.scheduler
            .schedule(TaskKey::Debounce(key.to_string()), self.config.debounce);
        Ok(())
    }

    /// Validate a field visibly when it loses focus.
    pub fn blur(&mut self, key: &str) -> Result<bool, FormError> {
        let valid = self.validator.validate_field(key, false, &self.ui)?;
        self.scheduler.cancel(&TaskKey::Debounce(key.to_string()));
        Ok(valid)
    }

    /// Validate one field, rendering the result unless `silent`.
    pub fn validate_field(&mut self, key: &str, silent: bool) -> Result<bool, FormError> {
        self.validator.validate_field(key, silent, &self.ui)
    }

    /// Validate every field visibly.
    pub fn validate_form(&mut self) -> bool {
        self.validator.validate_form(&self.ui)
    }

    /// Remove a field's error visuals without re-validating.
    pub fn clear_field_error(&self, key: &str) -> Result<(), FormError> {
        self.validator.clear_field_error(key, &self.ui)
    }

    /// Try to submit.
    ///
    /// Only accepted while idle. An invalid form shakes instead of submitting.
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.submission.state() != &SubmissionState::Idle {
            log::debug!(
                "Ignoring submit while {:?}",
                self.submission.state()
            );
            return SubmitAttempt::Rejected(self.submission.state().clone());
        }

        if !self.validate_form() {
            let invalid = self.validator.snapshot();
            log::debug!("Submit blocked by {:?}", invalid.invalid_fields());
            self.ui.shake(true);
            self.scheduler
                .schedule(TaskKey::Shake, self.config.shake_duration);
            return SubmitAttempt::Invalid;
        }

        if let Err(state) = self.submission.begin() {
            return SubmitAttempt::Rejected(state);
        }

        log::info!("Submitting contact form");
        self.ui.set_submit_loading(true);
        dispatch(
            Arc::clone(&self.transport),
            self.validator.values(),
            self.tx.clone(),
        );
        SubmitAttempt::Started
    }

    /// Clear all fields and indicators.
    ///
    /// An in-flight submission keeps running and its outcome is still shown.
    pub fn reset(&mut self) {
        self.scheduler
            .cancel_where(|key| !matches!(key, TaskKey::Shake));
        self.validator.reset();
        self.submission.finish();
        self.ui.reset_all();
    }

    // -------------------------------------------------------------------------
    // Event loop
    // -------------------------------------------------------------------------

    /// Apply one event.
    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::Input { key, value } => {
                if let Err(e) = self.input(&key, value) {
                    log::warn!("Ignoring input: {}", e);
                }
            }
            FormEvent::Blur(key) => {
                if let Err(e) = self.blur(&key) {
                    log::warn!("Ignoring blur: {}", e);
                }
            }
            FormEvent::Submit => {
                self.submit();
            }
            FormEvent::Reset => self.reset(),
            FormEvent::Timer(ticket) => self.on_timer(ticket),
            FormEvent::Settled(outcome) => self.on_settled(outcome),
        }
    }

    /// Wait for the next background event (timer or transport) and apply it.
    ///
    /// Returns the applied event.
    pub async fn next_event(&mut self) -> Option<FormEvent> {
        let event = self.rx.recv().await?;
        self.handle(event.clone());
        Some(event)
    }

    /// Drive the form from a stream of user events.
    ///
    /// Returns once `events` is closed and no background work is left.
    pub async fn run(&mut self, mut events: mpsc::Receiver<FormEvent>) {
        let mut open = true;
        loop {
            if !open && !self.is_busy() {
                break;
            }
            tokio::select! {
                event = events.recv(), if open => match event {
                    Some(event) => self.handle(event),
                    None => open = false,
                },
                Some(event) = self.rx.recv() => self.handle(event),
            }
        }
    }

    fn on_timer(&mut self, ticket: Ticket) {
        if !self.scheduler.accept(&ticket) {
            return;
        }

        match ticket.key {
            TaskKey::Debounce(key) => {
                // Soft feedback: confirm a valid field, stay quiet otherwise.
                match self.validator.validate_field(&key, true, &self.ui) {
                    Ok(true) => self.ui.render_field_result(&key, true, ""),
                    Ok(false) => {}
                    Err(e) => log::warn!("Debounced validation failed: {}", e),
                }
            }
            TaskKey::Shake => self.ui.shake(false),
            TaskKey::SuccessReset => {
                log::info!("Success display elapsed, resetting form");
                self.reset();
            }
        }
    }

    fn on_settled(&mut self, outcome: Result<(), SubmitError>) {
        // Loading ends with Pending, before anything else can go wrong.
        self.ui.set_submit_loading(false);

        if !self.submission.settle(outcome) {
            log::warn!("Submission outcome arrived with nothing pending");
            return;
        }

        match self.submission.state().clone() {
            SubmissionState::Succeeded => {
                log::info!("Contact form submitted");
                self.ui.show_success();
                self.scheduler
                    .schedule(TaskKey::SuccessReset, self.config.success_display);
            }
            SubmissionState::Failed(reason) => {
                if let Some(err) = self.submission.last_error() {
                    log::warn!("Contact form submission failed: {}", err);
                }
                self.ui.show_failure(&reason);
                self.submission.finish();
            }
            SubmissionState::Idle | SubmissionState::Pending => {}
        }
    }
}
