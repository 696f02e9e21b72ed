//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use contact_form::prelude::*;
use contact_form::validation::FormValues;

/// One recorded UI adapter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    Render {
        key: String,
        valid: bool,
        message: String,
    },
    Clear(String),
    Loading(bool),
    Success,
    Failure(String),
    ResetAll,
    Shake(bool),
}

/// UI adapter that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingUi {
    calls: Arc<Mutex<Vec<UiCall>>>,
}

impl RecordingUi {
    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Current loading state, as last set.
    pub fn loading(&self) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                UiCall::Loading(loading) => Some(*loading),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Render calls for one field, oldest first.
    pub fn renders(&self, key: &str) -> Vec<(bool, String)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                UiCall::Render {
                    key: k,
                    valid,
                    message,
                } if k == key => Some((*valid, message.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &UiCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn position(&self, call: &UiCall) -> Option<usize> {
        self.calls.lock().unwrap().iter().position(|c| c == call)
    }

    fn push(&self, call: UiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl UiAdapter for RecordingUi {
    fn render_field_result(&self, key: &str, valid: bool, message: &str) {
        self.push(UiCall::Render {
            key: key.to_string(),
            valid,
            message: message.to_string(),
        });
    }

    fn clear_field_visual(&self, key: &str) {
        self.push(UiCall::Clear(key.to_string()));
    }

    fn set_submit_loading(&self, loading: bool) {
        self.push(UiCall::Loading(loading));
    }

    fn show_success(&self) {
        self.push(UiCall::Success);
    }

    fn show_failure(&self, message: &str) {
        self.push(UiCall::Failure(message.to_string()));
    }

    fn reset_all(&self) {
        self.push(UiCall::ResetAll);
    }

    fn shake(&self, active: bool) {
        self.push(UiCall::Shake(active));
    }
}

/// Transport with a fixed delay and outcome that counts its calls.
#[derive(Debug, Clone)]
pub struct ScriptedTransport {
    delay: Duration,
    outcome: Result<(), SubmitError>,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<FormValues>>>,
}

impl ScriptedTransport {
    pub fn succeeding(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Ok(()),
            calls: Arc::default(),
            received: Arc::default(),
        }
    }

    pub fn failing(delay: Duration, error: SubmitError) -> Self {
        Self {
            outcome: Err(error),
            ..Self::succeeding(delay)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<FormValues> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for ScriptedTransport {
    async fn submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(values.clone());
        tokio::time::sleep(self.delay).await;
        self.outcome.clone()
    }
}

/// Transport that panics mid-submission.
pub struct PanickingTransport;

#[async_trait]
impl SubmissionTransport for PanickingTransport {
    async fn submit(&self, _values: &FormValues) -> Result<(), SubmitError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        panic!("transport bug");
    }
}

/// Enter a valid value into every contact field.
pub fn fill_valid<U: UiAdapter>(form: &mut ContactForm<U>) {
    form.input("name", "Ada Lovelace").unwrap();
    form.input("email", "ada@example.com").unwrap();
    form.input("subject", "Engines").unwrap();
    form.input("message", "About the analytical engine.").unwrap();
}

/// Apply background events until one matches.
pub async fn wait_for<U: UiAdapter>(
    form: &mut ContactForm<U>,
    matches: impl Fn(&FormEvent) -> bool,
) -> FormEvent {
    loop {
        let event = form.next_event().await.expect("event channel closed");
        if matches(&event) {
            return event;
        }
    }
}

pub fn is_settled(event: &FormEvent) -> bool {
    matches!(event, FormEvent::Settled(_))
}
