//! Submission transport seam.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use tokio::sync::mpsc;

use crate::error::{SubmitError, extract_panic_message};
use crate::validation::FormValues;

/// Delivers a validated form somewhere.
///
/// Called once per submission with the trimmed field values.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Submit the form.
    async fn submit(&self, values: &FormValues) -> Result<(), SubmitError>;
}

/// Stand-in transport that waits a fixed delay, then reports a fixed outcome.
///
/// Succeeds by default. Real deployments replace it with a network client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use contact_form::submission::SimulatedTransport;
///
/// let transport = SimulatedTransport::new(Duration::from_millis(500))
///     .failing("Service unavailable");
/// assert_eq!(transport.delay(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedTransport {
    /// Default delay before the outcome is reported.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Create a transport that succeeds after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Make every submission fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        log::debug!("Simulating submission of {} fields", values.len());
        tokio::time::sleep(self.delay).await;
        match &self.failure {
            Some(reason) => Err(SubmitError::rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Run `transport` in its own task and send the outcome on `tx`.
///
/// The task is detached. A panicking transport is reported as
/// [`SubmitError::Panicked`], so the owner always hears back exactly once.
pub(crate) fn dispatch<E>(
    transport: Arc<dyn SubmissionTransport>,
    values: FormValues,
    tx: mpsc::UnboundedSender<E>,
) where
    E: From<Result<(), SubmitError>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = AssertUnwindSafe(transport.submit(&values))
            .catch_unwind()
            .await;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(panic) => {
                let message = extract_panic_message(&panic);
                log::error!("Submission transport panicked: {}", message);
                Err(SubmitError::Panicked(message))
            }
        };

        // Receiver dropped = owner is gone.
        let _ = tx.send(E::from(outcome));
    });
}
