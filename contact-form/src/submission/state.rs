//! Submission lifecycle.

use crate::error::SubmitError;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Ready to accept a submit.
    #[default]
    Idle,
    /// A submission is in flight.
    Pending,
    /// The last submission succeeded; the success indicator is showing.
    Succeeded,
    /// The last submission failed with the given user-facing reason.
    Failed(String),
}

/// Guards the `Idle -> Pending -> {Succeeded, Failed} -> Idle` transitions.
///
/// At most one submission can be pending. Requests outside `Idle` are refused,
/// never queued.
#[derive(Debug, Clone, Default)]
pub struct SubmissionMachine {
    state: SubmissionState,
    last_error: Option<SubmitError>,
    completed: u64,
}

impl SubmissionMachine {
    /// Create a machine in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Check if a submission is in flight.
    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Error of the most recent failed submission.
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Number of submissions that reached an outcome.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Enter `Pending`.
    ///
    /// Fails with the current state unless `Idle`.
    pub fn begin(&mut self) -> Result<(), SubmissionState> {
        if self.state != SubmissionState::Idle {
            return Err(self.state.clone());
        }
        self.state = SubmissionState::Pending;
        Ok(())
    }

    /// Record the transport outcome and leave `Pending`.
    ///
    /// Returns `false` (and changes nothing) if no submission was pending.
    pub fn settle(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.completed += 1;
        self.state = match outcome {
            Ok(()) => {
                self.last_error = None;
                SubmissionState::Succeeded
            }
            Err(err) => {
                let reason = err.reason();
                self.last_error = Some(err);
                SubmissionState::Failed(reason)
            }
        };
        true
    }

    /// Return to `Idle` from an outcome state.
    ///
    /// Does nothing while `Pending`; in-flight submissions can't be abandoned.
    pub fn finish(&mut self) {
        if !self.is_pending() {
            self.state = SubmissionState::Idle;
        }
    }
}
