//! Submission state machine and transport.

mod state;
mod transport;

pub use state::{SubmissionMachine, SubmissionState};
pub use transport::{SimulatedTransport, SubmissionTransport};

pub(crate) use transport::dispatch;
