//! Submission domain - handing scenarios to the Make platform

mod credentials;
mod submitter;

pub use credentials::{MakeCredentials, SubmissionReceipt};
pub use submitter::ScenarioSubmitter;

#[cfg(test)]
pub use submitter::mock;
