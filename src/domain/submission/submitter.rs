use async_trait::async_trait;
use std::fmt::Debug;

use super::{MakeCredentials, SubmissionReceipt};
use crate::domain::scenario::ScenarioDocument;
use crate::domain::DomainError;

/// Trait for handing scenarios to the automation platform
#[async_trait]
pub trait ScenarioSubmitter: Send + Sync + Debug {
    /// Trigger a run of an existing scenario
    async fn run_scenario(
        &self,
        credentials: &MakeCredentials,
    ) -> Result<SubmissionReceipt, DomainError>;

    /// Upload a built scenario document as the scenario's definition
    async fn submit_scenario(
        &self,
        credentials: &MakeCredentials,
        document: &ScenarioDocument,
    ) -> Result<SubmissionReceipt, DomainError>;

    /// Get submitter name for logging/debugging
    fn submitter_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Submitter that records calls and optionally fails
    #[derive(Debug, Default)]
    pub struct MockScenarioSubmitter {
        fail_with: Option<String>,
        runs: Mutex<Vec<String>>,
    }

    impl MockScenarioSubmitter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                fail_with: Some(message.into()),
                runs: Mutex::new(Vec::new()),
            }
        }

        pub fn runs(&self) -> Vec<String> {
            self.runs.lock().unwrap().clone()
        }

        fn respond(
            &self,
            credentials: &MakeCredentials,
            modules: usize,
        ) -> Result<SubmissionReceipt, DomainError> {
            if let Some(message) = &self.fail_with {
                return Err(DomainError::submission("mock", message.clone()));
            }

            self.runs
                .lock()
                .unwrap()
                .push(credentials.scenario_id().to_string());

            Ok(SubmissionReceipt {
                status: "connected".to_string(),
                scenario: credentials.scenario_id().to_string(),
                modules,
            })
        }
    }

    #[async_trait]
    impl ScenarioSubmitter for MockScenarioSubmitter {
        async fn run_scenario(
            &self,
            credentials: &MakeCredentials,
        ) -> Result<SubmissionReceipt, DomainError> {
            self.respond(credentials, 0)
        }

        async fn submit_scenario(
            &self,
            credentials: &MakeCredentials,
            document: &ScenarioDocument,
        ) -> Result<SubmissionReceipt, DomainError> {
            self.respond(credentials, document.module_count())
        }

        fn submitter_name(&self) -> &'static str {
            "mock"
        }
    }
}
