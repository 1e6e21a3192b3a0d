//! Application state for shared services

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{DomainError, ScenarioSubmitter};
use crate::infrastructure::make::SimulatedMakeClient;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub submitter: Arc<dyn ScenarioSubmitter>,
}

impl AppState {
    pub fn new(submitter: Arc<dyn ScenarioSubmitter>) -> Self {
        Self { submitter }
    }

    /// Build the state described by the configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let client = SimulatedMakeClient::new(&config.make.base_url)?;
        Ok(Self::new(Arc::new(client)))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("submitter", &self.submitter.submitter_name())
            .finish()
    }
}
