//! Make client that prepares requests without sending them

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::{
    DomainError, MakeCredentials, ScenarioDocument, ScenarioSubmitter, SubmissionReceipt,
};

/// Default Make API base URL
pub const DEFAULT_MAKE_BASE_URL: &str = "https://api.make.com/v2";

const CONNECTED_STATUS: &str = "connected";

/// HTTP request the client would send to Make
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

/// Make client that never touches the network
///
/// Every call builds the request Make expects, logs it with the token
/// redacted and reports the scenario as connected.
#[derive(Debug, Clone)]
pub struct SimulatedMakeClient {
    base_url: String,
}

impl SimulatedMakeClient {
    /// Create a client for the given API base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let base_url = base_url.into();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(DomainError::configuration(
                "Make base URL must start with http:// or https://",
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request that triggers a scenario run
    pub fn run_request(&self, credentials: &MakeCredentials) -> PreparedRequest {
        self.prepare(credentials, "run")
    }

    /// Request that replaces the scenario blueprint
    pub fn blueprint_request(&self, credentials: &MakeCredentials) -> PreparedRequest {
        self.prepare(credentials, "blueprint")
    }

    fn prepare(&self, credentials: &MakeCredentials, action: &str) -> PreparedRequest {
        PreparedRequest {
            method: "POST",
            url: format!(
                "{}/scenarios/{}/{}",
                self.base_url,
                credentials.scenario_id(),
                action
            ),
            headers: vec![
                ("Authorization", credentials.authorization_header()),
                ("Content-Type", "application/json".to_string()),
            ],
        }
    }

    fn receipt(credentials: &MakeCredentials, modules: usize) -> SubmissionReceipt {
        SubmissionReceipt {
            status: CONNECTED_STATUS.to_string(),
            scenario: credentials.scenario_id().to_string(),
            modules,
        }
    }
}

impl Default for SimulatedMakeClient {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAKE_BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl ScenarioSubmitter for SimulatedMakeClient {
    async fn run_scenario(
        &self,
        credentials: &MakeCredentials,
    ) -> Result<SubmissionReceipt, DomainError> {
        let request = self.run_request(credentials);
        debug!(method = request.method, url = %request.url, "Prepared Make run request");
        info!(scenario = credentials.scenario_id(), "Scenario run triggered");

        Ok(Self::receipt(credentials, 0))
    }

    async fn submit_scenario(
        &self,
        credentials: &MakeCredentials,
        document: &ScenarioDocument,
    ) -> Result<SubmissionReceipt, DomainError> {
        let request = self.blueprint_request(credentials);
        let payload = serde_json::to_string(document)
            .map_err(|e| DomainError::internal(format!("Failed to encode scenario: {}", e)))?;

        debug!(
            method = request.method,
            url = %request.url,
            payload_bytes = payload.len(),
            "Prepared Make blueprint request"
        );
        info!(
            scenario = credentials.scenario_id(),
            modules = document.module_count(),
            "Scenario submitted"
        );

        Ok(Self::receipt(credentials, document.module_count()))
    }

    fn submitter_name(&self) -> &'static str {
        "make-simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::preset;
    use crate::domain::ScenarioBuilder;

    fn credentials() -> MakeCredentials {
        MakeCredentials::new("tok-123", "4711").unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(SimulatedMakeClient::new("api.make.com").is_err());
        assert!(SimulatedMakeClient::new("").is_err());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = SimulatedMakeClient::new("https://eu1.make.com/api/v2/").unwrap();
        assert_eq!(client.base_url(), "https://eu1.make.com/api/v2");
    }

    #[test]
    fn test_run_request_shape() {
        let client = SimulatedMakeClient::default();
        let request = client.run_request(&credentials());

        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "https://api.make.com/v2/scenarios/4711/run");
        assert!(
            request
                .headers
                .contains(&("Authorization", "Token tok-123".to_string()))
        );
        assert!(
            request
                .headers
                .contains(&("Content-Type", "application/json".to_string()))
        );
    }

    #[test]
    fn test_blueprint_request_url() {
        let client = SimulatedMakeClient::default();
        let request = client.blueprint_request(&credentials());
        assert_eq!(request.url, "https://api.make.com/v2/scenarios/4711/blueprint");
    }

    #[test]
    fn test_run_scenario_reports_connected() {
        let client = SimulatedMakeClient::default();
        let receipt = tokio_test::block_on(client.run_scenario(&credentials())).unwrap();

        assert_eq!(receipt.status, "connected");
        assert_eq!(receipt.scenario, "4711");
        assert_eq!(receipt.modules, 0);
    }

    #[tokio::test]
    async fn test_submit_scenario_counts_modules() {
        let client = SimulatedMakeClient::default();
        let document = ScenarioBuilder::new().create_scenario(&[
            preset::chat_completion("Hello"),
            preset::text_to_speech("Hi", "voice-id"),
        ]);

        let receipt = client
            .submit_scenario(&credentials(), &document)
            .await
            .unwrap();

        assert_eq!(receipt.modules, 2);
        assert_eq!(client.submitter_name(), "make-simulated");
    }
}
