//! Make platform credentials and submission receipts

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// API token and target scenario on the Make platform
#[derive(Clone, PartialEq, Eq)]
pub struct MakeCredentials {
    api_token: String,
    scenario_id: String,
}

impl MakeCredentials {
    /// Create credentials, rejecting empty values
    pub fn new(
        api_token: impl Into<String>,
        scenario_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let api_token = api_token.into();
        let scenario_id = scenario_id.into();

        if api_token.is_empty() || scenario_id.is_empty() {
            return Err(DomainError::validation("Missing credentials"));
        }

        Ok(Self {
            api_token,
            scenario_id,
        })
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn scenario_id(&self) -> &str {
        &self.scenario_id
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("Token {}", self.api_token)
    }
}

impl std::fmt::Debug for MakeCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MakeCredentials")
            .field("api_token", &"[REDACTED]")
            .field("scenario_id", &self.scenario_id)
            .finish()
    }
}

/// Outcome reported by the platform for a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub status: String,
    pub scenario: String,
    /// Number of modules handed over, zero when only triggering a run
    #[serde(default)]
    pub modules: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_valid() {
        let creds = MakeCredentials::new("secret", "42").unwrap();
        assert_eq!(creds.api_token(), "secret");
        assert_eq!(creds.scenario_id(), "42");
        assert_eq!(creds.authorization_header(), "Token secret");
    }

    #[test]
    fn test_credentials_missing() {
        assert!(MakeCredentials::new("", "42").is_err());
        let err = MakeCredentials::new("secret", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Missing credentials");
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let creds = MakeCredentials::new("super-secret", "42").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("42"));
    }
}
