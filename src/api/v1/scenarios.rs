//! Scenario building endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{
    DomainError, MakeCredentials, ScenarioBuilder, ScenarioDocument, ScenarioRequest,
    SubmissionReceipt,
};

/// Request to build a scenario and hand it to Make
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitScenarioRequest {
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub scenario_id: String,
    #[serde(flatten)]
    pub scenario: ScenarioRequest,
}

/// Response from a submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitScenarioResponse {
    pub receipt: SubmissionReceipt,
    pub scenario: ScenarioDocument,
}

/// Build a scenario document with a fresh builder
///
/// Every document gets its own id space starting at 1.
fn build_document(request: ScenarioRequest) -> Result<ScenarioDocument, DomainError> {
    request.build(&ScenarioBuilder::new())
}

/// POST /v1/scenarios
pub async fn create_scenario(
    Json(request): Json<ScenarioRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(steps = request.steps.len(), "Building scenario");

    let document = build_document(request)?;

    info!(modules = document.module_count(), "Scenario built");

    Ok((StatusCode::OK, Json(document)))
}

/// POST /v1/scenarios/submit
pub async fn submit_scenario(
    State(state): State<AppState>,
    Json(request): Json<SubmitScenarioRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let credentials = MakeCredentials::new(request.api_token, request.scenario_id)?;
    let document = build_document(request.scenario)?;

    let receipt = state
        .submitter
        .submit_scenario(&credentials, &document)
        .await?;

    info!(
        scenario = %receipt.scenario,
        modules = receipt.modules,
        submitter = state.submitter.submitter_name(),
        "Scenario handed to platform"
    );

    Ok((
        StatusCode::OK,
        Json(SubmitScenarioResponse {
            receipt,
            scenario: document,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::response::Response;
    use serde_json::{json, Value};

    use super::*;
    use crate::domain::submission::mock::MockScenarioSubmitter;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn build_request(value: Value) -> ScenarioRequest {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_scenario_endpoint() {
        let request = build_request(json!({
            "steps": [
                {"kind": "chat_completion", "prompt": "Hello"},
                {"kind": "media_processing", "media_url": "https://example.com/video.mp4"},
                {"kind": "text_to_speech", "text": "Hi", "voice": "voice-id"}
            ]
        }));

        let response = create_scenario(Json(request)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        let modules = value["modules"].as_array().unwrap();
        assert_eq!(modules.len(), 3);
        assert_eq!(modules[0]["id"], json!(1));
        assert_eq!(modules[0]["type"], json!("http"));
        assert_eq!(modules[0]["next"], json!(2));
        assert_eq!(modules[1]["next"], json!(3));
        assert!(modules[2].get("next").is_none());
        assert_eq!(
            modules[2]["operation"]["url"],
            json!("https://api.elevenlabs.io/v1/text-to-speech/voice-id")
        );
    }

    #[tokio::test]
    async fn test_each_request_starts_at_one() {
        for _ in 0..2 {
            let request = build_request(json!({
                "steps": [{"kind": "http", "url": "https://example.com"}]
            }));
            let value = body_json(create_scenario(Json(request)).await.into_response()).await;
            assert_eq!(value["modules"][0]["id"], json!(1));
            assert_eq!(value["modules"][0]["name"], json!("HTTP 1"));
        }
    }

    #[tokio::test]
    async fn test_create_scenario_with_metadata() {
        let request = build_request(json!({
            "steps": [],
            "metadata": {"name": "Empty"}
        }));

        let value = body_json(create_scenario(Json(request)).await.into_response()).await;
        assert_eq!(value, json!({"modules": [], "name": "Empty"}));
    }

    #[tokio::test]
    async fn test_create_scenario_rejects_empty_url() {
        let request = build_request(json!({
            "steps": [{"kind": "http", "url": ""}]
        }));

        let err = create_scenario(Json(request)).await.err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.error.message.contains("steps[0]"));
    }

    #[tokio::test]
    async fn test_create_scenario_rejects_reserved_metadata() {
        let request = build_request(json!({
            "steps": [],
            "metadata": {"modules": []}
        }));

        let err = create_scenario(Json(request)).await.err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_scenario_endpoint() {
        let submitter = Arc::new(MockScenarioSubmitter::new());
        let state = AppState::new(submitter.clone());
        let request: SubmitScenarioRequest = serde_json::from_value(json!({
            "api_token": "tok",
            "scenario_id": "42",
            "steps": [{"kind": "chat_completion", "prompt": "Test"}]
        }))
        .unwrap();

        let response = submit_scenario(State(state), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["receipt"]["status"], json!("connected"));
        assert_eq!(value["receipt"]["modules"], json!(1));
        assert!(value["scenario"]["modules"][0].get("next").is_none());
        assert_eq!(submitter.runs(), vec!["42".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_scenario_missing_credentials() {
        let state = AppState::new(Arc::new(MockScenarioSubmitter::new()));
        let request: SubmitScenarioRequest = serde_json::from_value(json!({
            "api_token": "",
            "scenario_id": "42",
            "steps": []
        }))
        .unwrap();

        let err = submit_scenario(State(state), Json(request))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.message, "Missing credentials");
    }

    #[tokio::test]
    async fn test_submit_scenario_omitted_credentials() {
        let submitter = Arc::new(MockScenarioSubmitter::new());

        for body in [
            json!({"scenario_id": "42", "steps": []}),
            json!({"api_token": "tok", "steps": []}),
        ] {
            let request: SubmitScenarioRequest = serde_json::from_value(body).unwrap();
            let state = AppState::new(submitter.clone());

            let err = submit_scenario(State(state), Json(request))
                .await
                .err()
                .unwrap();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.response.error.message, "Missing credentials");
        }

        assert!(submitter.runs().is_empty());
    }
}
