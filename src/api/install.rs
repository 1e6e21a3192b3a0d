//! Install form - collects Make credentials and triggers the scenario

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::MakeCredentials;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Install Make scenario</title>
</head>
<body>
  <h1>Connect your Make account</h1>
  <form method="post" action="/install">
    <label>API token <input type="password" name="api_token" required></label>
    <label>Scenario ID <input type="text" name="scenario_id" required></label>
    <button type="submit">Install</button>
  </form>
</body>
</html>
"#;

/// Form fields posted to `/install`
#[derive(Debug, Default, Deserialize)]
pub struct InstallForm {
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub scenario_id: Option<String>,
}

/// Serve the credentials form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Trigger the scenario named in the form
pub async fn install(State(state): State<AppState>, Form(form): Form<InstallForm>) -> Response {
    let credentials = match MakeCredentials::new(
        form.api_token.unwrap_or_default(),
        form.scenario_id.unwrap_or_default(),
    ) {
        Ok(credentials) => credentials,
        Err(_) => {
            warn!("Install request without credentials");
            return (StatusCode::BAD_REQUEST, "Missing credentials").into_response();
        }
    };

    match state.submitter.run_scenario(&credentials).await {
        Ok(receipt) => {
            info!(scenario = %receipt.scenario, status = %receipt.status, "Scenario installed");
            format!(
                "Scenario {} triggered with status {}.",
                receipt.scenario, receipt.status
            )
            .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Scenario trigger failed");
            ApiError::from(e).into_response()
        }
    }
}
