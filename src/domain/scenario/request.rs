//! Step requests accepted from the API and the CLI

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::builder::ScenarioBuilder;
use super::entity::{ScenarioDocument, StepDescription, DEFAULT_METHOD};
use super::preset;
use crate::domain::DomainError;

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

/// A step expressed either as a preset or as a raw HTTP call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepRequest {
    /// OpenRouter chat completion
    ChatCompletion { prompt: String },

    /// Runway media processing
    MediaProcessing { media_url: String },

    /// ElevenLabs text-to-speech
    TextToSpeech { text: String, voice: String },

    /// Hand-built HTTP call
    Http {
        url: String,
        #[serde(default = "default_method")]
        method: String,
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        headers: HashMap<String, String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl StepRequest {
    /// Get a human-readable kind name
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::ChatCompletion { .. } => "chat_completion",
            Self::MediaProcessing { .. } => "media_processing",
            Self::TextToSpeech { .. } => "text_to_speech",
            Self::Http { .. } => "http",
        }
    }

    /// Resolve the request into a step description
    pub fn into_step(self) -> Result<StepDescription, DomainError> {
        match self {
            Self::ChatCompletion { prompt } => Ok(preset::chat_completion(prompt)),
            Self::MediaProcessing { media_url } => Ok(preset::media_processing(media_url)),
            Self::TextToSpeech { text, voice } => Ok(preset::text_to_speech(text, voice)),
            Self::Http {
                url,
                method,
                headers,
                body,
                name,
            } => {
                let mut step = StepDescription::new(url)?
                    .with_method(method)
                    .with_headers(headers);

                if let Some(body) = body {
                    step = step.with_body(body);
                }
                if let Some(name) = name {
                    step = step.with_name(name);
                }

                Ok(step)
            }
        }
    }
}

/// Resolve an ordered list of requests, stopping at the first invalid one
pub fn resolve_steps(requests: Vec<StepRequest>) -> Result<Vec<StepDescription>, DomainError> {
    requests
        .into_iter()
        .enumerate()
        .map(|(index, request)| {
            request.into_step().map_err(|e| match e {
                DomainError::Validation { message } => {
                    DomainError::validation(format!("steps[{}]: {}", index, message))
                }
                other => other,
            })
        })
        .collect()
}

/// Ordered step requests plus scenario-level metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Ordered steps of the chain
    pub steps: Vec<StepRequest>,

    /// Scenario-level metadata placed next to `modules`
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl ScenarioRequest {
    pub fn new(steps: Vec<StepRequest>) -> Self {
        Self {
            steps,
            metadata: Map::new(),
        }
    }

    /// Resolve the steps and build a document through the given builder
    pub fn build(self, builder: &ScenarioBuilder) -> Result<ScenarioDocument, DomainError> {
        let steps = resolve_steps(self.steps)?;
        let mut document = builder.create_scenario(&steps);

        for (key, value) in self.metadata {
            document.insert_metadata(key, value)?;
        }

        Ok(document)
    }
}
