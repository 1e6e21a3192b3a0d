//! Canned step descriptions for third-party AI APIs

use serde_json::json;

use super::entity::StepDescription;

pub const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const OPENROUTER_MODEL: &str = "openai/gpt-3.5-turbo";
pub const RUNWAY_TASKS_URL: &str = "https://api.runwayml.com/v1/tasks";
pub const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

const JSON_CONTENT_TYPE: &str = "application/json";

fn json_post(url: String) -> StepDescription {
    StepDescription::with_url(url)
        .with_method("POST")
        .with_header("Content-Type", JSON_CONTENT_TYPE)
}

/// OpenRouter chat completion with a single user message
pub fn chat_completion(prompt: impl Into<String>) -> StepDescription {
    let prompt: String = prompt.into();

    json_post(OPENROUTER_CHAT_URL.to_string())
        .with_body(json!({
            "model": OPENROUTER_MODEL,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        }))
        .with_name("OpenRouter call")
}

/// Runway media processing task
pub fn media_processing(media_url: impl Into<String>) -> StepDescription {
    let media_url: String = media_url.into();

    json_post(RUNWAY_TASKS_URL.to_string())
        .with_body(json!({"media_url": media_url}))
        .with_name("Runway call")
}

/// ElevenLabs text-to-speech, the voice id goes into the path
pub fn text_to_speech(text: impl Into<String>, voice: impl AsRef<str>) -> StepDescription {
    let text: String = text.into();

    json_post(format!("{}/{}", ELEVENLABS_TTS_URL, voice.as_ref()))
        .with_body(json!({"text": text}))
        .with_name("ElevenLabs call")
}
