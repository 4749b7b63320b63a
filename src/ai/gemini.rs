//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;
use url::Url;

use super::provider::{GenerationProvider, build_http_client, endpoint, send_json};
use crate::errors::SummarizeError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

const PROVIDER: &str = "Gemini";

pub struct GeminiProvider {
    http: Client,
    endpoint: Url,
    api_key: String,
    model_name: String,
}

impl GeminiProvider {
    /// # Errors
    ///
    /// Returns [`SummarizeError::Configuration`] if the base URL or model name
    /// do not form a valid endpoint.
    pub fn new(
        api_key: &str,
        model_name: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self, SummarizeError> {
        let model_name = model_name.unwrap_or(DEFAULT_GEMINI_MODEL).to_string();
        let endpoint = endpoint(
            PROVIDER,
            base_url.unwrap_or(DEFAULT_GEMINI_BASE_URL),
            &format!("v1beta/models/{model_name}:generateContent"),
        )?;

        Ok(Self {
            http: build_http_client(PROVIDER)?,
            endpoint,
            api_key: api_key.to_string(),
            model_name,
        })
    }

    #[must_use]
    pub fn build_request_body(system_instruction: &str, content: &str, temperature: f64) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": content }]
            }],
            "generationConfig": {
                "temperature": temperature
            }
        })
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    async fn generate(
        &self,
        system_instruction: &str,
        content: &str,
        temperature: f64,
    ) -> Result<Option<String>, SummarizeError> {
        let request_body = Self::build_request_body(system_instruction, content, temperature);

        info!(model = %self.model_name, "Sending Gemini generateContent request");

        let request = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body);

        let response_json = send_json(PROVIDER, request).await?;
        Ok(extract_candidate_text(&response_json))
    }
}

/// Concatenates the text parts of the first candidate, skipping thought parts.
#[must_use]
pub fn extract_candidate_text(response_json: &Value) -> Option<String> {
    let parts = response_json
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())?;

    let text: String = parts
        .iter()
        .filter(|p| !p.get("thought").and_then(Value::as_bool).unwrap_or(false))
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
