//! `OpenAI` Responses API provider.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use tracing::info;
use url::Url;

use super::provider::{GenerationProvider, build_http_client, endpoint, send_json};
use crate::errors::SummarizeError;

/// Default model; it must accept a `temperature` parameter.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/";

const PROVIDER: &str = "OpenAI";

pub struct OpenAiProvider {
    http: Client,
    endpoint: Url,
    headers: HeaderMap,
    model_name: String,
}

impl OpenAiProvider {
    /// # Errors
    ///
    /// Returns [`SummarizeError::Configuration`] if the key, organization or
    /// base URL cannot be used to build requests.
    pub fn new(
        api_key: &str,
        org_id: Option<&str>,
        model_name: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self, SummarizeError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {api_key}").parse().map_err(|e| {
            SummarizeError::Configuration(format!("Invalid Authorization header: {e}"))
        })?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json".parse().map_err(|e| {
            SummarizeError::Configuration(format!("Invalid Content-Type header: {e}"))
        })?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizeError::Configuration(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(Self {
            http: build_http_client(PROVIDER)?,
            endpoint: endpoint(
                PROVIDER,
                base_url.unwrap_or(DEFAULT_OPENAI_BASE_URL),
                "v1/responses",
            )?,
            headers,
            model_name: model_name.unwrap_or(DEFAULT_OPENAI_MODEL).to_string(),
        })
    }

    /// Responses API body: the instruction as a system message, the source
    /// text as a user message, each a single `input_text` part.
    #[must_use]
    pub fn build_request_body(
        &self,
        system_instruction: &str,
        content: &str,
        temperature: f64,
    ) -> Value {
        json!({
            "model": self.model_name,
            "input": [
                {
                    "role": "system",
                    "content": [{"type": "input_text", "text": system_instruction}]
                },
                {
                    "role": "user",
                    "content": [{"type": "input_text", "text": content}]
                }
            ],
            "temperature": temperature
        })
    }
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
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
        let request_body = self.build_request_body(system_instruction, content, temperature);

        info!(
            model = %self.model_name,
            endpoint = %self.endpoint,
            "Sending OpenAI responses request"
        );

        let request = self
            .http
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .json(&request_body);

        let response_json = send_json(PROVIDER, request).await?;
        Ok(extract_output_text(&response_json))
    }
}

/// Pulls generated text out of a Responses API payload: `output_text` when
/// present, otherwise every `output_text` part under `output[].content[]`.
#[must_use]
pub fn extract_output_text(response_json: &Value) -> Option<String> {
    response_json
        .get("output_text")
        .and_then(|v| v.as_str())
        .map(std::string::ToString::to_string)
        .or_else(|| {
            let mut collected: Vec<String> = Vec::new();
            if let Some(items) = response_json.get("output").and_then(|o| o.as_array()) {
                for item in items {
                    if let Some(parts) = item.get("content").and_then(|c| c.as_array()) {
                        for p in parts {
                            let is_output_text = p
                                .get("type")
                                .and_then(|t| t.as_str())
                                .is_some_and(|t| t == "output_text");
                            if !is_output_text {
                                continue;
                            }
                            if let Some(s) = p.get("text").and_then(|t| t.as_str()) {
                                collected.push(s.to_string());
                            } else if let Some(s) = p
                                .get("text")
                                .and_then(|t| t.get("value"))
                                .and_then(|v| v.as_str())
                            {
                                collected.push(s.to_string());
                            }
                        }
                    }
                }
            }
            if collected.is_empty() {
                None
            } else {
                Some(collected.join("\n"))
            }
        })
}
