//! The seam between the summarization client and concrete text-generation APIs.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::errors::{ProviderError, SummarizeError};

/// A text-generation backend.
///
/// `Ok(None)` means the provider answered successfully but produced no text;
/// transport and envelope problems are reported as errors.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn model(&self) -> &str;

    async fn generate(
        &self,
        system_instruction: &str,
        content: &str,
        temperature: f64,
    ) -> Result<Option<String>, SummarizeError>;
}

#[async_trait]
impl<P: GenerationProvider + ?Sized> GenerationProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn generate(
        &self,
        system_instruction: &str,
        content: &str,
        temperature: f64,
    ) -> Result<Option<String>, SummarizeError> {
        (**self)
            .generate(system_instruction, content, temperature)
            .await
    }
}

/// Resolves `path` against `base`, treating `base` as a directory.
pub(crate) fn endpoint(provider: &str, base: &str, path: &str) -> Result<Url, SummarizeError> {
    let mut base = base.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|b| b.join(path))
        .map_err(|e| SummarizeError::Configuration(format!("Invalid {provider} base URL: {e}")))
}

pub(crate) fn build_http_client(provider: &str) -> Result<Client, SummarizeError> {
    Client::builder().build().map_err(|e| {
        SummarizeError::Configuration(format!("Failed to build {provider} HTTP client: {e}"))
    })
}

/// Sends `request` and decodes the JSON body of a successful response.
pub(crate) async fn send_json(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<Value, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|e| {
            format!("Failed to read error response body (status {status}): {e}")
        });
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    serde_json::from_str(&body).map_err(|source| ProviderError::Malformed { provider, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("test", "http://localhost:8080/proxy", "v1/responses").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/v1/responses");

        let url = endpoint("test", "https://api.openai.com/", "v1/responses").unwrap();
        assert_eq!(url.as_str(), "https://api.openai.com/v1/responses");
    }

    #[test]
    fn test_endpoint_allows_colon_in_path() {
        let url = endpoint(
            "test",
            "https://generativelanguage.googleapis.com",
            "v1beta/models/gemini-3-flash-preview:generateContent",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let err = endpoint("test", "not a url", "v1/responses").unwrap_err();
        assert!(matches!(err, SummarizeError::Configuration(ref m) if m.contains("base URL")));
    }
}
