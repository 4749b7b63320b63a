//! Summarization client: one provider call per request, typed failures.

use tracing::{debug, info, warn};

use super::gemini::GeminiProvider;
use super::openai::OpenAiProvider;
use super::provider::GenerationProvider;
use crate::core::config::{AppConfig, ProviderKind};
use crate::core::models::SummaryRequest;
use crate::errors::SummarizeError;
use crate::prompt::translate;

/// Sampling temperature sent with every summarization request.
pub const SUMMARY_TEMPERATURE: f64 = 0.7;

pub struct SummarizationClient<P> {
    provider: P,
}

impl SummarizationClient<Box<dyn GenerationProvider>> {
    /// Builds the provider selected by `config`.
    ///
    /// The API key is checked here, once, before any HTTP client exists.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Configuration`] when the key is missing or
    /// blank, or when the provider cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizeError> {
        let api_key = config.require_api_key()?;

        let provider: Box<dyn GenerationProvider> = match config.provider {
            ProviderKind::OpenAi => Box::new(OpenAiProvider::new(
                api_key,
                config.org_id.as_deref(),
                config.model.as_deref(),
                config.base_url.as_deref(),
            )?),
            ProviderKind::Gemini => Box::new(GeminiProvider::new(
                api_key,
                config.model.as_deref(),
                config.base_url.as_deref(),
            )?),
        };

        info!(
            provider = provider.name(),
            model = provider.model(),
            "Summarization client ready"
        );

        Ok(Self::new(provider))
    }
}

impl<P: GenerationProvider> SummarizationClient<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Summarizes `request.source_text()` with a single provider call.
    ///
    /// The returned text is exactly what the provider produced.
    ///
    /// # Errors
    ///
    /// - [`SummarizeError::Provider`] for transport, status or payload failures.
    /// - [`SummarizeError::Generation`] when the provider returned no usable text.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        let config = request.config();
        let instruction = translate(&config);

        #[cfg(feature = "debug-logs")]
        debug!("Using summarization instruction:\n{}", instruction);

        #[cfg(not(feature = "debug-logs"))]
        debug!(
            length = %config.length,
            tone = %config.tone,
            format = %config.format,
            "Built summarization instruction"
        );

        info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            source_chars = request.source_text().chars().count(),
            "Requesting summary"
        );

        let generated = self
            .provider
            .generate(&instruction, request.source_text(), SUMMARY_TEMPERATURE)
            .await
            .inspect_err(|e| {
                warn!(provider = self.provider.name(), error = %e, "Provider call failed");
            })?;

        match generated {
            Some(text) if !text.trim().is_empty() => {
                info!(summary_chars = text.chars().count(), "Summary generated");
                Ok(text)
            }
            _ => {
                warn!(provider = self.provider.name(), "Provider returned no summary text");
                Err(SummarizeError::Generation)
            }
        }
    }
}
