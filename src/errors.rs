use thiserror::Error;

/// Message carried by [`SummarizeError::Generation`].
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate summary text";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Unsupported {option} option: {value}")]
    UnsupportedOption { option: &'static str, value: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to generate summary text")]
    Generation,

    #[error("Summarization cancelled: {0}")]
    Cancelled(String),
}

impl SummarizeError {
    /// Short text suitable for showing to the person who asked for the summary.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Validation(msg) => msg.clone(),
            SummarizeError::Generation => GENERATION_FAILURE_MESSAGE.to_string(),
            _ => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

/// Transport or provider-side failure. The underlying cause stays reachable
/// through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send HTTP request to {provider}: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error (status {status}): {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to parse {provider} response: {source}")]
    Malformed {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

