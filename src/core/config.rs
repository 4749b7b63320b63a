use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::SummarizeError;

/// Which text-generation API to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Gemini,
}

impl ProviderKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Provider-specific variable consulted when `SUMMARIZER_API_KEY` is unset.
    #[must_use]
    pub const fn api_key_var(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            _ => Err(SummarizeError::UnsupportedOption {
                option: "provider",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub org_id: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// A missing API key is not an error here; it is reported when a client
    /// is built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Configuration`] when `SUMMARIZER_PROVIDER`
    /// names an unknown provider.
    pub fn from_env() -> Result<Self, SummarizeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match non_empty("SUMMARIZER_PROVIDER") {
            Some(name) => name
                .parse::<ProviderKind>()
                .map_err(|e| SummarizeError::Configuration(format!("SUMMARIZER_PROVIDER: {e}")))?,
            None => ProviderKind::default(),
        };

        let api_key = non_empty("SUMMARIZER_API_KEY")
            .or_else(|| non_empty(provider.api_key_var()))
            .or_else(|| non_empty("API_KEY"));

        Ok(Self {
            provider,
            api_key,
            model: non_empty("SUMMARIZER_MODEL"),
            base_url: non_empty("SUMMARIZER_BASE_URL"),
            org_id: non_empty("OPENAI_ORG_ID"),
        })
    }

    /// The configured API key.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Configuration`] if no non-blank key is set.
    pub fn require_api_key(&self) -> Result<&str, SummarizeError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SummarizeError::Configuration(format!(
                    "API key is missing (set SUMMARIZER_API_KEY or {})",
                    self.provider.api_key_var()
                ))
            })
    }
}
