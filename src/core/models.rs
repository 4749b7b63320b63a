use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SummarizeError;
use crate::stats::{SummaryStats, word_count};

/// Inputs shorter than this are rejected before any provider call.
pub const MIN_SOURCE_WORDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Brief,
    #[default]
    Medium,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    #[default]
    Professional,
    Casual,
    Academic,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Paragraph,
    Bullets,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [Self::Brief, Self::Medium, Self::Detailed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Medium => "medium",
            Self::Detailed => "detailed",
        }
    }
}

impl SummaryTone {
    pub const ALL: [SummaryTone; 4] = [
        Self::Professional,
        Self::Casual,
        Self::Academic,
        Self::Simple,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Academic => "academic",
            Self::Simple => "simple",
        }
    }
}

impl SummaryFormat {
    pub const ALL: [SummaryFormat; 2] = [Self::Paragraph, Self::Bullets];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Bullets => "bullets",
        }
    }
}

// Shared parsing/printing for the three option enums.
macro_rules! option_enum_text {
    ($ty:ty, $option:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = SummarizeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| SummarizeError::UnsupportedOption {
                        option: $option,
                        value: s.to_string(),
                    })
            }
        }
    };
}

option_enum_text!(SummaryLength, "length");
option_enum_text!(SummaryTone, "tone");
option_enum_text!(SummaryFormat, "format");

/// Length, tone and format chosen for one summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SummarizationConfig {
    pub length: SummaryLength,
    pub tone: SummaryTone,
    pub format: SummaryFormat,
}

impl SummarizationConfig {
    #[must_use]
    pub const fn new(length: SummaryLength, tone: SummaryTone, format: SummaryFormat) -> Self {
        Self {
            length,
            tone,
            format,
        }
    }
}

/// Source text plus options, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    source_text: String,
    config: SummarizationConfig,
}

impl SummaryRequest {
    /// # Errors
    ///
    /// Returns [`SummarizeError::Validation`] when the text is blank or has
    /// fewer than [`MIN_SOURCE_WORDS`] words.
    pub fn new(
        source_text: impl Into<String>,
        config: SummarizationConfig,
    ) -> Result<Self, SummarizeError> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            return Err(SummarizeError::Validation(
                "Please enter some text to summarize.".to_string(),
            ));
        }
        if word_count(&source_text) < MIN_SOURCE_WORDS {
            return Err(SummarizeError::Validation(format!(
                "Text is too short for a meaningful summary. Try at least {MIN_SOURCE_WORDS} words."
            )));
        }
        Ok(Self {
            source_text,
            config,
        })
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn config(&self) -> SummarizationConfig {
        self.config
    }
}

/// One completed summarization. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    id: String,
    original_text: String,
    summary_text: String,
    timestamp: i64,
    config: SummarizationConfig,
    stats: SummaryStats,
}

impl SummaryResult {
    #[must_use]
    pub fn new(
        id: String,
        original_text: String,
        summary_text: String,
        timestamp: i64,
        config: SummarizationConfig,
        stats: SummaryStats,
    ) -> Self {
        Self {
            id,
            original_text,
            summary_text,
            timestamp,
            config,
            stats,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    #[must_use]
    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }

    /// Creation time in epoch milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[must_use]
    pub fn config(&self) -> SummarizationConfig {
        self.config
    }

    #[must_use]
    pub fn stats(&self) -> SummaryStats {
        self.stats
    }
}
