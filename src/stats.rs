//! Word counts and compression figures for a finished summary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    /// Rounded half away from zero. Negative when the summary is longer.
    pub reduction_percent: i64,
}

impl SummaryStats {
    /// Words removed by summarizing; zero if the summary grew.
    #[must_use]
    pub fn words_saved(&self) -> usize {
        self.original_words.saturating_sub(self.summary_words)
    }

    /// Unrounded reduction in percent, `0.0` for an empty original.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_words == 0 {
            return 0.0;
        }
        let original = self.original_words as f64;
        let summary = self.summary_words as f64;
        (original - summary) / original * 100.0
    }
}

/// Number of whitespace-delimited tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn compute_stats(original_text: &str, summary_text: &str) -> SummaryStats {
    let original_words = word_count(original_text);
    let summary_words = word_count(summary_text);

    let reduction_percent = if original_words == 0 {
        0
    } else {
        let stats = SummaryStats {
            original_words,
            summary_words,
            reduction_percent: 0,
        };
        // f64::round rounds half away from zero
        stats.reduction_ratio().round() as i64
    };

    SummaryStats {
        original_words,
        summary_words,
        reduction_percent,
    }
}
