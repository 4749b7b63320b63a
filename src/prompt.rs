//! Turns summarization options into the system instruction sent to the model.

use crate::core::models::{SummarizationConfig, SummaryFormat, SummaryLength, SummaryTone};

#[must_use]
pub const fn length_phrase(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Brief => "extremely concise (1-2 sentences)",
        SummaryLength::Medium => "moderately detailed (1-2 paragraphs)",
        SummaryLength::Detailed => "comprehensive and thorough",
    }
}

#[must_use]
pub const fn tone_phrase(tone: SummaryTone) -> &'static str {
    match tone {
        SummaryTone::Professional => "professional and business-like",
        SummaryTone::Casual => "conversational and easy-going",
        SummaryTone::Academic => "formal and rigorous",
        SummaryTone::Simple => "easy to understand for a general audience",
    }
}

#[must_use]
pub const fn format_phrase(format: SummaryFormat) -> &'static str {
    match format {
        SummaryFormat::Paragraph => "as a cohesive paragraph",
        SummaryFormat::Bullets => "as a structured bulleted list",
    }
}

/// Builds the system instruction for `config`.
///
/// Lines appear in a fixed order: role, length, tone, format, then the
/// content rules. The output depends only on `config`.
#[must_use]
pub fn translate(config: &SummarizationConfig) -> String {
    let length = length_phrase(config.length);
    let tone = tone_phrase(config.tone);
    let format = format_phrase(config.format);

    format!(
        "You are an expert summarization assistant.\n\
         Your goal is to provide a {length} summary of the provided text.\n\
         The tone should be {tone}.\n\
         The format should be {format}.\n\
         Preserve the core meaning while removing unnecessary detail.\n\
         Do not include any meta-commentary or introductory remarks like \"Here is the summary:\". \
         Respond with the summary content only."
    )
}
