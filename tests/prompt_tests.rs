use std::collections::HashSet;

use precis::core::models::{SummarizationConfig, SummaryFormat, SummaryLength, SummaryTone};
use precis::prompt::{format_phrase, length_phrase, tone_phrase, translate};

fn all_configs() -> Vec<SummarizationConfig> {
    let mut configs = Vec::new();
    for length in SummaryLength::ALL {
        for tone in SummaryTone::ALL {
            for format in SummaryFormat::ALL {
                configs.push(SummarizationConfig::new(length, tone, format));
            }
        }
    }
    configs
}

#[test]
fn test_every_combination_yields_a_distinct_instruction() {
    let instructions: HashSet<String> = all_configs().iter().map(translate).collect();
    assert_eq!(
        instructions.len(),
        SummaryLength::ALL.len() * SummaryTone::ALL.len() * SummaryFormat::ALL.len()
    );
    assert_eq!(instructions.len(), 24);
}

#[test]
fn test_translate_orders_role_length_tone_format() {
    for config in all_configs() {
        let instruction = translate(&config);

        let role = instruction
            .find("expert summarization assistant")
            .expect("role statement");
        let length = instruction
            .find(length_phrase(config.length))
            .unwrap_or_else(|| panic!("missing length phrase for {config:?}"));
        let tone = instruction
            .find(tone_phrase(config.tone))
            .unwrap_or_else(|| panic!("missing tone phrase for {config:?}"));
        let format = instruction
            .find(format_phrase(config.format))
            .unwrap_or_else(|| panic!("missing format phrase for {config:?}"));

        assert!(role < length, "role must precede length: {instruction}");
        assert!(length < tone, "length must precede tone: {instruction}");
        assert!(tone < format, "tone must precede format: {instruction}");
    }
}

#[test]
fn test_translate_mentions_only_selected_options() {
    for config in all_configs() {
        let instruction = translate(&config);

        for other in SummaryLength::ALL.into_iter().filter(|l| *l != config.length) {
            assert!(
                !instruction.contains(length_phrase(other)),
                "{config:?} leaked length {other}"
            );
        }
        for other in SummaryTone::ALL.into_iter().filter(|t| *t != config.tone) {
            assert!(
                !instruction.contains(tone_phrase(other)),
                "{config:?} leaked tone {other}"
            );
        }
        for other in SummaryFormat::ALL.into_iter().filter(|f| *f != config.format) {
            assert!(
                !instruction.contains(format_phrase(other)),
                "{config:?} leaked format {other}"
            );
        }
    }
}

#[test]
fn test_translate_includes_content_rules() {
    let instruction = translate(&SummarizationConfig::default());
    assert!(instruction.contains("Preserve the core meaning"));
    assert!(instruction.contains("removing unnecessary detail"));
    assert!(instruction.contains("Do not include any meta-commentary"));
    assert!(instruction.contains("summary content only"));
}

#[test]
fn test_translate_is_deterministic() {
    for config in all_configs() {
        assert_eq!(translate(&config).as_bytes(), translate(&config).as_bytes());
    }
}

#[test]
fn test_exact_phrase_tables() {
    assert_eq!(length_phrase(SummaryLength::Brief), "extremely concise (1-2 sentences)");
    assert_eq!(length_phrase(SummaryLength::Medium), "moderately detailed (1-2 paragraphs)");
    assert_eq!(length_phrase(SummaryLength::Detailed), "comprehensive and thorough");

    assert_eq!(tone_phrase(SummaryTone::Professional), "professional and business-like");
    assert_eq!(tone_phrase(SummaryTone::Casual), "conversational and easy-going");
    assert_eq!(tone_phrase(SummaryTone::Academic), "formal and rigorous");
    assert_eq!(tone_phrase(SummaryTone::Simple), "easy to understand for a general audience");

    assert_eq!(format_phrase(SummaryFormat::Paragraph), "as a cohesive paragraph");
    assert_eq!(format_phrase(SummaryFormat::Bullets), "as a structured bulleted list");
}
