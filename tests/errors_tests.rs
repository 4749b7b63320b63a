use std::error::Error;
use precis::errors::{GENERATION_FAILURE_MESSAGE, ProviderError, SummarizeError};

#[test]
fn test_summarize_error_implements_error_trait() {
    // Verify SummarizeError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = SummarizeError::Validation("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    let error = SummarizeError::Configuration("API key is missing".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: API key is missing"
    );

    let error = SummarizeError::Generation;
    assert_eq!(format!("{error}"), "Failed to generate summary text");
    assert_eq!(format!("{error}"), GENERATION_FAILURE_MESSAGE);

    let error = SummarizeError::UnsupportedOption {
        option: "tone",
        value: "angry".to_string(),
    };
    assert_eq!(format!("{error}"), "Unsupported tone option: angry");

    let error = SummarizeError::from(ProviderError::Status {
        provider: "OpenAI",
        status: 429,
        body: "rate limited".to_string(),
    });
    assert_eq!(
        format!("{error}"),
        "OpenAI API error (status 429): rate limited"
    );
}

#[test]
fn test_provider_error_keeps_cause() {
    let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error = SummarizeError::from(ProviderError::Malformed {
        provider: "Gemini",
        source: cause,
    });

    assert!(format!("{error}").starts_with("Failed to parse Gemini response"));
    let source = error.source().expect("malformed payload should expose its cause");
    assert!(source.downcast_ref::<serde_json::Error>().is_some());
}

#[test]
fn test_user_message() {
    let error = SummarizeError::Validation(
        "Text is too short for a meaningful summary. Try at least 10 words.".to_string(),
    );
    assert_eq!(
        error.user_message(),
        "Text is too short for a meaningful summary. Try at least 10 words."
    );
    assert_eq!(
        SummarizeError::Generation.user_message(),
        "Failed to generate summary text"
    );
    assert_eq!(
        SummarizeError::Cancelled("slow".to_string()).user_message(),
        "An unexpected error occurred. Please try again."
    );
}
