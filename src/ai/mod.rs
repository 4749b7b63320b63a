//! All AI/LLM functionality

pub mod client;
pub mod gemini;
pub mod openai;
pub mod provider;

// Re-export main types for convenience
pub use client::{SUMMARY_TEMPERATURE, SummarizationClient};
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use provider::GenerationProvider;
