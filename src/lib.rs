//! Precis - turns pasted text into a summary via a hosted language model.
//!
//! The pipeline has three parts:
//! 1. [`prompt::translate`] maps the chosen length, tone and format to a system instruction
//! 2. [`ai::SummarizationClient`] sends instruction and text to a provider (`OpenAI` or Gemini)
//! 3. [`stats::compute_stats`] derives word counts and the reduction percentage
//!
//! [`session::SummarizerSession`] ties them together for an interactive caller and keeps
//! the last ten results.
//!
//! # Example
//!
//! ```no_run
//! use precis::ai::SummarizationClient;
//! use precis::core::config::AppConfig;
//! use precis::session::SummarizerSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     precis::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = SummarizationClient::from_config(&config)?;
//!     let mut session = SummarizerSession::new(client);
//!
//!     let result = session
//!         .summarize("Paste a long article, report or any other text of at least ten words here.")
//!         .await?;
//!     println!("{}", result.summary_text());
//!     println!("{}% shorter", result.stats().reduction_percent);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod session;
pub mod stats;

pub use errors::{ProviderError, SummarizeError};

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// precis::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
