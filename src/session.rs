//! Caller-side bookkeeping around [`SummarizationClient`]: input validation,
//! result construction, the current-result slot and a bounded history.
//!
//! All mutation happens after the provider call has completed. Dropping a
//! pending [`SummarizerSession::summarize`] future therefore abandons the
//! request without touching the session.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::{GenerationProvider, SummarizationClient};
use crate::core::models::{SummarizationConfig, SummaryRequest, SummaryResult};
use crate::errors::SummarizeError;
use crate::stats::compute_stats;

/// Number of results kept in session history.
pub const HISTORY_LIMIT: usize = 10;

pub struct SummarizerSession<P> {
    client: SummarizationClient<P>,
    config: SummarizationConfig,
    current: Option<SummaryResult>,
    history: VecDeque<SummaryResult>,
}

impl<P: GenerationProvider> SummarizerSession<P> {
    #[must_use]
    pub fn new(client: SummarizationClient<P>) -> Self {
        Self {
            client,
            config: SummarizationConfig::default(),
            current: None,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    #[must_use]
    pub fn config(&self) -> SummarizationConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SummarizationConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn current(&self) -> Option<&SummaryResult> {
        self.current.as_ref()
    }

    /// Most recent first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &SummaryResult> {
        self.history.iter()
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Clears the current result; history is kept.
    pub fn reset(&mut self) {
        self.clear_current();
    }

    /// Makes the history entry `id` current again and adopts its options.
    ///
    /// Returns the entry's original text so it can be edited and resubmitted.
    pub fn restore(&mut self, id: &str) -> Option<&str> {
        let item = self.history.iter().find(|r| r.id() == id)?.clone();
        self.config = item.config();
        self.current = Some(item);
        self.current.as_ref().map(SummaryResult::original_text)
    }

    /// Validates `text`, summarizes it with the session options and records
    /// the result as current and at the front of history.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::Validation`] for blank or too-short input (no
    /// provider call is made), otherwise whatever the client reports. The
    /// session is unchanged on error.
    pub async fn summarize(&mut self, text: &str) -> Result<&SummaryResult, SummarizeError> {
        let request = SummaryRequest::new(text, self.config)?;
        let summary = self.client.summarize(&request).await?;
        Ok(self.record(request, summary))
    }

    /// Like [`SummarizerSession::summarize`], but gives up after `limit`.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::Cancelled`] when `limit` elapses first; the late
    /// response, if any, is discarded.
    pub async fn summarize_with_timeout(
        &mut self,
        text: &str,
        limit: Duration,
    ) -> Result<&SummaryResult, SummarizeError> {
        let request = SummaryRequest::new(text, self.config)?;
        let summary = tokio::time::timeout(limit, self.client.summarize(&request))
            .await
            .map_err(|_| {
                warn!(timeout = ?limit, "Summarization timed out");
                SummarizeError::Cancelled(format!("no response within {}ms", limit.as_millis()))
            })??;
        Ok(self.record(request, summary))
    }

    fn record(&mut self, request: SummaryRequest, summary: String) -> &SummaryResult {
        let stats = compute_stats(request.source_text(), &summary);
        let config = request.config();
        let result = SummaryResult::new(
            Uuid::new_v4().to_string(),
            request.source_text().to_string(),
            summary,
            Utc::now().timestamp_millis(),
            config,
            stats,
        );

        info!(
            id = result.id(),
            original_words = stats.original_words,
            summary_words = stats.summary_words,
            reduction_percent = stats.reduction_percent,
            "Recorded summary"
        );

        self.history.push_front(result.clone());
        self.history.truncate(HISTORY_LIMIT);
        self.current.insert(result)
    }
}
