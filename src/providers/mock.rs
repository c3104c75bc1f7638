/*!
 * Mock analyzer implementations for testing.
 *
 * This module provides analyzers that simulate different behaviors:
 * - `MockAnalyzer::returning(result)` - Always succeeds with a fixed result
 * - `MockAnalyzer::failing()` - Always fails with an API error
 * - `MockAnalyzer::slow(result, delay_ms)` - Succeeds after a delay
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{AnalysisResult, Analyzer};

/// Behavior mode for the mock analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Always fails with an error
    Failing,
    /// Succeeds after sleeping (for busy-state testing)
    Slow { delay_ms: u64 },
}

/// Mock analyzer returning a scripted result
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    /// Behavior mode
    behavior: MockBehavior,
    /// Result handed back on success
    result: AnalysisResult,
    /// Number of analyze calls received
    request_count: Arc<AtomicUsize>,
}

impl MockAnalyzer {
    /// Create a new mock analyzer with the specified behavior
    pub fn new(behavior: MockBehavior, result: AnalysisResult) -> Self {
        Self {
            behavior,
            result,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that always returns `result`
    pub fn returning(result: AnalysisResult) -> Self {
        Self::new(MockBehavior::Working, result)
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing, AnalysisResult::default())
    }

    /// Create a mock that returns `result` after `delay_ms`
    pub fn slow(result: AnalysisResult, delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms }, result)
    }

    /// Number of analyze calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<AnalysisResult, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(self.result.clone()),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Failed to analyze text: Internal Server Error".to_string(),
            }),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(self.result.clone())
            }
        }
    }
}
