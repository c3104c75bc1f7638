/*!
 * Analysis provider implementations.
 *
 * This module contains the clients that turn document text into an
 * analysis result:
 * - `analysis`: HTTP client for the remote `/analyze` service
 * - `mock`: scripted analyzer for tests and offline runs
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Important sentences and words reported for a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sentences deemed important, in service order
    #[serde(default)]
    pub sentences: Vec<String>,
    /// Keywords deemed important
    #[serde(default)]
    pub words: Vec<String>,
}

/// Common trait for all analysis providers
///
/// The controller only depends on this trait, so the HTTP client and the mock
/// can be used interchangeably.
#[async_trait]
pub trait Analyzer: Send + Sync + Debug {
    /// Analyze the given text
    ///
    /// # Arguments
    /// * `text` - The full document text
    ///
    /// # Returns
    /// * `Result<AnalysisResult, ProviderError>` - The analysis or an error
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ProviderError>;
}

pub mod analysis;
pub mod mock;
