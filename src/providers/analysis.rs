use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::app_config::AnalysisConfig;
use crate::errors::ProviderError;
use crate::providers::{AnalysisResult, Analyzer};

/// Client for the remote text analysis service
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    /// Base URL of the service, without trailing slash
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// Request body for `POST /analyze`
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

impl AnalysisClient {
    /// Create a client for the given base URL with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.endpoint.clone(), Duration::from_secs(config.timeout_secs))
    }

    /// Full URL of the analyze endpoint
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url)
    }
}

#[async_trait]
impl Analyzer for AnalysisClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ProviderError> {
        let url = self.analyze_url();
        debug!("Sending {} chars to {}", text.chars().count(), url);

        let response = self.client
            .post(&url)
            .json(&AnalysisRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown status");
            let body = response.text().await.unwrap_or_default();
            error!("Analysis API error ({}): {}", status, body);
            let message = if body.is_empty() {
                format!("Failed to analyze text: {}", status_text)
            } else {
                format!("Failed to analyze text: {} ({})", status_text, body)
            };
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        match serde_json::from_str::<AnalysisResult>(&body) {
            Ok(result) => {
                debug!(
                    "Analysis returned {} sentence(s) and {} word(s)",
                    result.sentences.len(),
                    result.words.len()
                );
                Ok(result)
            }
            Err(e) => {
                let preview: String = body.chars().take(500).collect();
                error!("Failed to parse analysis response: {}. Raw response (first 500 chars): {}", e, preview);
                Err(ProviderError::ParseError(e.to_string()))
            }
        }
    }
}
