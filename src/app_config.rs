use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Analysis service settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Highlighting settings
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Analysis service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Base URL of the analysis service; requests go to `{endpoint}/analyze`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Highlighting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HighlightConfig {
    /// Marker inserted in front of important sentences
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Minimum bigram similarity for near-duplicate recovery (0.0 to 1.0)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Treat keywords as literal text rather than regex fragments
    #[serde(default = "default_true")]
    pub escape_keywords: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            similarity_threshold: default_similarity_threshold(),
            escape_keywords: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_marker() -> String {
    "### ".to_string()
}

fn default_similarity_threshold() -> f64 {
    0.8
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Write configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Load the config at `path`, writing a default one first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        log::warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.analysis.endpoint)
            .with_context(|| format!("Invalid analysis endpoint: {}", self.analysis.endpoint))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("Analysis endpoint must use http or https: {}", self.analysis.endpoint));
        }

        if self.analysis.timeout_secs == 0 {
            return Err(anyhow!("Analysis timeout must be at least one second"));
        }

        if !(0.0..=1.0).contains(&self.highlight.similarity_threshold) {
            return Err(anyhow!(
                "Similarity threshold must be between 0.0 and 1.0, got {}",
                self.highlight.similarity_threshold
            ));
        }

        if self.highlight.marker.trim().is_empty() {
            return Err(anyhow!("Highlight marker must not be blank"));
        }

        Ok(())
    }
}
