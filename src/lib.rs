/*!
 * # keylight - important sentence and keyword highlighting
 *
 * A Rust library that sends a document's text to an analysis service and
 * highlights the important sentences and words it reports.
 *
 * ## Features
 *
 * - Sentence segmentation that does not split on decimals
 * - Three-pass highlighting of rendered markup:
 *   - exact sentence marking
 *   - whole-word keyword emphasis
 *   - fuzzy recovery of near-duplicate sentences
 * - Markdown bold wrapping of keywords and preview rendering
 * - Single in-flight analysis with an explicit busy state
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `highlight`: Segmentation, similarity, highlighting and formatting
 * - `editor`: Editor and rendered-surface collaborators
 * - `providers`: Analysis service clients
 * - `app_controller`: Orchestration of one analysis run
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod editor;
pub mod errors;
pub mod file_utils;
pub mod highlight;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ProviderError};
pub use highlight::{segment, similarity, wrap_keywords, Highlighter};
pub use providers::{AnalysisResult, Analyzer};
