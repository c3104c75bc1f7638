/*!
 * Sentence and keyword highlighting.
 *
 * - `segmenter`: splits text into sentences
 * - `similarity`: bigram similarity used for near-duplicate detection
 * - `highlighter`: three-pass rewrite of rendered markup
 * - `formatting`: keyword bold markers, preview rendering, bold toggle
 */

pub mod formatting;
pub mod highlighter;
pub mod segmenter;
pub mod similarity;

pub use formatting::{render_preview, toggle_bold, wrap_keywords, wrap_keywords_with};
pub use highlighter::{HighlightOptions, Highlighter};
pub use segmenter::segment;
pub use similarity::{similarity, SimilarityMatcher};
