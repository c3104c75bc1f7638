/*!
 * Sentence and keyword highlighting over rendered markup.
 *
 * The highlighter rewrites the content buffer in three ordered passes:
 *
 * 1. Exact sentence pass: every literal occurrence of an important sentence
 *    gets the marker token in front of it.
 * 2. Keyword pass: whole-word, case-insensitive keyword hits are wrapped in
 *    `<strong>` tags.
 * 3. Fuzzy-recovery pass: the text following each marked sentence, up to the
 *    next period, is compared against that sentence. Near duplicates that the
 *    exact pass missed get marked too.
 *
 * A per-call set of already highlighted sections keeps any sentence from
 * being marked twice.
 */

use std::collections::HashSet;

use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::app_config::HighlightConfig;
use crate::highlight::formatting::keyword_pattern;
use crate::highlight::similarity::{similarity, DEFAULT_THRESHOLD};

/// An opening or closing tag at the start of the input
static LEADING_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A</?[A-Za-z][^<>]*>").expect("leading tag pattern is valid")
});

/// Any tag, for reducing a candidate to its text
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[A-Za-z][^<>]*>").expect("tag pattern is valid")
});

/// Options controlling how the highlighter marks content
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOptions {
    /// Token inserted in front of important sentences
    pub marker: String,
    /// Minimum similarity for the fuzzy-recovery pass
    pub similarity_threshold: f64,
    /// Match keywords literally instead of as regex fragments
    pub escape_keywords: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            marker: "### ".to_string(),
            similarity_threshold: DEFAULT_THRESHOLD,
            escape_keywords: true,
        }
    }
}

impl From<&HighlightConfig> for HighlightOptions {
    fn from(config: &HighlightConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            similarity_threshold: config.similarity_threshold,
            escape_keywords: config.escape_keywords,
        }
    }
}

/// Rewrites rendered markup so important content stands out
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    options: HighlightOptions,
}

impl Highlighter {
    pub fn new(options: HighlightOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// Highlight sentences and words in `html`, returning the rewritten markup.
    ///
    /// This is a pure rewrite; writing the result back into the page is the
    /// caller's job (see `Controller::apply_highlight`).
    pub fn highlight(&self, html: &str, sentences: &[String], words: &[String]) -> String {
        trace!("Original HTML: {}", html);

        let mut highlighted: HashSet<String> = HashSet::new();
        let mut html = self.mark_sentences(html, sentences, &mut highlighted);
        html = self.emphasize_words(&html, words);
        self.recover_near_duplicates(&mut html, sentences, &mut highlighted);

        debug!(
            "Highlighted {} section(s) for {} sentence(s) and {} word(s)",
            highlighted.len(),
            sentences.len(),
            words.len()
        );
        trace!("Updated HTML: {}", html);
        html
    }

    /// Pass 1: prefix every literal occurrence of each sentence with the marker
    fn mark_sentences(&self, html: &str, sentences: &[String], highlighted: &mut HashSet<String>) -> String {
        let mut html = html.to_string();

        for sentence in sentences {
            let cleaned = sentence.trim();
            if cleaned.is_empty() || highlighted.contains(cleaned) {
                continue;
            }

            let pattern = match Regex::new(&regex::escape(cleaned)) {
                Ok(pattern) => pattern,
                Err(e) => {
                    warn!("Skipping sentence that cannot be matched: {}", e);
                    continue;
                }
            };

            if !pattern.is_match(&html) {
                continue;
            }

            let marked = format!("{}{}", self.options.marker, cleaned);
            html = pattern.replace_all(&html, NoExpand(&marked)).into_owned();
            highlighted.insert(cleaned.to_string());
        }

        html
    }

    /// Pass 2: wrap keyword hits in `<strong>` tags
    fn emphasize_words(&self, html: &str, words: &[String]) -> String {
        match keyword_pattern(words, self.options.escape_keywords) {
            Some(pattern) => pattern.replace_all(html, "<strong>$0</strong>").into_owned(),
            None => html.to_string(),
        }
    }

    /// Build the case-insensitive "marker followed by sentence" pattern.
    ///
    /// Each whitespace character trailing the marker matches any single
    /// whitespace character.
    fn marked_pattern(&self, sentence: &str) -> Option<Regex> {
        let marker = self.options.marker.trim_end();
        let separator = r"\s".repeat(self.options.marker[marker.len()..].chars().count());
        let source = format!("{}{}{}", regex::escape(marker), separator, regex::escape(sentence));

        RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| warn!("Skipping fuzzy pass for sentence: {}", e))
            .ok()
    }

    /// Pass 3: mark near-duplicate sentences that follow an already marked one
    fn recover_near_duplicates(&self, html: &mut String, sentences: &[String], highlighted: &mut HashSet<String>) {
        let marker_token = self.options.marker.trim();

        for sentence in sentences {
            let cleaned = sentence.trim();
            if cleaned.is_empty() {
                continue;
            }
            let Some(pattern) = self.marked_pattern(cleaned) else {
                continue;
            };

            let match_ends: Vec<usize> = pattern.find_iter(html).map(|m| m.end()).collect();
            let mut shift = 0usize;

            for match_end in match_ends {
                let (insert_at, text_start) = skip_leading_markup(html, match_end + shift);
                if html[text_start..].starts_with(marker_token) {
                    continue;
                }
                let Some(period) = html[text_start..].find('.') else {
                    continue;
                };
                let end = text_start + period + 1;

                let candidate = TAG_REGEX.replace_all(&html[text_start..end], "").trim().to_string();
                if candidate.is_empty() {
                    continue;
                }

                let score = similarity(cleaned, &candidate);
                if score < self.options.similarity_threshold || highlighted.contains(&candidate) {
                    continue;
                }

                debug!("Marking near-duplicate of '{}' (similarity {:.2}): '{}'", cleaned, score, candidate);
                html.insert_str(insert_at, &self.options.marker);
                shift += self.options.marker.len();
                highlighted.insert(candidate);
            }
        }
    }
}

/// Skip whitespace and tags starting at `from`.
///
/// Returns the marker insertion point and the start of the text. The insertion
/// point stays in front of a leading `<strong>` so keyword emphasis ends up
/// inside the marked sentence.
fn skip_leading_markup(html: &str, from: usize) -> (usize, usize) {
    let mut pos = from;
    let mut insert_at = from;
    let mut in_emphasis = false;

    loop {
        let rest = &html[pos..];
        pos += rest.len() - rest.trim_start().len();
        if !in_emphasis {
            insert_at = pos;
        }

        let Some(tag) = LEADING_TAG_REGEX.find(&html[pos..]) else {
            break;
        };
        if tag.as_str().eq_ignore_ascii_case("<strong>") {
            in_emphasis = true;
        }
        pos += tag.end();
    }

    (insert_at, pos)
}
