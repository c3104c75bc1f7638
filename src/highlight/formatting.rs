/*!
 * Keyword emphasis for the editor buffer and the preview pane.
 *
 * This module wraps important keywords in markdown bold markers, renders
 * those markers as HTML for the preview, and implements the manual
 * bold toggle for the word under the cursor.
 */

use log::warn;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::editor::Cursor;

/// Markdown bold markers in preview text
static BOLD_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(.*?)\*\*").expect("bold marker pattern is valid")
});

/// Build a whole-word, case-insensitive alternation of the given keywords.
///
/// Blank keywords are dropped and longer keywords are tried first so that
/// "New York" wins over "New". Returns `None` when nothing usable is left
/// or when an unescaped keyword is not a valid pattern.
pub(crate) fn keyword_pattern(keywords: &[String], escape: bool) -> Option<Regex> {
    let mut alternatives: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();

    if alternatives.is_empty() {
        return None;
    }

    alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    alternatives.dedup();

    let body = alternatives
        .iter()
        .map(|k| if escape { regex::escape(k) } else { (*k).to_string() })
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&format!(r"\b(?:{})\b", body))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("Ignoring keyword list that does not form a valid pattern: {}", e);
            None
        }
    }
}

/// Wrap every whole-word keyword occurrence in `**` markers.
///
/// Keywords are matched literally. An empty keyword list returns the input unchanged.
pub fn wrap_keywords(text: &str, keywords: &[String]) -> String {
    wrap_keywords_with(text, keywords, true)
}

/// Same as [`wrap_keywords`] but lets the caller opt out of escaping
pub fn wrap_keywords_with(text: &str, keywords: &[String], escape: bool) -> String {
    match keyword_pattern(keywords, escape) {
        Some(pattern) => pattern.replace_all(text, "**$0**").into_owned(),
        None => text.to_string(),
    }
}

/// Render `**bold**` markers as `<strong>` tags for the preview pane
pub fn render_preview(text: &str) -> String {
    BOLD_MARKER_REGEX
        .replace_all(text, "<strong>$1</strong>")
        .into_owned()
}

/// Wrap the word token at `cursor` in `**` if it is one of the keywords.
///
/// Returns the new buffer, or `None` when the cursor is not on a keyword.
pub fn toggle_bold(text: &str, cursor: Cursor, keywords: &[String]) -> Option<String> {
    let token = crate::editor::token_at(text, cursor)?;
    if !keywords.iter().any(|k| k == &token.text) {
        return None;
    }

    let mut result = String::with_capacity(text.len() + 4);
    result.push_str(&text[..token.start]);
    result.push_str("**");
    result.push_str(&token.text);
    result.push_str("**");
    result.push_str(&text[token.end..]);
    Some(result)
}
