/*!
 * Editor collaborator.
 *
 * The highlighting flow needs very little from the text editor it runs
 * against: read the whole buffer, replace the whole buffer, and look up
 * the word under the cursor. This module defines that narrow contract and
 * an in-memory implementation used by the CLI and the tests.
 */

pub mod surface;

pub use surface::{DocumentSurface, MemorySurface};

/// Line/column position in the editor buffer (both zero-based, column in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub ch: usize,
}

impl Cursor {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// A word token located in the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the first character in the whole buffer
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub text: String,
}

/// Text editor operations consumed by the controller
pub trait Editor: Send {
    /// Get the full buffer
    fn get_value(&self) -> String;

    /// Replace the full buffer
    fn set_value(&mut self, value: &str);

    /// Find the word token at the given cursor position
    fn token_at(&self, cursor: Cursor) -> Option<Token> {
        token_at(&self.get_value(), cursor)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the word containing `cursor`, or the word ending right before it.
pub fn token_at(text: &str, cursor: Cursor) -> Option<Token> {
    let line_start = if cursor.line == 0 {
        0
    } else {
        text.match_indices('\n').nth(cursor.line - 1)?.0 + 1
    };
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |offset| line_start + offset);
    let line: Vec<(usize, char)> = text[line_start..line_end].char_indices().collect();

    let ch = cursor.ch.min(line.len());
    let anchor = if ch < line.len() && is_word_char(line[ch].1) {
        ch
    } else if ch > 0 && is_word_char(line[ch - 1].1) {
        ch - 1
    } else {
        return None;
    };

    let mut first = anchor;
    while first > 0 && is_word_char(line[first - 1].1) {
        first -= 1;
    }
    let mut last = anchor;
    while last + 1 < line.len() && is_word_char(line[last + 1].1) {
        last += 1;
    }

    let start = line_start + line[first].0;
    let end = line_start + line[last].0 + line[last].1.len_utf8();
    Some(Token {
        start,
        end,
        text: text[start..end].to_string(),
    })
}

/// In-memory editor holding a single buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    value: String,
}

impl MemoryEditor {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl Editor for MemoryEditor {
    fn get_value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
