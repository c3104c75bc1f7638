/*!
 * Sentence segmentation.
 *
 * Splits raw editor text on runs of terminal punctuation (`.`, `!`, `?`).
 * A run touching a digit is not treated as a boundary, so decimals such as
 * "3.14" stay inside their sentence.
 */

/// Check whether a character ends a sentence
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into trimmed sentences, keeping each sentence's trailing punctuation.
///
/// Trailing text without terminal punctuation is kept as a final sentence.
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut sentence_start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !is_terminal(c) {
            i += 1;
            continue;
        }

        // A boundary may not start right after a digit
        if i > 0 && chars[i - 1].1.is_ascii_digit() {
            i += 1;
            continue;
        }

        let mut run_end = i;
        while run_end < chars.len() && is_terminal(chars[run_end].1) {
            run_end += 1;
        }

        // A run followed by a digit gives up its last character
        if run_end < chars.len() && chars[run_end].1.is_ascii_digit() {
            run_end -= 1;
            if run_end == i {
                i += 1;
                continue;
            }
        }

        let byte_end = chars.get(run_end).map_or(text.len(), |(pos, _)| *pos);
        push_trimmed(&mut sentences, &text[sentence_start..byte_end]);
        sentence_start = byte_end;
        i = run_end;
    }

    push_trimmed(&mut sentences, &text[sentence_start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
