/*!
 * Tests for the three-pass highlighter
 */

use keylight::highlight::{HighlightOptions, Highlighter};

use crate::common::analysis;

#[test]
fn test_highlight_endToEnd_revenueExample() {
    let result = analysis(&["Revenue grew."], &["Revenue"]);
    let html = Highlighter::default().highlight(
        "Revenue grew. Costs fell.",
        &result.sentences,
        &result.words,
    );

    assert_eq!(html.matches("### ").count(), 1);
    assert!(html.contains("<strong>Revenue</strong>"));
    assert!(html.starts_with("### <strong>Revenue</strong> grew."));
    assert!(html.ends_with("Costs fell."));
}

#[test]
fn test_highlight_sameSentenceListedTwice_shouldMarkEachOccurrenceOnce() {
    let result = analysis(&["Costs fell.", "Costs fell."], &[]);
    let html = Highlighter::default().highlight(
        "<p>Costs fell.</p><p>Costs fell.</p>",
        &result.sentences,
        &result.words,
    );
    assert_eq!(html, "<p>### Costs fell.</p><p>### Costs fell.</p>");
}

#[test]
fn test_highlight_fuzzyRecovery_shouldMarkReflowedNeighbourOnce() {
    let result = analysis(&["The quick brown fox jumps."], &[]);
    let html = Highlighter::default().highlight(
        "<div>The quick brown fox jumps. The quick brown fox jumped.</div>",
        &result.sentences,
        &result.words,
    );
    assert_eq!(
        html,
        "<div>### The quick brown fox jumps. ### The quick brown fox jumped.</div>"
    );
}

#[test]
fn test_highlight_fuzzyRecovery_respectsThreshold() {
    let strict = Highlighter::new(HighlightOptions {
        similarity_threshold: 0.95,
        ..HighlightOptions::default()
    });
    let result = analysis(&["The quick brown fox jumps."], &[]);
    let html = strict.highlight(
        "The quick brown fox jumps. The quick brown fox jumped.",
        &result.sentences,
        &result.words,
    );
    assert_eq!(html.matches("###").count(), 1);
}

#[test]
fn test_highlight_noSentencesOrWords_shouldReturnInput() {
    let html = Highlighter::default().highlight("<p>Untouched.</p>", &[], &[]);
    assert_eq!(html, "<p>Untouched.</p>");
}

#[test]
fn test_highlight_unescapedKeywords_shouldUseRegexSemantics() {
    let raw = Highlighter::new(HighlightOptions {
        escape_keywords: false,
        ..HighlightOptions::default()
    });
    let result = analysis(&[], &["colou?r"]);
    let html = raw.highlight("color and colour", &result.sentences, &result.words);
    assert_eq!(html, "<strong>color</strong> and <strong>colour</strong>");

    let escaped = Highlighter::default().highlight("color and colour", &result.sentences, &result.words);
    assert_eq!(escaped, "color and colour");
}

#[test]
fn test_highlight_customMarker_shouldBeUsedEverywhere() {
    let highlighter = Highlighter::new(HighlightOptions {
        marker: ">> ".to_string(),
        ..HighlightOptions::default()
    });
    let result = analysis(&["Sales rose fast."], &[]);
    let html = highlighter.highlight(
        "Sales rose fast. Sales rose faster.",
        &result.sentences,
        &result.words,
    );
    assert_eq!(html, ">> Sales rose fast. >> Sales rose faster.");
}

const DOGS: &str = "The quick brown fox jumps over the lazy dogs.";
const LOGS: &str = "The quick brown fox jumps over the lazy logs.";

#[test]
fn test_highlight_paragraphs_bothTracked_shouldMarkEachOnce() {
    let result = analysis(&[DOGS, LOGS], &[]);
    let html = Highlighter::default().highlight(
        &format!("<p>{}</p><p>{}</p>", DOGS, LOGS),
        &result.sentences,
        &result.words,
    );
    assert_eq!(html, format!("<p>### {}</p><p>### {}</p>", DOGS, LOGS));
    assert_eq!(html.matches("###").count(), 2);
}

#[test]
fn test_highlight_paragraphs_nearDuplicate_shouldMarkInsideItsParagraph() {
    let result = analysis(&[DOGS], &[]);
    let html = Highlighter::default().highlight(
        &format!("<p>{}</p><p>{}</p>", DOGS, LOGS),
        &result.sentences,
        &result.words,
    );
    assert_eq!(html, format!("<p>### {}</p><p>### {}</p>", DOGS, LOGS));
}

#[test]
fn test_highlight_emphasisInFollower_shouldMarkBeforeStrongTag() {
    let result = analysis(&["Profits rose fast."], &["Profit"]);
    let html = Highlighter::default().highlight(
        "<p>Profits rose fast.</p><p>Profit rose fast.</p>",
        &result.sentences,
        &result.words,
    );
    assert_eq!(
        html,
        "<p>### Profits rose fast.</p><p>### <strong>Profit</strong> rose fast.</p>"
    );
}

#[test]
fn test_highlight_emphasisInsideFollowerText_shouldCompareTagFreeText() {
    let result = analysis(&["The quick brown fox jumps."], &["jumped"]);
    let html = Highlighter::default().highlight(
        "The quick brown fox jumps. The quick brown fox jumped.",
        &result.sentences,
        &result.words,
    );
    assert_eq!(
        html,
        "### The quick brown fox jumps. ### The quick brown fox <strong>jumped</strong>."
    );
}

#[test]
fn test_highlight_keywordInsideTrackedSentence_disablesRecoveryForIt() {
    // Emphasis splits the marked sentence, so the marked form no longer matches
    let result = analysis(&["Profits rose fast."], &["Profits"]);
    let html = Highlighter::default().highlight(
        "<p>Profits rose fast.</p><p>Profit rose fast.</p>",
        &result.sentences,
        &result.words,
    );
    assert_eq!(
        html,
        "<p>### <strong>Profits</strong> rose fast.</p><p>Profit rose fast.</p>"
    );
}
