/*!
 * Tests for keyword emphasis, preview rendering and the bold toggle
 */

use keylight::editor::Cursor;
use keylight::highlight::{render_preview, toggle_bold, wrap_keywords, wrap_keywords_with};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_wrapKeywords_wholeWordsOnly() {
    assert_eq!(wrap_keywords("cat and dog", &words(&["cat", "dog"])), "**cat** and **dog**");
    assert_eq!(wrap_keywords("cats and dogs", &words(&["cat", "dog"])), "cats and dogs");
}

#[test]
fn test_wrapKeywords_emptyList_shouldReturnInputUnchanged() {
    let text = "Nothing (to) wrap here.";
    assert_eq!(wrap_keywords(text, &[]), text);
}

#[test]
fn test_wrapKeywords_everyOccurrence_shouldBeWrapped() {
    assert_eq!(
        wrap_keywords("Revenue up, revenue down.", &words(&["revenue"])),
        "**Revenue** up, **revenue** down."
    );
}

#[test]
fn test_wrapKeywords_regexLookingKeyword_shouldBeLiteralByDefault() {
    assert_eq!(wrap_keywords("c++ is not c", &words(&["c+"])), "c++ is not c");
    assert_eq!(wrap_keywords("x.y and xzy", &words(&["x.y"])), "**x.y** and xzy");
}

#[test]
fn test_wrapKeywordsWith_brokenPatternUnescaped_shouldNotPanic() {
    assert_eq!(wrap_keywords_with("a [b", &words(&["[b"]), false), "a [b");
}

#[test]
fn test_renderPreview_nonGreedy() {
    assert_eq!(
        render_preview("**a** b **c**"),
        "<strong>a</strong> b <strong>c</strong>"
    );
}

#[test]
fn test_wrapThenPreview_shouldProduceStrongTags() {
    let wrapped = wrap_keywords("cat and dog", &words(&["cat"]));
    assert_eq!(render_preview(&wrapped), "<strong>cat</strong> and dog");
}

#[test]
fn test_toggleBold_cursorAtWordEnd_shouldWrapKeyword() {
    let result = toggle_bold("sales rose", Cursor::new(0, 5), &words(&["sales"]));
    assert_eq!(result.as_deref(), Some("**sales** rose"));
}

#[test]
fn test_toggleBold_noKeywords_shouldDoNothing() {
    assert!(toggle_bold("sales rose", Cursor::new(0, 2), &[]).is_none());
}
