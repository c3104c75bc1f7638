/*!
 * Tests for sentence segmentation
 */

use keylight::highlight::segment;

#[test]
fn test_segment_decimalPrice_shouldStayOneSentence() {
    assert_eq!(segment("It costs 3.14 dollars."), vec!["It costs 3.14 dollars."]);
}

#[test]
fn test_segment_twoSentences_shouldSplitAndTrim() {
    assert_eq!(segment("Hi. Bye!"), vec!["Hi.", "Bye!"]);
}

#[test]
fn test_segment_multiline_shouldTrimNewlines() {
    let text = "Revenue grew.\nCosts fell.\n\nMargins improved?";
    assert_eq!(
        segment(text),
        vec!["Revenue grew.", "Costs fell.", "Margins improved?"]
    );
}

#[test]
fn test_segment_versionNumbers_shouldNotSplit() {
    assert_eq!(
        segment("Upgrade to 1.2.3 today. It is faster."),
        vec!["Upgrade to 1.2.3 today.", "It is faster."]
    );
}

#[test]
fn test_segment_textWithoutPunctuation_shouldNotDropContent() {
    assert_eq!(segment("no punctuation at all"), vec!["no punctuation at all"]);
    assert_eq!(segment("First. then a tail"), vec!["First.", "then a tail"]);
}

#[test]
fn test_segment_rejoinedOutput_shouldMatchNonWhitespaceInput() {
    let inputs = [
        "Hi. Bye!",
        "It costs 3.14 dollars. Cheap!? Maybe",
        "...leading dots. And 4.5.6 numbers!",
        "   ",
        "한국어 문장입니다. 두 번째 문장!",
    ];

    for input in inputs {
        let rejoined: String = segment(input)
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rejoined, expected, "input: {:?}", input);
    }
}

#[test]
fn test_segment_neverYieldsBlankSentences() {
    for sentence in segment("A. . ! ? B.  \n  ") {
        assert!(!sentence.trim().is_empty());
        assert_eq!(sentence, sentence.trim());
    }
}
