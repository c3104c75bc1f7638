/*!
 * Bigram similarity for sentence deduplication.
 *
 * Provides a Sørensen–Dice coefficient over character bigrams so the
 * highlighter can recognise a rendered fragment as "the same" sentence even
 * after surrounding markup shifted its exact boundaries.
 */

use std::collections::HashMap;

/// Default acceptance threshold used by the highlighter
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Similarity matcher using bigram overlap
#[derive(Debug, Clone)]
pub struct SimilarityMatcher {
    /// Threshold for accepting a match (0.0-1.0, higher = stricter)
    threshold: f64,
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SimilarityMatcher {
    /// Create a new matcher with a custom threshold
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Check whether two strings are similar enough to count as the same sentence
    pub fn matches(&self, a: &str, b: &str) -> bool {
        similarity(a, b) >= self.threshold
    }

    /// Find the best matching candidate from a list
    ///
    /// Returns the candidate with highest similarity at or above the threshold, if any.
    pub fn find_best_match<'a>(&self, text: &str, candidates: &[&'a str]) -> Option<&'a str> {
        let mut best_match: Option<(&str, f64)> = None;

        for candidate in candidates {
            let sim = similarity(text, candidate);
            if sim < self.threshold {
                continue;
            }
            match best_match {
                Some((_, best_sim)) if sim <= best_sim => {}
                _ => best_match = Some((candidate, sim)),
            }
        }

        best_match.map(|(candidate, _)| candidate)
    }

    /// Find all candidates that match within the threshold
    pub fn find_all_matches<'a>(&self, text: &str, candidates: &[&'a str]) -> Vec<(&'a str, f64)> {
        candidates
            .iter()
            .filter_map(|candidate| {
                let sim = similarity(text, candidate);
                (sim >= self.threshold).then_some((*candidate, sim))
            })
            .collect()
    }
}

/// Calculate the Dice coefficient of two strings' character bigrams (0.0-1.0).
///
/// Whitespace is ignored and comparison is case sensitive. Strings that are
/// identical after whitespace removal score 1.0; a string too short to have
/// any bigram scores 0.0 against anything different.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let b: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut first_bigrams: HashMap<(char, char), usize> = HashMap::with_capacity(a.len());
    for pair in a.windows(2) {
        *first_bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = first_bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2.0 * intersection as f64) / ((a.len() + b.len() - 2) as f64)
}
