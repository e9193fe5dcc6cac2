//! Two-metric similarity scorer: token Jaccard plus normalized Levenshtein.
//!
//! Every function here is total: empty inputs have defined results.

use std::collections::HashSet;

use crate::tokenizer::tokenize;

/// Weight of token-set overlap in the final score.
pub const JACCARD_WEIGHT: f64 = 0.7;
/// Weight of character-level closeness in the final score.
pub const EDIT_WEIGHT: f64 = 0.3;

/// Exact Jaccard similarity between two token sequences, treated as sets.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|, and 0.0 when the union is empty.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Levenshtein distance over Unicode scalar values, unit cost per edit.
///
/// Two-row DP: O(n·m) time, O(m) memory.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Case-insensitive edit distance divided by the longer input's length.
///
/// Both empty → 1.0 (no information, not a perfect match). Clamped to
/// `[0.0, 1.0]` because lowercasing can lengthen a string.
pub fn normalized_edit_distance(query: &str, candidate: &str) -> f64 {
    let longest = query.chars().count().max(candidate.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(&query.to_lowercase(), &candidate.to_lowercase());
    (distance as f64 / longest as f64).min(1.0)
}

/// Confidence that `candidate` answers `query`, in `[0.0, 1.0]`.
pub fn score(query: &str, candidate: &str) -> f64 {
    let j = jaccard(&tokenize(query), &tokenize(candidate));
    let d = normalized_edit_distance(query, candidate);
    (JACCARD_WEIGHT * j + EDIT_WEIGHT * (1.0 - d)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_jaccard_basic() {
        assert!((jaccard(&["a", "b"], &["b", "c"]) - 1.0 / 3.0).abs() < EPS);
        assert!((jaccard(&["a", "b"], &["a", "b"]) - 1.0).abs() < EPS);
        assert_eq!(jaccard(&["a"], &["b"]), 0.0);
    }

    #[test]
    fn test_jaccard_ignores_duplicates() {
        assert!((jaccard(&["a", "a", "b"], &["a", "b", "b"]) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_jaccard_empty_union() {
        let empty: [&str; 0] = [];
        assert_eq!(jaccard(&empty, &empty), 0.0);
        assert_eq!(jaccard(&["a"], &empty), 0.0);
    }

    #[test]
    fn test_levenshtein_known_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本", "日本語"), 1);
    }

    #[test]
    fn test_normalized_distance_is_case_insensitive() {
        assert_eq!(normalized_edit_distance("HELLO", "hello"), 0.0);
    }

    #[test]
    fn test_normalized_distance_degenerate() {
        assert_eq!(normalized_edit_distance("", ""), 1.0);
        assert_eq!(normalized_edit_distance("abc", ""), 1.0);
        assert!((normalized_edit_distance("ab", "abcd") - 0.5).abs() < EPS);
    }

    #[test]
    fn test_score_identical() {
        assert!((score("How do I reset my password?", "How do I reset my password?") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_score_empty_inputs() {
        assert_eq!(score("", ""), 0.0);
        // No tokens, no shared characters.
        assert_eq!(score("", "refund"), 0.0);
    }

    #[test]
    fn test_score_partial_overlap() {
        // jaccard = 2/5, distance = 14 over 27 chars.
        let s = score("refund policy", "What is your refund policy?");
        let expected = 0.7 * 0.4 + 0.3 * (1.0 - 14.0 / 27.0);
        assert!((s - expected).abs() < EPS);
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = "where is my order";
        let b = "Where is my package?";
        assert!((score(a, b) - score(b, a)).abs() < EPS);
    }

    #[test]
    fn test_score_punctuation_only_query() {
        // No tokens on either side, only character closeness counts.
        let s = score("?!", "?!");
        assert!((s - EDIT_WEIGHT).abs() < EPS);
    }
}
