//! Lexical similarity between a claim and a dataset statement
//!
//! The score is a cheap word-overlap measure, not a semantic one. Both texts are
//! lower-cased and split on whitespace; a word of the first text counts as a
//! match when it is longer than three characters and some word of the second
//! text contains it, or is contained by it. The match count is divided by the
//! longer of the two word lists.
//!
//! Punctuation is not stripped: `"pole,"` still contains `"pole"`, but
//! `"pole."` and `"poles"` share no containment and do not match.

/// Scores must be strictly greater than this to count as a dataset match
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Words of this many characters or fewer never count as matches
const SHORT_WORD_LEN: usize = 3;

/// Compute the word-overlap similarity of `a` against `b`, in `[0, 1]`
///
/// Short words still count toward the denominator. Two empty texts score 0.
///
/// # Examples
///
/// ```
/// use claimcheck_domain::similarity;
///
/// let score = similarity("The earth is round", "the earth is round");
/// assert_eq!(score, 0.5); // "earth" and "round" match; "the" and "is" are too short
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    let denominator = words_a.len().max(words_b.len());
    if denominator == 0 {
        return 0.0;
    }

    let matches = words_a
        .iter()
        .filter(|word| word.chars().count() > SHORT_WORD_LEN)
        .filter(|word| words_b.iter().any(|other| other.contains(**word) || word.contains(*other)))
        .count();

    matches as f64 / denominator as f64
}

/// Whether a score clears the (exclusive) match threshold
pub fn exceeds_threshold(score: f64) -> bool {
    score > MATCH_THRESHOLD
}
