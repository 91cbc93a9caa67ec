//! String similarity scoring for fuzzy word matching.
//!
//! Uses the Sørensen–Dice coefficient over character bigrams: the score is
//! `2 * |shared bigrams| / (|bigrams a| + |bigrams b|)`, in `[0, 1]`.

use std::collections::HashMap;

/// Score how alike two words are, from 0.0 (nothing shared) to 1.0 (equal).
///
/// Identical strings always score 1.0. Strings shorter than two characters
/// have no bigrams and score 0.0 unless identical.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    // Multiset of bigrams from `a`, consumed while scanning `b`
    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            shared += 1;
        }
    }

    (2 * shared) as f64 / (a.len() + b.len() - 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_words_score_one() {
        assert_eq!(dice_coefficient("hello", "hello"), 1.0);
        assert_eq!(dice_coefficient("", ""), 1.0);
    }

    #[test]
    fn disjoint_words_score_zero() {
        assert_eq!(dice_coefficient("abc", "xyz"), 0.0);
    }

    #[test]
    fn single_char_only_matches_exactly() {
        assert_eq!(dice_coefficient("a", "b"), 0.0);
        assert_eq!(dice_coefficient("a", "ab"), 0.0);
        assert_eq!(dice_coefficient("a", "a"), 1.0);
    }

    #[test]
    fn close_words_score_high() {
        // "night" vs "nacht": bigrams {ni,ig,gh,ht} vs {na,ac,ch,ht}
        let score = dice_coefficient("night", "nacht");
        assert!((score - 0.25).abs() < 1e-9);

        // one trailing char differs
        assert!(dice_coefficient("healed", "sealed") > 0.7);
    }

    #[test]
    fn repeated_bigrams_count_as_multiset() {
        // "aaaa" has bigrams {aa,aa,aa}; "aa" has {aa}. shared = 1
        let score = dice_coefficient("aaaa", "aa");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn score_is_symmetric() {
        let ab = dice_coefficient("monday", "montag");
        let ba = dice_coefficient("montag", "monday");
        assert_eq!(ab, ba);
    }
}
