//! Dice coefficient over character bigrams.
//!
//! Scores how similar two strings are by counting shared 2-character pairs,
//! word by word. Useful for fuzzy matching of short strings where an edit
//! distance would be too strict about character positions.

/// Lowercase and strip surrounding whitespace before pairing.
fn sanitize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// All overlapping character pairs in every whitespace-separated word,
/// concatenated in order. A word of length L yields L-1 pairs; words
/// shorter than two characters yield none.
fn word_letter_pairs(s: &str) -> Vec<(char, char)> {
    let mut pairs = Vec::new();
    for word in s.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        pairs.extend(chars.windows(2).map(|w| (w[0], w[1])));
    }
    pairs
}

/// Compare two strings and return a similarity score in `[0.0, 1.0]`.
///
/// The score is `2 * |intersection| / (|pairs_a| + |pairs_b|)` where the
/// intersection is a greedy multiset match: each pair on the right side can
/// satisfy at most one pair on the left. Matched positions are flagged as
/// consumed instead of removed, so matching never shifts later indices.
///
/// When neither input produces a single bigram (both empty or
/// single-character after sanitization) the comparison is degenerate and
/// the function returns `0.0`.
///
/// # Examples
/// ```
/// use tfidf_scorer::distance::dice;
///
/// assert_eq!(dice::compare("night", "nacht"), 0.25);
/// assert_eq!(dice::compare("same", "same"), 1.0);
/// assert_eq!(dice::compare("a", "b"), 0.0);
/// ```
pub fn compare(a: &str, b: &str) -> f64 {
    let pairs_a = word_letter_pairs(&sanitize(a));
    let pairs_b = word_letter_pairs(&sanitize(b));

    let union = pairs_a.len() + pairs_b.len();
    if union == 0 {
        return 0.0;
    }

    let mut consumed = vec![false; pairs_b.len()];
    let mut intersection = 0usize;
    for pair in &pairs_a {
        let hit = (0..pairs_b.len()).find(|&j| !consumed[j] && pairs_b[j] == *pair);
        if let Some(j) = hit {
            consumed[j] = true;
            intersection += 1;
        }
    }

    2.0 * intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_reference_value() {
        // night: ni ig gh ht / nacht: na ac ch ht -> one shared pair of eight
        assert_eq!(compare("night", "nacht"), 0.25);
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(compare("healed", "healed"), 1.0);
        assert_eq!(compare("two words", "two words"), 1.0);
    }

    #[test]
    fn symmetric_under_swap() {
        let samples = [
            ("night", "nacht"),
            ("context", "contact"),
            ("web database applications", "database applications on the web"),
            ("", "something"),
        ];
        for (a, b) in samples {
            assert_eq!(compare(a, b), compare(b, a), "asymmetric for {a:?}/{b:?}");
        }
    }

    #[test]
    fn bounded_between_zero_and_one() {
        let samples = [
            ("aaaa", "aaa"),
            ("french revolution", "revolution"),
            ("xyz", "abc"),
            ("repetition repetition", "repetition"),
        ];
        for (a, b) in samples {
            let score = compare(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?}/{b:?} scored {score}");
        }
    }

    #[test]
    fn related_strings_outscore_unrelated() {
        assert!(compare("context", "contact") > compare("context", "banana"));
    }

    #[test]
    fn case_and_outer_whitespace_ignored() {
        assert_eq!(compare("  Night ", "night"), 1.0);
    }

    #[test]
    fn degenerate_inputs_return_zero() {
        assert_eq!(compare("a", "b"), 0.0);
        assert_eq!(compare("", ""), 0.0);
        assert_eq!(compare("x", ""), 0.0);
    }

    #[test]
    fn repeated_pairs_match_as_multiset() {
        // "aaa" has pairs [aa, aa]; "aa" has [aa]. The single right-side
        // pair may only be consumed once: 2 * 1 / 3.
        assert_eq!(compare("aaa", "aa"), 2.0 / 3.0);
    }

    #[test]
    fn pairs_never_cross_word_boundaries() {
        // "ab cd" yields [ab, cd], not the joining pair "bc".
        assert_eq!(compare("ab cd", "bc"), 0.0);
    }
}
