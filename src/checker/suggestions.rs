//! Candidate ranking for rejected words.

use crate::dict::Trie;
use crate::distance::distance;
use rayon::prelude::*;
use serde::Serialize;

/// Default cap on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Candidates farther than this are discarded as too dissimilar; a
/// wider band produces noisy corrections for all but very short words.
pub const MAX_DISTANCE: usize = 2;

/// A dictionary word paired with its edit distance from the rejected
/// word. The distance doubles as the integer score in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Rank dictionary candidates for a rejected word.
///
/// Enumerates the whole dictionary, keeps candidates within edit
/// distance [1, 2] (exact matches are never suggestions), sorts them
/// ascending by distance with a stable sort so enumeration order breaks
/// ties, and truncates to `max`. An empty result means no suggestions
/// are available, which is a valid outcome.
///
/// The distance map is pure per candidate and runs in parallel; the
/// ordered collect keeps enumeration order for the tie-break.
pub fn rank(word: &str, dictionary: &Trie, max: usize) -> Vec<Suggestion> {
    let word_len = word.chars().count();

    let mut candidates: Vec<Suggestion> = dictionary
        .all_words()
        .into_par_iter()
        .filter_map(|candidate| {
            // A length gap wider than the band can never land inside it.
            if candidate.len().abs_diff(word_len) > MAX_DISTANCE {
                return None;
            }

            let d = distance(word, &candidate);
            (1..=MAX_DISTANCE)
                .contains(&d)
                .then_some(Suggestion {
                    word: candidate,
                    distance: d,
                })
        })
        .collect();

    candidates.sort_by_key(|s| s.distance);
    candidates.truncate(max);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    #[test]
    fn test_near_misses_ranked_by_distance() {
        let dict = dictionary(&["hello", "help", "world"]);
        let suggestions = rank("helo", &dict, MAX_SUGGESTIONS);

        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert!(words.contains(&"hello"));
        assert!(words.contains(&"help"));
        assert!(!words.contains(&"world")); // distance > 2

        for s in &suggestions {
            assert!((1..=MAX_DISTANCE).contains(&s.distance));
        }
        for pair in suggestions.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_exact_match_never_suggested() {
        let dict = dictionary(&["cat", "cap", "car"]);
        let suggestions = rank("cat", &dict, MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|s| s.word != "cat"));
    }

    #[test]
    fn test_single_close_candidate() {
        let dict = dictionary(&["cat"]);
        let suggestions = rank("bat", &dict, MAX_SUGGESTIONS);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "cat");
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn test_no_candidates_within_band() {
        let dict = dictionary(&["xylophone", "quizzical"]);
        assert!(rank("cat", &dict, MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn test_capped_at_max() {
        let dict = dictionary(&[
            "bat", "cat", "fat", "hat", "mat", "pat", "rat", "sat", "vat",
        ]);
        let suggestions = rank("aat", &dict, MAX_SUGGESTIONS);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_ties_break_on_enumeration_order() {
        // All candidates are distance 1; enumeration is depth-first a-z.
        let dict = dictionary(&["vat", "rat", "bat", "hat"]);
        let suggestions = rank("aat", &dict, MAX_SUGGESTIONS);
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["bat", "hat", "rat", "vat"]);
    }
}
