use crate::modules::search::domain::services::text_normalizer::{remove_diacritics, tokenize};
use crate::modules::search::domain::value_objects::{MatchResult, NormalizedTerm};
use crate::shared::errors::{AppError, AppResult};

/// Whole name equals the phrase
pub const TIER_EXACT: usize = 0;
/// Name starts with the phrase
pub const TIER_PREFIX: usize = 1;
/// Phrase appears later in the name
pub const TIER_CONTAINS: usize = 2;

const WORD_EQUALS_BASE: usize = 3;
const WORD_PREFIX_BASE: usize = 4;
const WORD_CONTAINS_BASE: usize = 5;

/// Assigns relevance tiers to catalog names
///
/// Phrase-level checks run first; word-level checks scale with the
/// positions of the matching words: `base + (i + 1) * (j + 1)` where `i`
/// indexes the phrase word and `j` the name word.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score_term(&self, name: &str, term: &NormalizedTerm) -> AppResult<MatchResult> {
        self.score(name, &term.phrase, &term.tokens)
    }

    /// Score `name` against an already normalized phrase and its words
    pub fn score(
        &self,
        name: &str,
        phrase: &str,
        phrase_tokens: &[String],
    ) -> AppResult<MatchResult> {
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "Candidate name cannot be empty".to_string(),
            ));
        }

        let name = remove_diacritics(name);
        let name_lower = name.to_lowercase();
        let phrase_lower = phrase.to_lowercase();

        if name_lower == phrase_lower {
            return Ok(MatchResult::matched(phrase, TIER_EXACT));
        }

        match name_lower.find(&phrase_lower) {
            Some(0) => return Ok(MatchResult::matched(phrase, TIER_PREFIX)),
            Some(_) => return Ok(MatchResult::matched(phrase, TIER_CONTAINS)),
            None => {}
        }

        let name_tokens: Vec<String> = tokenize(&name)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();

        for (i, search_word) in phrase_tokens.iter().enumerate() {
            let search_lower = search_word.to_lowercase();

            for (j, name_word) in name_tokens.iter().enumerate() {
                let weight = (i + 1) * (j + 1);

                let base = if *name_word == search_lower {
                    Some(WORD_EQUALS_BASE)
                } else {
                    match name_word.find(&search_lower) {
                        Some(0) => Some(WORD_PREFIX_BASE),
                        Some(_) => Some(WORD_CONTAINS_BASE),
                        None => None,
                    }
                };

                if let Some(base) = base {
                    return Ok(MatchResult::matched(search_word.as_str(), base + weight));
                }
            }
        }

        Ok(MatchResult::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::services::text_normalizer::normalize;

    fn score(name: &str, phrase: &str) -> MatchResult {
        let term = normalize(phrase).unwrap();
        MatchScorer::new().score_term(name, &term).unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_match_is_tier_zero() {
        assert_eq!(score("Inception", "Inception"), MatchResult::matched("Inception", 0));
        assert_eq!(score("INCEPTION", "inception"), MatchResult::matched("inception", 0));
    }

    #[test]
    fn test_prefix_match_is_tier_one() {
        assert_eq!(score("Inception 2", "Inception"), MatchResult::matched("Inception", 1));
    }

    #[test]
    fn test_inner_match_is_tier_two() {
        assert_eq!(score("The Inception", "Inception"), MatchResult::matched("Inception", 2));
    }

    #[test]
    fn test_diacritics_in_name_are_ignored() {
        assert_eq!(score("Amélie", "amelie"), MatchResult::matched("amelie", 0));
        assert_eq!(score("Léon: The Professional", "Leon"), MatchResult::matched("Leon", 1));
    }

    #[test]
    fn test_word_equality_path() {
        // Phrase-level: "Break Day" does not occur in "Day Break"
        let result = MatchScorer::new()
            .score("Day Break", "Break Day", &words(&["Break", "Day"]))
            .unwrap();

        // i = 0 ("Break"), j = 1 ("Break") -> 3 + 1 * 2
        assert_eq!(result, MatchResult::matched("Break", 5));
    }

    #[test]
    fn test_single_word_inside_name_is_phrase_level() {
        // "break" occurs in "day break", so the word loop is never reached
        assert_eq!(score("Day Break", "Break"), MatchResult::matched("Break", TIER_CONTAINS));
        assert_eq!(score("Day Break", "Break").tier(), Some(2));
    }

    #[test]
    fn test_word_prefix_path() {
        let result = MatchScorer::new()
            .score("Breaking Bad", "bre zzz", &words(&["bre", "zzz"]))
            .unwrap();

        // "bre zzz" is not a substring; "Breaking" starts with "bre" at j = 0
        assert_eq!(result, MatchResult::matched("bre", 5));
    }

    #[test]
    fn test_word_contains_path() {
        let result = MatchScorer::new()
            .score("Unbreakable Kimmy", "reak zzz", &words(&["reak", "zzz"]))
            .unwrap();

        assert_eq!(result, MatchResult::matched("reak", 6));
    }

    #[test]
    fn test_equality_checked_before_prefix_for_same_pair() {
        let result = MatchScorer::new()
            .score("Alien Aliens", "aliens x", &words(&["aliens", "x"]))
            .unwrap();

        // j = 0 "alien" does not start with "aliens"; j = 1 is equal
        assert_eq!(result, MatchResult::matched("aliens", 5));
    }

    #[test]
    fn test_first_pair_in_scan_order_wins() {
        // Outer loop over phrase words: "knight" (i = 0) is tried against
        // every name word before "dark" (i = 1) is considered.
        let result = MatchScorer::new()
            .score("Dark Night Knight", "knight dark", &words(&["knight", "dark"]))
            .unwrap();

        // "knight" matches at j = 2 -> 3 + 1 * 3
        assert_eq!(result, MatchResult::matched("knight", 6));
    }

    #[test]
    fn test_name_stop_words_are_skipped_when_indexing() {
        let result = MatchScorer::new()
            .score("The Break", "break day", &words(&["break", "day"]))
            .unwrap();

        // "The" is dropped, so "Break" sits at j = 0
        assert_eq!(result, MatchResult::matched("break", 4));
    }

    #[test]
    fn test_no_match() {
        let result = MatchScorer::new()
            .score("Heat", "dark knight", &words(&["dark", "knight"]))
            .unwrap();
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = MatchScorer::new().score("", "x", &words(&["x"]));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_word_path_tier_is_at_least_four() {
        let result = MatchScorer::new()
            .score("Day Break", "Break Night", &words(&["Break", "Night"]))
            .unwrap();
        assert!(result.tier().unwrap() >= 4);
    }
}
