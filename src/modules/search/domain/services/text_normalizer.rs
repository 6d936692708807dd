use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

use crate::modules::search::domain::value_objects::NormalizedTerm;
use crate::shared::errors::{AppError, AppResult};

/// Words dropped from token lists, compared case-insensitively
pub const STOP_WORDS: [&str; 4] = ["the", "a", "of", "an"];

/// Typographic punctuation and its ASCII replacement
pub const PUNCTUATION_SUBSTITUTIONS: [(char, &str); 16] = [
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2015}', "-"),   // horizontal bar
    ('\u{2017}', "_"),   // double low line
    ('\u{2018}', "'"),   // left single quotation mark
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{201A}', "'"),   // single low-9 quotation mark
    ('\u{201B}', "'"),   // single high-reversed-9 quotation mark
    ('\u{201C}', "\""),  // left double quotation mark
    ('\u{201D}', "\""),  // right double quotation mark
    ('\u{201E}', "\""),  // double low-9 quotation mark
    ('\u{2026}', "..."), // horizontal ellipsis
    ('\u{2032}', "'"),   // prime
    ('\u{2033}', "\""),  // double prime
    ('\u{0060}', "'"),   // grave accent
    ('\u{00B4}', "'"),   // acute accent
];

/// Transformation that can be applied to a piece of text
///
/// Each transformation is composable and testable in isolation.
pub trait TextTransformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Trims leading and trailing whitespace
#[derive(Debug, Clone)]
pub struct TrimTransform;

impl TextTransformation for TrimTransform {
    fn transform(&self, text: &str) -> String {
        text.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "Trim"
    }
}

/// Maps accented letters to their base letters
#[derive(Debug, Clone)]
pub struct RemoveDiacriticsTransform;

impl TextTransformation for RemoveDiacriticsTransform {
    fn transform(&self, text: &str) -> String {
        remove_diacritics(text)
    }

    fn name(&self) -> &'static str {
        "RemoveDiacritics"
    }
}

/// Replaces typographic punctuation with ASCII equivalents
#[derive(Debug, Clone)]
pub struct FixPunctuationTransform;

impl TextTransformation for FixPunctuationTransform {
    fn transform(&self, text: &str) -> String {
        fix_punctuation(text)
    }

    fn name(&self) -> &'static str {
        "FixPunctuation"
    }
}

/// Applies a pipeline of transformations to search text
pub struct TextNormalizer {
    transformations: Vec<Box<dyn TextTransformation>>,
}

impl TextNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// Pipeline used for search phrases
    ///
    /// Trims twice: stripping a leading combining mark can expose whitespace.
    pub fn search_phrase_pipeline() -> Self {
        Self::new()
            .with_trim()
            .with_remove_diacritics()
            .with_fix_punctuation()
            .with_trim()
    }

    pub fn with_trim(mut self) -> Self {
        self.transformations.push(Box::new(TrimTransform));
        self
    }

    pub fn with_remove_diacritics(mut self) -> Self {
        self.transformations.push(Box::new(RemoveDiacriticsTransform));
        self
    }

    pub fn with_fix_punctuation(mut self) -> Self {
        self.transformations.push(Box::new(FixPunctuationTransform));
        self
    }

    /// Apply all transformations to the text
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    /// Normalize a raw search phrase and tokenize it
    pub fn normalize(&self, raw: &str) -> AppResult<NormalizedTerm> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search term cannot be empty".to_string(),
            ));
        }

        let phrase = self.apply(raw);
        if phrase.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Search term '{}' is empty after normalization",
                raw
            )));
        }

        let tokens = tokenize(&phrase);
        Ok(NormalizedTerm::new(phrase, tokens))
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::search_phrase_pipeline()
    }
}

/// Normalize a search phrase with the standard pipeline
pub fn normalize(raw: &str) -> AppResult<NormalizedTerm> {
    TextNormalizer::search_phrase_pipeline().normalize(raw)
}

fn non_spacing_marks() -> &'static Regex {
    static MARKS: OnceLock<Regex> = OnceLock::new();
    MARKS.get_or_init(|| Regex::new(r"\p{Mn}+").unwrap())
}

/// Decompose, drop non-spacing marks (Mn), recompose
///
/// Spacing marks (Mc) such as Devanagari vowel signs are letters in their
/// script and stay.
pub fn remove_diacritics(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    let stripped = non_spacing_marks().replace_all(&decomposed, "");
    let recomposed: String = stripped.nfc().collect();
    recomposed
}

pub fn fix_punctuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match PUNCTUATION_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => result.push_str(to),
            None => result.push(c),
        }
    }

    result
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|stop| stop.eq_ignore_ascii_case(word))
}

/// Split on whitespace, dropping stop-words; order is preserved
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Individual transformation tests

    #[test]
    fn test_trim_transform() {
        assert_eq!(TrimTransform.transform("  Inception \t"), "Inception");
    }

    #[test]
    fn test_remove_diacritics() {
        assert_eq!(remove_diacritics("Amélie"), "Amelie");
        assert_eq!(remove_diacritics("Björk Guðmundsdóttir"), "Bjork Guðmundsdottir");
        assert_eq!(remove_diacritics("Pokémon Ñoño"), "Pokemon Nono");
        assert_eq!(remove_diacritics("plain ascii"), "plain ascii");
    }

    #[test]
    fn test_spacing_marks_survive() {
        // Virama (Mn) goes, the vowel signs U+093F and U+0940 (Mc) stay
        let out = remove_diacritics("\u{0939}\u{093F}\u{0928}\u{094D}\u{0926}\u{0940}");
        assert_eq!(out, "\u{0939}\u{093F}\u{0928}\u{0926}\u{0940}");
        assert!(out.contains('\u{093F}'));

        // Tamil vowel sign AA (Mc)
        assert_eq!(remove_diacritics("\u{0BA4}\u{0BBE}"), "\u{0BA4}\u{0BBE}");
    }

    #[test]
    fn test_every_punctuation_substitution_is_applied() {
        for (from, to) in PUNCTUATION_SUBSTITUTIONS {
            let input = format!("a{}b{}", from, from);
            assert_eq!(fix_punctuation(&input), format!("a{}b{}", to, to));
        }
    }

    #[test]
    fn test_punctuation_examples() {
        assert_eq!(fix_punctuation("Don\u{2019}t Look Up"), "Don't Look Up");
        assert_eq!(fix_punctuation("Spider\u{2013}Man"), "Spider-Man");
        assert_eq!(fix_punctuation("\u{201C}Quoted\u{201D}"), "\"Quoted\"");
        assert_eq!(fix_punctuation("Wait\u{2026}"), "Wait...");
    }

    #[test]
    fn test_text_without_listed_characters_is_unchanged() {
        let input = "Spider-Man: Into the Spider-Verse (2018) 'quoted'";
        assert_eq!(fix_punctuation(input), input);
    }

    // Tokenizer tests

    #[test]
    fn test_tokenize_drops_stop_words_case_insensitively() {
        assert_eq!(tokenize("The Lord of the Rings"), vec!["Lord", "Rings"]);
        assert_eq!(tokenize("A Bug's Life"), vec!["Bug's", "Life"]);
        assert_eq!(tokenize("AN Education"), vec!["Education"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  dark \t\n knight  "), vec!["dark", "knight"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_only_stop_words() {
        assert!(tokenize("the a of an").is_empty());
    }

    // Pipeline tests

    #[test]
    fn test_empty_pipeline() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.apply(" Amélie "), " Amélie ");
        assert_eq!(normalizer.transformation_count(), 0);
    }

    #[test]
    fn test_normalize_keeps_stop_words_in_phrase() {
        let term = normalize("  The Dark Knight ").unwrap();
        assert_eq!(term.phrase, "The Dark Knight");
        assert_eq!(term.tokens, vec!["Dark", "Knight"]);
    }

    #[test]
    fn test_normalize_strips_accents_and_punctuation() {
        let term = normalize("Amélie\u{2019}s  Café").unwrap();
        assert_eq!(term.phrase, "Amelie's  Cafe");
        assert_eq!(term.tokens, vec!["Amelie's", "Cafe"]);
    }

    #[test]
    fn test_normalize_rejects_blank_input() {
        assert!(matches!(normalize(""), Err(AppError::InvalidInput(_))));
        assert!(matches!(normalize(" \t\n"), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_normalize_rejects_phrase_of_only_combining_marks() {
        assert!(matches!(
            normalize("\u{0301}\u{0300}"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "The Dark Knight",
            "  Amélie\u{2026} ",
            "\u{0301} leading mark",
            "L\u{00E9}on: The Professional",
            "\u{201E}Das Boot\u{201C}",
        ];

        for input in inputs {
            let once = normalize(input).unwrap();
            let twice = normalize(&once.phrase).unwrap();
            assert_eq!(once, twice, "normalization of {:?} is not idempotent", input);
        }
    }

    #[test]
    fn test_non_stop_word_guarantees_tokens() {
        let term = normalize("the of Matrix").unwrap();
        assert_eq!(term.tokens, vec!["Matrix"]);
    }
}
