pub mod match_scorer;
pub mod text_normalizer;
pub mod type_filter;

pub use match_scorer::MatchScorer;
pub use text_normalizer::{normalize, tokenize, TextNormalizer, TextTransformation};
pub use type_filter::{TypeFilter, TypeGroup, TypeToggles};
