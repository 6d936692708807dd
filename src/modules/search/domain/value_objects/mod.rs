pub mod content_filters;
pub mod entity_kind;
pub mod match_result;
pub mod media_type;
pub mod normalized_term;

pub use content_filters::{ContentFlags, ContentKindFilters};
pub use entity_kind::EntityKind;
pub use match_result::MatchResult;
pub use media_type::MediaType;
pub use normalized_term::NormalizedTerm;
