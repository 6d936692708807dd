pub mod search_hints;

pub use search_hints::{SearchHintInfo, SearchHintsHandler, SearchHintsQuery, SearchHintsResult};
