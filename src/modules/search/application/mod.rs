pub mod dto;
pub mod retrieval_strategy;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use dto::SearchHintsRequest;
pub use retrieval_strategy::{
    ArtistNameLookupRetrieval, RetrievalStrategy, RetrievalStrategySelector, ScopedRetrieval,
};
pub use service::SearchService;
pub use use_cases::{SearchHintInfo, SearchHintsHandler, SearchHintsQuery, SearchHintsResult};
