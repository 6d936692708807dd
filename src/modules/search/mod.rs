pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{
    SearchHintInfo, SearchHintsHandler, SearchHintsQuery, SearchHintsRequest, SearchHintsResult,
    SearchService,
};
pub use domain::{
    CatalogItem, CatalogItemsFilter, CatalogRepository, EntityKind, MatchResult, MediaType,
    TypeToggles, User, UserRepository,
};
pub use infrastructure::{CatalogSnapshot, InMemoryCatalogRepository, InMemoryUserRepository};
