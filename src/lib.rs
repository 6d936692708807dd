pub mod modules;
pub mod shared;

pub use modules::search::{
    CatalogItem, CatalogRepository, CatalogSnapshot, EntityKind, InMemoryCatalogRepository,
    InMemoryUserRepository, MatchResult, MediaType, SearchHintInfo, SearchHintsQuery,
    SearchHintsRequest, SearchHintsResult, SearchService, User, UserRepository,
};
pub use shared::{AppError, AppResult, SearchHintsConfig};
