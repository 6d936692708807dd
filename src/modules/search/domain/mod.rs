pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{CatalogItem, User};
pub use repositories::{CatalogItemsFilter, CatalogRepository, UserRepository};
pub use services::{MatchScorer, TextNormalizer, TypeFilter, TypeGroup, TypeToggles};
pub use value_objects::{
    ContentFlags, ContentKindFilters, EntityKind, MatchResult, MediaType, NormalizedTerm,
};
