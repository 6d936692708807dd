pub mod catalog_repository;
pub mod user_repository;

pub use catalog_repository::{
    CatalogItemsFilter, CatalogRepository, ItemField, SortBy, SortOrder, SEARCH_HINT_FIELDS,
};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
