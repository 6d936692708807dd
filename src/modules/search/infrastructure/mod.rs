pub mod catalog_file;
pub mod in_memory_catalog;
pub mod in_memory_users;

pub use catalog_file::CatalogSnapshot;
pub use in_memory_catalog::InMemoryCatalogRepository;
pub use in_memory_users::InMemoryUserRepository;
