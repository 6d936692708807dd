pub mod catalog_item;
pub mod user;

pub use catalog_item::CatalogItem;
pub use user::User;
