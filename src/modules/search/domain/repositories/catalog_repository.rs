use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::search::domain::{
    entities::{CatalogItem, User},
    value_objects::{ContentKindFilters, EntityKind, MediaType},
};
use crate::shared::errors::AppResult;

/// Extra fields the catalog should hydrate on returned entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    AirTime,
    DateCreated,
    ChannelInfo,
    ParentId,
}

/// Fields requested for every search hint lookup
pub const SEARCH_HINT_FIELDS: [ItemField; 4] = [
    ItemField::AirTime,
    ItemField::DateCreated,
    ItemField::ChannelInfo,
    ItemField::ParentId,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    SortName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Filter handed to the catalog store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemsFilter {
    pub user: Option<User>,
    /// Case-insensitive substring the entry name must contain
    pub name_contains: String,
    pub include_kinds: Vec<EntityKind>,
    pub exclude_kinds: Vec<EntityKind>,
    pub media_types: Vec<MediaType>,
    /// Direct parent scope; `None` searches the whole library
    pub parent_id: Option<Uuid>,
    /// Entries must descend from every listed id
    pub ancestor_ids: Vec<Uuid>,
    /// Include name-lookup entries (people, genres, ...) that have no parent
    pub include_items_by_name: bool,
    pub recursive: bool,
    pub order_by: Vec<(SortBy, SortOrder)>,
    pub content: ContentKindFilters,
    /// Optional cap on the number of entries returned
    pub limit: Option<usize>,
    pub fields: Vec<ItemField>,
}

impl CatalogItemsFilter {
    pub fn new(name_contains: impl Into<String>) -> Self {
        Self {
            user: None,
            name_contains: name_contains.into(),
            include_kinds: Vec::new(),
            exclude_kinds: Vec::new(),
            media_types: Vec::new(),
            parent_id: None,
            ancestor_ids: Vec::new(),
            include_items_by_name: true,
            recursive: true,
            order_by: vec![(SortBy::SortName, SortOrder::Ascending)],
            content: ContentKindFilters::default(),
            limit: None,
            fields: SEARCH_HINT_FIELDS.to_vec(),
        }
    }
}

/// Port (interface) for the catalog store
/// The store applies every predicate in the filter; callers do not re-filter.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Entries scoped under a parent (or the whole library)
    async fn find_items(&self, filter: &CatalogItemsFilter) -> AppResult<Vec<CatalogItem>>;

    /// Artists addressed by name across the library
    async fn find_artists(&self, filter: &CatalogItemsFilter) -> AppResult<Vec<CatalogItem>>;
}
