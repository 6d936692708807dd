use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::search::domain::repositories::catalog_repository::SortOrder;
use crate::modules::search::domain::services::text_normalizer::remove_diacritics;
use crate::modules::search::domain::{
    CatalogItem, CatalogItemsFilter, CatalogRepository, EntityKind,
};
use crate::shared::errors::AppResult;

/// Catalog store held entirely in memory
///
/// Applies every predicate of `CatalogItemsFilter`; used by the command line
/// front end and by integration tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    items: Arc<RwLock<Vec<CatalogItem>>>,
}

impl InMemoryCatalogRepository {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub async fn insert(&self, item: CatalogItem) {
        self.items.write().await.push(item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    async fn query(
        &self,
        filter: &CatalogItemsFilter,
        predicate: impl Fn(&CatalogItem) -> bool,
    ) -> Vec<CatalogItem> {
        let needle = fold(&filter.name_contains);

        let mut matches: Vec<CatalogItem> = self
            .items
            .read()
            .await
            .iter()
            .filter(|item| predicate(item) && matches_filter(item, filter, &needle))
            .cloned()
            .collect();

        for (_, order) in filter.order_by.iter().rev() {
            match order {
                SortOrder::Ascending => matches.sort_by(|a, b| a.sort_name.cmp(&b.sort_name)),
                SortOrder::Descending => matches.sort_by(|a, b| b.sort_name.cmp(&a.sort_name)),
            }
        }

        if let Some(limit) = filter.limit {
            matches.truncate(limit);
        }

        matches
    }
}

/// Case- and accent-insensitive form used for name matching
fn fold(text: &str) -> String {
    remove_diacritics(text).to_lowercase()
}

fn matches_filter(item: &CatalogItem, filter: &CatalogItemsFilter, needle: &str) -> bool {
    if !needle.is_empty() && !fold(&item.name).contains(needle) {
        return false;
    }

    if !filter.include_kinds.is_empty() && !filter.include_kinds.contains(&item.kind) {
        return false;
    }

    if filter.exclude_kinds.contains(&item.kind) {
        return false;
    }

    if !filter.media_types.is_empty()
        && !item
            .media_type
            .is_some_and(|media| filter.media_types.contains(&media))
    {
        return false;
    }

    if let Some(parent) = filter.parent_id {
        let in_scope = if filter.recursive {
            item.is_descendant_of(parent)
        } else {
            item.parent_id == Some(parent)
        };
        if !in_scope {
            return false;
        }
    }

    if !filter
        .ancestor_ids
        .iter()
        .all(|ancestor| item.is_descendant_of(*ancestor))
    {
        return false;
    }

    if !filter.include_items_by_name && item.kind.is_name_lookup() {
        return false;
    }

    if !filter.content.is_unrestricted() && !item.content.satisfies(&filter.content) {
        return false;
    }

    filter.user.as_ref().map_or(true, |user| user.can_see(item))
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn find_items(&self, filter: &CatalogItemsFilter) -> AppResult<Vec<CatalogItem>> {
        let items = self.query(filter, |_| true).await;
        debug!(
            "Catalog lookup '{}' matched {} entries",
            filter.name_contains,
            items.len()
        );
        Ok(items)
    }

    async fn find_artists(&self, filter: &CatalogItemsFilter) -> AppResult<Vec<CatalogItem>> {
        let items = self
            .query(filter, |item| item.kind == EntityKind::MusicArtist)
            .await;
        debug!(
            "Artist lookup '{}' matched {} entries",
            filter.name_contains,
            items.len()
        );
        Ok(items)
    }
}
