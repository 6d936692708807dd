use async_trait::async_trait;

use crate::modules::search::domain::{
    CatalogItem, CatalogItemsFilter, CatalogRepository, EntityKind,
};
use crate::shared::errors::AppResult;

/// Strategy for fetching candidates from the catalog
///
/// Chosen from the shape of the composed filter so the ranking loop never
/// needs to know which entity kinds need special retrieval.
#[async_trait]
pub trait RetrievalStrategy: Send + Sync {
    /// Whether this strategy should serve `filter`
    fn applies_to(&self, filter: &CatalogItemsFilter) -> bool;

    /// Fetch candidates, adjusting the filter first if the strategy needs to
    async fn retrieve(
        &self,
        catalog: &dyn CatalogRepository,
        filter: CatalogItemsFilter,
    ) -> AppResult<Vec<CatalogItem>>;

    /// Get the name of this strategy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Plain retrieval of entries under the requested scope
#[derive(Debug, Clone)]
pub struct ScopedRetrieval;

#[async_trait]
impl RetrievalStrategy for ScopedRetrieval {
    fn applies_to(&self, _filter: &CatalogItemsFilter) -> bool {
        true
    }

    async fn retrieve(
        &self,
        catalog: &dyn CatalogRepository,
        filter: CatalogItemsFilter,
    ) -> AppResult<Vec<CatalogItem>> {
        catalog.find_items(&filter).await
    }

    fn name(&self) -> &'static str {
        "Scoped"
    }
}

/// Artist-only searches go through name lookup
///
/// Artists are not children of a folder, so the parent scope becomes an
/// ancestor constraint and the kind restriction is dropped in favour of the
/// dedicated artist lookup.
#[derive(Debug, Clone)]
pub struct ArtistNameLookupRetrieval;

impl ArtistNameLookupRetrieval {
    pub fn rewrite(mut filter: CatalogItemsFilter) -> CatalogItemsFilter {
        if let Some(parent) = filter.parent_id.take() {
            filter.ancestor_ids = vec![parent];
        }
        filter.include_items_by_name = true;
        filter.include_kinds.clear();
        filter
    }
}

#[async_trait]
impl RetrievalStrategy for ArtistNameLookupRetrieval {
    fn applies_to(&self, filter: &CatalogItemsFilter) -> bool {
        filter.include_kinds.as_slice() == [EntityKind::MusicArtist]
    }

    async fn retrieve(
        &self,
        catalog: &dyn CatalogRepository,
        filter: CatalogItemsFilter,
    ) -> AppResult<Vec<CatalogItem>> {
        catalog.find_artists(&Self::rewrite(filter)).await
    }

    fn name(&self) -> &'static str {
        "ArtistNameLookup"
    }
}

/// Ordered list of strategies; the first one that applies wins
pub struct RetrievalStrategySelector {
    strategies: Vec<Box<dyn RetrievalStrategy>>,
    fallback: Box<dyn RetrievalStrategy>,
}

impl RetrievalStrategySelector {
    /// Selector with no special cases; everything is scoped retrieval
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            fallback: Box::new(ScopedRetrieval),
        }
    }

    /// Artist lookup first, scoped retrieval otherwise
    pub fn default_strategies() -> Self {
        Self::new().with_strategy(Box::new(ArtistNameLookupRetrieval))
    }

    pub fn with_strategy(mut self, strategy: Box<dyn RetrievalStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn select(&self, filter: &CatalogItemsFilter) -> &dyn RetrievalStrategy {
        match self
            .strategies
            .iter()
            .find(|strategy| strategy.applies_to(filter))
        {
            Some(strategy) => strategy.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

impl Default for RetrievalStrategySelector {
    fn default() -> Self {
        Self::default_strategies()
    }
}
