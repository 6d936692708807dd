use std::sync::Arc;

use crate::modules::search::application::{
    dto::SearchHintsRequest,
    use_cases::{SearchHintsHandler, SearchHintsQuery, SearchHintsResult},
};
use crate::modules::search::domain::{CatalogRepository, UserRepository};
use crate::shared::{application::use_case::Query, config::SearchHintsConfig, errors::AppResult};

/// Application service exposing hint search to callers
pub struct SearchService {
    search_hints: SearchHintsHandler,
}

impl SearchService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        users: Arc<dyn UserRepository>,
        config: SearchHintsConfig,
    ) -> Self {
        Self {
            search_hints: SearchHintsHandler::with_config(catalog, users, config),
        }
    }

    pub fn from_handler(search_hints: SearchHintsHandler) -> Self {
        Self { search_hints }
    }

    pub async fn get_search_hints(&self, query: SearchHintsQuery) -> AppResult<SearchHintsResult> {
        self.search_hints.execute(query).await
    }

    /// Validate a raw request, then search
    pub async fn get_search_hints_for_request(
        &self,
        request: SearchHintsRequest,
    ) -> AppResult<SearchHintsResult> {
        let query = SearchHintsQuery::try_from(request)?;
        self.get_search_hints(query).await
    }
}
