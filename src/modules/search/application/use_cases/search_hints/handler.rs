use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::search::application::retrieval_strategy::RetrievalStrategySelector;
use crate::modules::search::domain::{
    CatalogItem, CatalogItemsFilter, CatalogRepository, MatchResult, MatchScorer,
    NormalizedTerm, TextNormalizer, TypeFilter, User, UserRepository,
};
use crate::shared::{
    application::{pagination::QueryResult, use_case::Query},
    config::SearchHintsConfig,
    errors::{AppError, AppResult},
    utils::logger::{LogContext, TimedOperation},
};

use super::{
    query::SearchHintsQuery,
    result::{SearchHintInfo, SearchHintsResult},
};

/// Query handler ranking catalog entries against a typed phrase
pub struct SearchHintsHandler {
    catalog: Arc<dyn CatalogRepository>,
    users: Arc<dyn UserRepository>,
    strategies: RetrievalStrategySelector,
    normalizer: TextNormalizer,
    scorer: MatchScorer,
    config: SearchHintsConfig,
}

impl SearchHintsHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self::with_config(catalog, users, SearchHintsConfig::default())
    }

    pub fn with_config(
        catalog: Arc<dyn CatalogRepository>,
        users: Arc<dyn UserRepository>,
        config: SearchHintsConfig,
    ) -> Self {
        Self {
            catalog,
            users,
            strategies: RetrievalStrategySelector::default_strategies(),
            normalizer: TextNormalizer::search_phrase_pipeline(),
            scorer: MatchScorer::new(),
            config,
        }
    }

    pub fn with_strategies(mut self, strategies: RetrievalStrategySelector) -> Self {
        self.strategies = strategies;
        self
    }

    /// Unknown ids mean an unscoped search; collaborator failures propagate
    async fn resolve_user(&self, user_id: Option<Uuid>) -> AppResult<Option<User>> {
        let Some(id) = user_id else {
            return Ok(None);
        };

        match self.users.find_by_id(id).await {
            Ok(Some(user)) => Ok(Some(user)),
            Ok(None) | Err(AppError::NotFound(_)) => {
                log::debug!("User {} not found, searching without user scope", id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn build_catalog_filter(
        &self,
        query: &SearchHintsQuery,
        term: &NormalizedTerm,
        user: Option<User>,
    ) -> CatalogItemsFilter {
        let types = TypeFilter::build(
            &query.toggles,
            &query.include_item_types,
            &query.exclude_item_types,
            &query.media_types,
        );

        let mut filter = CatalogItemsFilter::new(term.phrase.clone());
        filter.user = user;
        filter.include_kinds = types.include_kinds;
        filter.exclude_kinds = types.exclude_kinds;
        filter.media_types = types.media_types;
        filter.parent_id = query.parent_id;
        filter.include_items_by_name = query.parent_id.is_none();
        filter.content = query.content;

        if self.config.forward_limit_to_catalog {
            filter.limit = query.page.capped(self.config.max_limit).limit;
        }

        filter
    }

    /// Score every candidate and order by (tier, sort name)
    pub fn rank(
        &self,
        items: Vec<CatalogItem>,
        term: &NormalizedTerm,
    ) -> AppResult<Vec<SearchHintInfo>> {
        let mut scored = items
            .into_iter()
            .map(|item| -> AppResult<(CatalogItem, MatchResult)> {
                let result = self.scorer.score_term(&item.name, term)?;
                Ok((item, result))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let misses = scored.iter().filter(|(_, result)| !result.is_match()).count();
        if misses > 0 {
            log::debug!(
                "{} candidates for '{}' did not match by name, ranking them last",
                misses,
                term.phrase
            );
        }

        scored.sort_by(|(a_item, a_result), (b_item, b_result)| {
            a_result
                .rank_key()
                .cmp(&b_result.rank_key())
                .then_with(|| a_item.sort_name.cmp(&b_item.sort_name))
        });

        Ok(scored
            .into_iter()
            .map(|(item, result)| SearchHintInfo {
                item,
                matched_term: result.into_term(),
            })
            .collect())
    }
}

#[async_trait]
impl Query<SearchHintsQuery, SearchHintsResult> for SearchHintsHandler {
    async fn execute(&self, query: SearchHintsQuery) -> AppResult<SearchHintsResult> {
        let timer = TimedOperation::new("search hints");

        // Reject blank phrases before touching any collaborator
        let term = self.normalizer.normalize(&query.search_term)?;
        LogContext::search_operation(&term.phrase, None, None);

        let user = self.resolve_user(query.user_id).await?;
        let filter = self.build_catalog_filter(&query, &term, user);

        let strategy = self.strategies.select(&filter);
        let items = strategy
            .retrieve(self.catalog.as_ref(), filter)
            .await
            .map_err(|e| {
                if e.is_collaborator_failure() {
                    log::warn!("Catalog lookup via {} failed: {}", strategy.name(), e);
                }
                e
            })?;
        LogContext::search_operation(&term.phrase, Some(strategy.name()), Some(items.len()));

        let hints = self.rank(items, &term)?;
        let page = query.page.capped(self.config.max_limit);
        let result = QueryResult::paginate(hints, &page);

        LogContext::search_operation(&term.phrase, None, Some(result.total_record_count));
        timer.finish_with_info(&format!(
            "{} of {} hints",
            result.items.len(),
            result.total_record_count
        ));

        Ok(result)
    }
}
