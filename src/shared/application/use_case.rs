use crate::shared::errors::AppResult;
/// Base trait for query handlers following the CQRS pattern
///
/// # Example
///
/// ```ignore
/// struct SearchHintsHandler {
///     catalog: Arc<dyn CatalogRepository>,
/// }
///
/// #[async_trait]
/// impl Query<SearchHintsQuery, SearchHintsResult> for SearchHintsHandler {
///     async fn execute(&self, query: SearchHintsQuery) -> AppResult<SearchHintsResult> {
///         // Query logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
