use serde::{Deserialize, Serialize};

use crate::modules::search::domain::CatalogItem;
use crate::shared::application::pagination::QueryResult;

/// One ranked hint: the catalog entry and the text that matched it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHintInfo {
    pub item: CatalogItem,
    pub matched_term: Option<String>,
}

/// Result of a hint search (uses QueryResult from shared)
pub type SearchHintsResult = QueryResult<SearchHintInfo>;
