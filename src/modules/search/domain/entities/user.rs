use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CatalogItem;

/// Account a search is executed for
///
/// `library_ids` lists the top-level folders the account can see; an empty
/// list means the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub library_ids: Vec<Uuid>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            library_ids: Vec::new(),
        }
    }

    pub fn with_library(mut self, library: Uuid) -> Self {
        self.library_ids.push(library);
        self
    }

    /// Name-lookup entries (people, genres, ...) live outside libraries and stay visible
    pub fn can_see(&self, item: &CatalogItem) -> bool {
        self.library_ids.is_empty()
            || item.kind.is_name_lookup()
            || self.library_ids.iter().any(|id| item.is_descendant_of(*id))
    }
}
