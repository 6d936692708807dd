use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::search::domain::value_objects::{ContentFlags, EntityKind, MediaType};

/// Catalog entry as returned by the catalog store
///
/// Identity and hierarchy belong to the store; ranking only reads `name`
/// and `sort_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub sort_name: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub ancestor_ids: Vec<Uuid>,
    #[serde(default)]
    pub content: ContentFlags,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

impl CatalogItem {
    /// New entry with a sort name derived from the display name
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            sort_name: name.to_lowercase(),
            name,
            kind,
            media_type: None,
            parent_id: None,
            ancestor_ids: Vec::new(),
            content: ContentFlags::default(),
            date_created: None,
        }
    }

    pub fn with_sort_name(mut self, sort_name: impl Into<String>) -> Self {
        self.sort_name = sort_name.into();
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Place the entry under `parent`, which also becomes its nearest ancestor
    pub fn with_parent(mut self, parent: Uuid) -> Self {
        self.parent_id = Some(parent);
        if !self.ancestor_ids.contains(&parent) {
            self.ancestor_ids.push(parent);
        }
        self
    }

    pub fn with_ancestor(mut self, ancestor: Uuid) -> Self {
        if !self.ancestor_ids.contains(&ancestor) {
            self.ancestor_ids.push(ancestor);
        }
        self
    }

    pub fn with_content(mut self, content: ContentFlags) -> Self {
        self.content = content;
        self
    }

    pub fn is_descendant_of(&self, id: Uuid) -> bool {
        self.parent_id == Some(id) || self.ancestor_ids.contains(&id)
    }
}
