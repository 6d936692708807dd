use uuid::Uuid;

use crate::modules::search::domain::{ContentKindFilters, EntityKind, MediaType, TypeToggles};
use crate::shared::application::pagination::PageRequest;

/// Query for type-to-search hints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHintsQuery {
    pub search_term: String,
    pub user_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub page: PageRequest,
    pub toggles: TypeToggles,
    pub include_item_types: Vec<EntityKind>,
    pub exclude_item_types: Vec<EntityKind>,
    pub media_types: Vec<MediaType>,
    pub content: ContentKindFilters,
}

impl SearchHintsQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_page(mut self, start_index: Option<usize>, limit: Option<usize>) -> Self {
        self.page = PageRequest::new(start_index, limit);
        self
    }

    pub fn with_toggles(mut self, toggles: TypeToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_include_types(mut self, kinds: Vec<EntityKind>) -> Self {
        self.include_item_types = kinds;
        self
    }

    pub fn with_exclude_types(mut self, kinds: Vec<EntityKind>) -> Self {
        self.exclude_item_types = kinds;
        self
    }

    pub fn with_media_types(mut self, media_types: Vec<MediaType>) -> Self {
        self.media_types = media_types;
        self
    }

    pub fn with_content(mut self, content: ContentKindFilters) -> Self {
        self.content = content;
        self
    }
}
