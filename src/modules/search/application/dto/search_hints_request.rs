use serde::{Deserialize, Serialize};

use crate::modules::search::application::use_cases::SearchHintsQuery;
use crate::modules::search::domain::{ContentKindFilters, EntityKind, MediaType, TypeToggles};
use crate::shared::{
    application::pagination::PageRequest,
    errors::{AppError, AppResult},
    utils::Validator,
};

/// Search request as it arrives from a transport layer
///
/// Identifiers and type names are plain strings here; converting into a
/// `SearchHintsQuery` validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHintsRequest {
    pub search_term: String,
    pub user_id: Option<String>,
    pub parent_id: Option<String>,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
    pub include_genres: bool,
    pub include_people: bool,
    pub include_studios: bool,
    pub include_artists: bool,
    pub include_media: bool,
    pub include_item_types: Vec<String>,
    pub exclude_item_types: Vec<String>,
    pub media_types: Vec<String>,
    pub is_kids: Option<bool>,
    pub is_movie: Option<bool>,
    pub is_news: Option<bool>,
    pub is_series: Option<bool>,
    pub is_sports: Option<bool>,
}

impl SearchHintsRequest {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Default::default()
        }
    }
}

fn parse_all<T>(labels: &[String]) -> AppResult<Vec<T>>
where
    T: std::str::FromStr<Err = AppError>,
{
    labels
        .iter()
        .filter(|label| !label.trim().is_empty())
        .map(|label| label.parse::<T>())
        .collect()
}

impl TryFrom<SearchHintsRequest> for SearchHintsQuery {
    type Error = AppError;

    fn try_from(request: SearchHintsRequest) -> Result<Self, Self::Error> {
        Validator::validate_search_term(&request.search_term)?;

        Ok(SearchHintsQuery {
            user_id: Validator::parse_optional_id(request.user_id.as_deref())?,
            parent_id: Validator::parse_optional_id(request.parent_id.as_deref())?,
            page: PageRequest::new(request.start_index, request.limit),
            toggles: TypeToggles {
                include_genres: request.include_genres,
                include_people: request.include_people,
                include_studios: request.include_studios,
                include_artists: request.include_artists,
                include_media: request.include_media,
            },
            include_item_types: parse_all::<EntityKind>(&request.include_item_types)?,
            exclude_item_types: parse_all::<EntityKind>(&request.exclude_item_types)?,
            media_types: parse_all::<MediaType>(&request.media_types)?,
            content: ContentKindFilters {
                is_kids: request.is_kids,
                is_movie: request.is_movie,
                is_news: request.is_news,
                is_series: request.is_series,
                is_sports: request.is_sports,
            },
            search_term: request.search_term,
        })
    }
}
