use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

pub struct Validator;

impl Validator {
    pub fn validate_search_term(term: &str) -> AppResult<()> {
        if term.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search term cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse an identifier that may be absent or blank
    ///
    /// Transport layers send empty strings for "not set"; those map to `None`.
    pub fn parse_optional_id(raw: Option<&str>) -> AppResult<Option<Uuid>> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Ok(Some(Uuid::parse_str(value)?)),
        }
    }
}
