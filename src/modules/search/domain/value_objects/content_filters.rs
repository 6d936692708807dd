use serde::{Deserialize, Serialize};

/// Tri-state content flags passed straight through to the catalog
///
/// `None` means "don't care"; `Some(false)` asks the catalog to exclude the kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentKindFilters {
    pub is_kids: Option<bool>,
    pub is_movie: Option<bool>,
    pub is_news: Option<bool>,
    pub is_series: Option<bool>,
    pub is_sports: Option<bool>,
}

impl ContentKindFilters {
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }
}

/// Content flags carried by a catalog entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFlags {
    #[serde(default)]
    pub kids: bool,
    #[serde(default)]
    pub movie: bool,
    #[serde(default)]
    pub news: bool,
    #[serde(default)]
    pub series: bool,
    #[serde(default)]
    pub sports: bool,
}

impl ContentFlags {
    /// Every requested flag must agree with the entry's flag
    pub fn satisfies(&self, filters: &ContentKindFilters) -> bool {
        let checks = [
            (filters.is_kids, self.kids),
            (filters.is_movie, self.movie),
            (filters.is_news, self.news),
            (filters.is_series, self.series),
            (filters.is_sports, self.sports),
        ];

        checks
            .iter()
            .all(|(wanted, actual)| wanted.map_or(true, |w| w == *actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_filters_accept_everything() {
        let filters = ContentKindFilters::default();
        assert!(filters.is_unrestricted());
        assert!(ContentFlags::default().satisfies(&filters));
        assert!(ContentFlags { news: true, ..Default::default() }.satisfies(&filters));
    }

    #[test]
    fn test_requested_flags_must_match() {
        let filters = ContentKindFilters {
            is_kids: Some(true),
            is_news: Some(false),
            ..Default::default()
        };

        assert!(ContentFlags { kids: true, ..Default::default() }.satisfies(&filters));
        assert!(!ContentFlags::default().satisfies(&filters));
        assert!(!ContentFlags { kids: true, news: true, ..Default::default() }.satisfies(&filters));
    }
}
