/// Pagination support for queries
///
/// Offset-based model: skip `start_index` items, then take `limit`.
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}

impl PageRequest {
    pub fn new(start_index: Option<usize>, limit: Option<usize>) -> Self {
        Self { start_index, limit }
    }

    /// Clamp the requested limit to `max`, filling it in when absent
    pub fn capped(self, max: Option<usize>) -> Self {
        match max {
            Some(max) => Self {
                start_index: self.start_index,
                limit: Some(self.limit.map_or(max, |limit| limit.min(max))),
            },
            None => self,
        }
    }

    /// Skip then take, in that order
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = self.start_index.unwrap_or(0);
        let take = self.limit.unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take).collect()
    }
}

/// Page of results together with the count before pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub total_record_count: usize,
}

impl<T> QueryResult<T> {
    /// Paginate `items`, recording the full count first
    pub fn paginate(items: Vec<T>, page: &PageRequest) -> Self {
        let total_record_count = items.len();
        Self {
            items: page.apply(items),
            total_record_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_then_take() {
        let page = PageRequest::new(Some(2), Some(3));
        let result = QueryResult::paginate((0..10).collect::<Vec<_>>(), &page);

        assert_eq!(result.items, vec![2, 3, 4]);
        assert_eq!(result.total_record_count, 10);
    }

    #[test]
    fn test_start_index_past_end_yields_empty_page() {
        let page = PageRequest::new(Some(20), Some(5));
        let result = QueryResult::paginate(vec!['a', 'b'], &page);

        assert!(result.items.is_empty());
        assert_eq!(result.total_record_count, 2);
    }

    #[test]
    fn test_capped_limit() {
        assert_eq!(PageRequest::new(None, Some(50)).capped(Some(20)).limit, Some(20));
        assert_eq!(PageRequest::new(None, Some(5)).capped(Some(20)).limit, Some(5));
        assert_eq!(PageRequest::new(Some(1), None).capped(Some(20)).limit, Some(20));
        assert_eq!(PageRequest::new(Some(1), None).capped(None).limit, None);
    }
}
