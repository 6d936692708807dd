/// Shared application layer patterns
///
/// Abstractions used by every bounded context: query handlers and
/// offset-based pagination.
pub mod pagination;
pub mod use_case;

pub use pagination::*;
pub use use_case::Query;
