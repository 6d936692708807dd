mod handler;
mod query;
mod result;

pub use handler::SearchHintsHandler;
pub use query::SearchHintsQuery;
pub use result::{SearchHintInfo, SearchHintsResult};
