pub mod search_hints_request;

pub use search_hints_request::SearchHintsRequest;
