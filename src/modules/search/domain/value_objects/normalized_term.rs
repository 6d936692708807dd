use serde::{Deserialize, Serialize};

/// Search phrase after normalization plus its word list
///
/// `phrase` keeps stop-words; only `tokens` drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTerm {
    pub phrase: String,
    pub tokens: Vec<String>,
}

impl NormalizedTerm {
    pub fn new(phrase: String, tokens: Vec<String>) -> Self {
        Self { phrase, tokens }
    }
}
