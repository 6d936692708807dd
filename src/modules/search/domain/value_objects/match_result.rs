use serde::{Deserialize, Serialize};

/// Outcome of scoring one catalog name against the search phrase
///
/// Lower tiers are stronger matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchResult {
    Matched { term: String, tier: usize },
    NoMatch,
}

impl MatchResult {
    pub fn matched(term: impl Into<String>, tier: usize) -> Self {
        MatchResult::Matched {
            term: term.into(),
            tier,
        }
    }

    pub fn tier(&self) -> Option<usize> {
        match self {
            MatchResult::Matched { tier, .. } => Some(*tier),
            MatchResult::NoMatch => None,
        }
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { term, .. } => Some(term),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// Primary ranking key; misses sort after every match
    pub fn rank_key(&self) -> usize {
        self.tier().unwrap_or(usize::MAX)
    }

    pub fn into_term(self) -> Option<String> {
        match self {
            MatchResult::Matched { term, .. } => Some(term),
            MatchResult::NoMatch => None,
        }
    }
}
