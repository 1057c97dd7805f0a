//! Public data types for the Context7 API.

use std::fmt;

use chrono::{DateTime, Utc};

/// Authority indicator attached to a search result.
///
/// Context7 sends this as either an integer or a float; both normalize to `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TrustScore(pub f64);

impl TrustScore {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_non_negative(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops the fractional part for integral values.
        write!(f, "{}", self.0)
    }
}

/// A library matching a search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Canonical identifier, usually `/org/repo`.
    pub id: String,
    pub title: String,
    pub description: String,
    pub branch: Option<String>,
    pub last_update_date: Option<DateTime<Utc>>,
    /// Lifecycle state tag (e.g. `finalized`).
    pub state: Option<String>,
    pub total_tokens: u64,
    /// `None` when the field was missing from the payload.
    pub total_snippets: Option<i64>,
    pub total_pages: u64,
    pub stars: Option<u64>,
    pub trust_score: Option<TrustScore>,
}

/// Search results in the relevance order returned by the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
