use std::collections::BTreeMap;
use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::domain::Facet;

/// Identifies one fetch so late responses can be told apart from current ones
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct RequestId(pub u64);

/// Identifies one optimistic mutation until the server settles it
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct MutationId(pub u64);

/// Server-side paging parameters (`page` is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// What a list view asks its backend for.
///
/// Client-paged views send an empty query (fetch everything) and filter
/// locally; server-paged views send their filters and the page they show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search: Option<String>,
    pub facets: BTreeMap<Facet, String>,
    pub page: Option<PageRequest>,
}

impl Query {
    /// Everything, unfiltered
    pub fn all() -> Self {
        Self::default()
    }

    /// URL query string in the form the REST backend expects, e.g.
    /// `page=2&limit=50&search=rust%20dev&status=pending`
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();
        if let Some(request) = &self.page {
            pairs.push(("page".to_string(), request.page.to_string()));
            pairs.push(("limit".to_string(), request.limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        for (facet, value) in &self.facets {
            pairs.push((facet.to_string(), value.clone()));
        }

        let mut out = String::new();
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            let _ = write!(out, "{key}={}", utf8_percent_encode(value, NON_ALPHANUMERIC));
        }
        out
    }
}

/// A change the user made locally before the server confirmed it
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    Remove { id: String },
    Upsert(T),
}

/// Elm-like command definitions
/// Represents side effects a list view needs from its host
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd<T> {
    /// Load items for `query`; the result comes back tagged with `request`
    Fetch { request: RequestId, query: Query },
    /// A newer fetch superseded this one
    CancelFetch { request: RequestId },
    /// Send an already-applied local change to the backend
    Mutate {
        mutation: MutationId,
        op: Mutation<T>,
    },
    /// Surface an error to the user
    ShowError { message: String },
}

impl<T> Cmd<T> {
    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::Fetch { .. } | Cmd::Mutate { .. } => true,
            Cmd::CancelFetch { .. } | Cmd::ShowError { .. } => false,
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // Cancellation must land before the fetch that supersedes it
            Cmd::CancelFetch { .. } => 0,
            Cmd::Mutate { .. } => 1,
            Cmd::Fetch { .. } => 2,
            Cmd::ShowError { .. } => 3,
        }
    }
}
