use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::{
    core::cmd::{MutationId, RequestId},
    domain::Facet,
};

/// One response from a list backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedPage<T> {
    pub items: Vec<T>,
    /// Total matching items as reported by a server-paged backend.
    /// `None` means `items` is the whole collection.
    pub total: Option<usize>,
}

impl<T> LoadedPage<T> {
    pub fn all(items: Vec<T>) -> Self {
        Self { items, total: None }
    }
}

/// Messages a list view reacts to.
///
/// UI events (typing, clicking page buttons) and backend responses both come
/// through here, so every state change of a list view is serialized through
/// one `update` call.
#[derive(Debug, Clone, PartialEq)]
pub enum ListMsg<T> {
    // Search box
    SearchInput {
        value: String,
        now: Option<Instant>,
    },
    Tick {
        now: Option<Instant>,
    },
    SearchSubmitted,
    SearchCleared,

    // Facet dropdowns
    FacetChanged {
        facet: Facet,
        value: Option<String>,
    },
    FiltersCleared,

    // Pager
    PageRequested(i64),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    PageSizeChanged(usize),

    // Row highlight within the page
    SelectPrevious,
    SelectNext,

    // Backend
    RefreshRequested,
    Loaded {
        request: RequestId,
        page: LoadedPage<T>,
    },
    LoadFailed {
        request: RequestId,
        error: String,
    },

    // Optimistic mutations
    RemoveRequested {
        id: String,
    },
    UpsertRequested(T),
    MutationSettled {
        mutation: MutationId,
        result: Result<(), String>,
    },
}

impl<T> ListMsg<T> {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, ListMsg::Tick { .. })
    }
}

/// Top-level messages of the list browser
#[derive(Debug, Clone, PartialEq)]
pub enum Msg<T> {
    /// Forwarded to the list view
    List(ListMsg<T>),

    SearchFocused,
    SearchUnfocused,

    // Key-driven conveniences that need the app's knowledge of the records
    FacetCycled(Facet),
    PageSizeCycled { larger: bool },
    DeleteSelectedRequested,

    // Status line
    StatusMessageUpdated(String),
    StatusMessageCleared,

    Quit,
}

impl<T> Msg<T> {
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::List(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}

impl<T> From<ListMsg<T>> for Msg<T> {
    fn from(msg: ListMsg<T>) -> Self {
        Msg::List(msg)
    }
}
