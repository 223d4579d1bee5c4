//! State of one list view
//!
//! A `ListState` is created when a view mounts and dropped when it unmounts;
//! there is no shared or global list state. It owns the items it displays,
//! the pagination engine, the search box and the committed filters, and it
//! changes only through [`ListState::update`].

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    core::cmd::{Cmd, Mutation, MutationId, PageRequest, Query, RequestId},
    core::msg::{ListMsg, LoadedPage},
    domain::Listable,
};

use super::{
    filter::ListFilter,
    pagination::{self, PaginationOptions, PaginationState},
    search::{self, DebouncedSearch},
    selection::SelectionState,
};

/// Where filtering and slicing happen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingMode {
    /// The whole collection is fetched once and paginated locally
    #[default]
    Client,
    /// The backend filters and pages, reporting the total count
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub mode: PagingMode,
    pub pagination: PaginationOptions,
    pub debounce: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            mode: PagingMode::Client,
            pagination: PaginationOptions::default(),
            debounce: search::DEFAULT_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request: RequestId,
    query: Query,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pagination: PaginationState,
    search: DebouncedSearch,
    filter: ListFilter,
    selection: SelectionState,
    mode: PagingMode,
    items: Vec<T>,
    /// Indices into `items` that pass the filter (client mode only)
    filtered: Vec<usize>,
    loading: bool,
    error: Option<String>,
    in_flight: Option<InFlight>,
    last_request: u64,
    pending_mutations: BTreeSet<MutationId>,
    last_mutation: u64,
}

impl<T: Listable> Default for ListState<T> {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl<T: Listable> ListState<T> {
    pub fn new(options: ListOptions) -> Self {
        Self {
            pagination: PaginationState::with_options(options.pagination),
            search: DebouncedSearch::new(options.debounce),
            filter: ListFilter::new(),
            selection: SelectionState::new(),
            mode: options.mode,
            items: Vec::new(),
            filtered: Vec::new(),
            loading: false,
            error: None,
            in_flight: None,
            last_request: 0,
            pending_mutations: BTreeSet::new(),
            last_mutation: 0,
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn search(&self) -> &DebouncedSearch {
        &self.search
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> PagingMode {
        self.mode
    }

    /// Everything the view currently holds (the whole collection in client
    /// mode, the current page in server mode)
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|in_flight| in_flight.request)
    }

    pub fn pending_mutations(&self) -> &BTreeSet<MutationId> {
        &self.pending_mutations
    }

    /// Items matching the committed filter, across all pages
    pub fn matching_len(&self) -> usize {
        self.pagination.total_items()
    }

    /// The rows of the current page
    pub fn visible_items(&self) -> Vec<&T> {
        match self.mode {
            PagingMode::Client => self
                .pagination
                .paginate(&self.filtered)
                .iter()
                .filter_map(|index| self.items.get(*index))
                .collect(),
            PagingMode::Server => self
                .items
                .iter()
                .take(self.pagination.page_size())
                .collect(),
        }
    }

    pub fn selected_item(&self) -> Option<&T> {
        let index = self.selection.selected_index()?;
        self.visible_items().get(index).copied()
    }

    /// The query the next fetch will send
    pub fn query(&self) -> Query {
        match self.mode {
            PagingMode::Client => Query::all(),
            PagingMode::Server => Query {
                search: Some(self.filter.search().trim().to_string()).filter(|s| !s.is_empty()),
                facets: self.filter.facets().clone(),
                page: Some(PageRequest {
                    page: self.pagination.current_page(),
                    limit: self.pagination.page_size(),
                }),
            },
        }
    }

    /// Apply a message and return the side effects it requires
    pub fn update(&mut self, msg: ListMsg<T>) -> Vec<Cmd<T>> {
        if !msg.is_frequent() {
            log::debug!("list update: {}", msg_name(&msg));
        }

        match msg {
            ListMsg::SearchInput { value, now } => {
                self.search
                    .update(search::Message::InputChanged { value, now });
                vec![]
            }
            ListMsg::Tick { now } => match self.search.update(search::Message::Tick { now }) {
                Some(value) => self.commit_search(&value),
                None => vec![],
            },
            ListMsg::SearchSubmitted => match self.search.update(search::Message::Flushed) {
                Some(value) => self.commit_search(&value),
                None => vec![],
            },
            ListMsg::SearchCleared => match self.search.update(search::Message::Cleared) {
                Some(value) => self.commit_search(&value),
                None => vec![],
            },

            ListMsg::FacetChanged { facet, value } => {
                if self.filter.set_facet(facet, value.as_deref()) {
                    self.filters_changed()
                } else {
                    vec![]
                }
            }
            ListMsg::FiltersCleared => {
                self.search.update(search::Message::Cleared);
                if self.filter.clear() {
                    self.filters_changed()
                } else {
                    vec![]
                }
            }

            ListMsg::PageRequested(page) => {
                self.paginate_by(pagination::Message::PageRequested(page))
            }
            ListMsg::NextPage => self.paginate_by(pagination::Message::NextPageRequested),
            ListMsg::PreviousPage => self.paginate_by(pagination::Message::PreviousPageRequested),
            ListMsg::FirstPage => self.paginate_by(pagination::Message::FirstPageRequested),
            ListMsg::LastPage => self.paginate_by(pagination::Message::LastPageRequested),
            ListMsg::PageSizeChanged(size) => {
                self.paginate_by(pagination::Message::PageSizeChanged(size))
            }

            ListMsg::SelectPrevious => {
                self.selection.scroll_up();
                vec![]
            }
            ListMsg::SelectNext => {
                let rows = self.visible_items().len();
                self.selection.scroll_down(rows);
                vec![]
            }

            ListMsg::RefreshRequested => self.begin_fetch(),
            ListMsg::Loaded { request, page } => self.loaded(request, page),
            ListMsg::LoadFailed { request, error } => {
                if !self.is_current(request) {
                    log::debug!("ignoring failure of superseded request {request:?}");
                    return vec![];
                }
                self.in_flight = None;
                self.loading = false;
                log::warn!("list fetch failed: {error}");
                self.error = Some(error.clone());
                vec![Cmd::ShowError { message: error }]
            }

            ListMsg::RemoveRequested { id } => self.remove_optimistically(id),
            ListMsg::UpsertRequested(item) => self.upsert_optimistically(item),
            ListMsg::MutationSettled { mutation, result } => {
                self.pending_mutations.remove(&mutation);
                let mut cmds = Vec::new();
                if let Err(error) = result {
                    log::warn!("mutation {mutation:?} failed: {error}");
                    self.error = Some(error.clone());
                    cmds.push(Cmd::ShowError { message: error });
                }
                // The server is the source of truth whatever the outcome
                cmds.extend(self.begin_fetch());
                cmds
            }
        }
    }

    fn commit_search(&mut self, value: &str) -> Vec<Cmd<T>> {
        if self.filter.set_search(value) {
            self.filters_changed()
        } else {
            vec![]
        }
    }

    /// A refined filter always starts over on page 1
    fn filters_changed(&mut self) -> Vec<Cmd<T>> {
        self.pagination.go_to_first_page();
        self.selection.deselect();
        match self.mode {
            PagingMode::Client => {
                self.refilter();
                vec![]
            }
            PagingMode::Server => self.begin_fetch(),
        }
    }

    fn paginate_by(&mut self, message: pagination::Message) -> Vec<Cmd<T>> {
        let before = (self.pagination.current_page(), self.pagination.page_size());
        self.pagination.update(message);
        let after = (self.pagination.current_page(), self.pagination.page_size());
        if before == after {
            return vec![];
        }

        self.selection.deselect();
        match self.mode {
            PagingMode::Client => vec![],
            PagingMode::Server => self.begin_fetch(),
        }
    }

    fn begin_fetch(&mut self) -> Vec<Cmd<T>> {
        let mut cmds = Vec::new();
        if let Some(previous) = self.in_flight.take() {
            cmds.push(Cmd::CancelFetch {
                request: previous.request,
            });
        }

        self.last_request += 1;
        let request = RequestId(self.last_request);
        let query = self.query();
        self.in_flight = Some(InFlight {
            request,
            query: query.clone(),
        });
        self.loading = true;
        cmds.push(Cmd::Fetch { request, query });
        cmds
    }

    fn is_current(&self, request: RequestId) -> bool {
        self.in_flight()
            .is_some_and(|in_flight| in_flight == request)
    }

    fn loaded(&mut self, request: RequestId, page: LoadedPage<T>) -> Vec<Cmd<T>> {
        if !self.is_current(request) {
            log::debug!("ignoring late response for request {request:?}");
            return vec![];
        }
        let Some(in_flight) = self.in_flight.take() else {
            return vec![];
        };
        self.loading = false;
        self.error = None;
        self.items = page.items;

        match self.mode {
            PagingMode::Client => {
                self.refilter();
                vec![]
            }
            PagingMode::Server => {
                let total = page.total.unwrap_or(self.items.len());
                self.pagination.set_total_items(total);
                let rows = self.visible_items().len();
                self.selection.clamp(rows);

                // The collection shrank under us and the requested page no
                // longer exists; ask again for the page we clamped to
                let requested = in_flight.query.page.map(|page| page.page);
                if requested.is_some_and(|page| page != self.pagination.current_page()) {
                    self.begin_fetch()
                } else {
                    vec![]
                }
            }
        }
    }

    fn refilter(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(*item))
            .map(|(index, _)| index)
            .collect();
        self.pagination.set_total_items(self.filtered.len());
        let rows = self.visible_items().len();
        self.selection.clamp(rows);
    }

    fn next_mutation(&mut self) -> MutationId {
        self.last_mutation += 1;
        let mutation = MutationId(self.last_mutation);
        self.pending_mutations.insert(mutation);
        mutation
    }

    fn remove_optimistically(&mut self, id: String) -> Vec<Cmd<T>> {
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            log::warn!("remove requested for unknown item {id}");
            return vec![];
        };
        self.items.remove(position);

        match self.mode {
            PagingMode::Client => self.refilter(),
            PagingMode::Server => {
                let total = self.pagination.total_items().saturating_sub(1);
                self.pagination.set_total_items(total);
                let rows = self.visible_items().len();
                self.selection.clamp(rows);
            }
        }

        let mutation = self.next_mutation();
        vec![Cmd::Mutate {
            mutation,
            op: Mutation::Remove { id },
        }]
    }

    fn upsert_optimistically(&mut self, item: T) -> Vec<Cmd<T>> {
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(position) => self.items[position] = item.clone(),
            None => match self.mode {
                PagingMode::Client => self.items.push(item.clone()),
                PagingMode::Server => {
                    self.items.insert(0, item.clone());
                    let total = self.pagination.total_items() + 1;
                    self.pagination.set_total_items(total);
                }
            },
        }

        if self.mode == PagingMode::Client {
            self.refilter();
        }

        let mutation = self.next_mutation();
        vec![Cmd::Mutate {
            mutation,
            op: Mutation::Upsert(item),
        }]
    }
}

fn msg_name<T>(msg: &ListMsg<T>) -> &'static str {
    match msg {
        ListMsg::SearchInput { .. } => "SearchInput",
        ListMsg::Tick { .. } => "Tick",
        ListMsg::SearchSubmitted => "SearchSubmitted",
        ListMsg::SearchCleared => "SearchCleared",
        ListMsg::FacetChanged { .. } => "FacetChanged",
        ListMsg::FiltersCleared => "FiltersCleared",
        ListMsg::PageRequested(_) => "PageRequested",
        ListMsg::NextPage => "NextPage",
        ListMsg::PreviousPage => "PreviousPage",
        ListMsg::FirstPage => "FirstPage",
        ListMsg::LastPage => "LastPage",
        ListMsg::PageSizeChanged(_) => "PageSizeChanged",
        ListMsg::SelectPrevious => "SelectPrevious",
        ListMsg::SelectNext => "SelectNext",
        ListMsg::RefreshRequested => "RefreshRequested",
        ListMsg::Loaded { .. } => "Loaded",
        ListMsg::LoadFailed { .. } => "LoadFailed",
        ListMsg::RemoveRequested { .. } => "RemoveRequested",
        ListMsg::UpsertRequested(_) => "UpsertRequested",
        ListMsg::MutationSettled { .. } => "MutationSettled",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::records::User;
    use crate::domain::Facet;
    use crate::test_helpers::{user, users};

    fn loaded_client(count: usize) -> ListState<User> {
        let mut state = ListState::default();
        let cmds = state.update(ListMsg::RefreshRequested);
        assert_eq!(
            cmds,
            vec![Cmd::Fetch {
                request: RequestId(1),
                query: Query::all()
            }]
        );
        state.update(ListMsg::Loaded {
            request: RequestId(1),
            page: LoadedPage::all(users(count)),
        });
        state
    }

    fn server_state() -> ListState<User> {
        ListState::new(ListOptions {
            mode: PagingMode::Server,
            pagination: PaginationOptions {
                initial_page_size: Some(10),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn ids(state: &ListState<User>) -> Vec<String> {
        state
            .visible_items()
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    #[test]
    fn test_client_mode_pages_locally() {
        let mut state = loaded_client(47);
        assert!(!state.is_loading());
        assert_eq!(state.pagination().total_pages(), 5);
        assert_eq!(ids(&state).first().map(String::as_str), Some("u0"));

        assert!(state.update(ListMsg::LastPage).is_empty());
        assert_eq!(state.visible_items().len(), 7);
        assert_eq!(ids(&state).first().map(String::as_str), Some("u40"));
    }

    #[test]
    fn test_debounced_search_recomputes_once_and_resets_page() {
        let mut state = loaded_client(47);
        state.update(ListMsg::PageRequested(3));
        let start = Instant::now();

        for (i, value) in ["User 1", "User 1", "User 12"].iter().enumerate() {
            state.update(ListMsg::SearchInput {
                value: value.to_string(),
                now: Some(start + Duration::from_millis(i as u64 * 100)),
            });
        }
        // Not yet settled: filter and page untouched
        state.update(ListMsg::Tick {
            now: Some(start + Duration::from_millis(250)),
        });
        assert_eq!(state.filter().search(), "");
        assert_eq!(state.pagination().current_page(), 3);

        state.update(ListMsg::Tick {
            now: Some(start + Duration::from_millis(600)),
        });
        assert_eq!(state.filter().search(), "User 12");
        assert_eq!(state.pagination().current_page(), 1);
        assert_eq!(ids(&state), vec!["u12"]);
    }

    #[test]
    fn test_facet_change_resets_to_first_page() {
        let mut state = loaded_client(47);
        state.update(ListMsg::PageRequested(2));

        let cmds = state.update(ListMsg::FacetChanged {
            facet: Facet::Role,
            value: Some("mentee".to_string()),
        });
        assert!(cmds.is_empty());
        assert_eq!(state.pagination().current_page(), 1);
        assert_eq!(state.matching_len(), 23);
        assert!(state.visible_items().iter().all(|user| user.role.to_string() == "mentee"));

        state.update(ListMsg::FiltersCleared);
        assert_eq!(state.matching_len(), 47);
    }

    #[test]
    fn test_optimistic_remove_then_refetch() {
        let mut state = loaded_client(11);
        state.update(ListMsg::LastPage);
        assert_eq!(state.pagination().current_page(), 2);

        let cmds = state.update(ListMsg::RemoveRequested {
            id: "u10".to_string(),
        });
        assert_eq!(
            cmds,
            vec![Cmd::Mutate {
                mutation: MutationId(1),
                op: Mutation::Remove {
                    id: "u10".to_string()
                }
            }]
        );
        // Page 2 emptied out, so the view falls back to page 1
        assert_eq!(state.matching_len(), 10);
        assert_eq!(state.pagination().current_page(), 1);
        assert!(state.pending_mutations().contains(&MutationId(1)));

        let cmds = state.update(ListMsg::MutationSettled {
            mutation: MutationId(1),
            result: Ok(()),
        });
        assert_eq!(
            cmds,
            vec![Cmd::Fetch {
                request: RequestId(2),
                query: Query::all()
            }]
        );
        assert!(state.pending_mutations().is_empty());
    }

    #[test]
    fn test_failed_mutation_reports_and_refetches() {
        let mut state = loaded_client(5);
        state.update(ListMsg::RemoveRequested {
            id: "u1".to_string(),
        });
        assert_eq!(state.matching_len(), 4);

        let cmds = state.update(ListMsg::MutationSettled {
            mutation: MutationId(1),
            result: Err("forbidden".to_string()),
        });
        assert_eq!(
            cmds,
            vec![
                Cmd::ShowError {
                    message: "forbidden".to_string()
                },
                Cmd::Fetch {
                    request: RequestId(2),
                    query: Query::all()
                },
            ]
        );
        assert_eq!(state.error(), Some("forbidden"));

        // The authoritative collection restores the count
        state.update(ListMsg::Loaded {
            request: RequestId(2),
            page: LoadedPage::all(users(5)),
        });
        assert_eq!(state.matching_len(), 5);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut state = loaded_client(3);
        assert!(state
            .update(ListMsg::RemoveRequested {
                id: "nope".to_string()
            })
            .is_empty());
        assert_eq!(state.matching_len(), 3);
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut state = loaded_client(3);
        state.update(ListMsg::UpsertRequested(user("u1", "Renamed", "admin")));
        assert_eq!(state.matching_len(), 3);
        assert_eq!(state.items()[1].name, "Renamed");

        let cmds = state.update(ListMsg::UpsertRequested(user("u9", "New", "mentor")));
        assert_eq!(state.matching_len(), 4);
        assert_eq!(cmds.len(), 1);
        assert_eq!(state.pending_mutations().len(), 2);
    }

    #[test]
    fn test_server_mode_fetches_page_and_filters() {
        let mut state = server_state();
        let cmds = state.update(ListMsg::RefreshRequested);
        assert_eq!(
            cmds,
            vec![Cmd::Fetch {
                request: RequestId(1),
                query: Query {
                    page: Some(PageRequest { page: 1, limit: 10 }),
                    ..Default::default()
                }
            }]
        );
        state.update(ListMsg::Loaded {
            request: RequestId(1),
            page: LoadedPage {
                items: users(10),
                total: Some(95),
            },
        });
        assert_eq!(state.pagination().total_pages(), 10);

        let cmds = state.update(ListMsg::PageRequested(7));
        let Some(Cmd::Fetch { query, .. }) = cmds.last() else {
            panic!("expected a fetch, got {cmds:?}");
        };
        assert_eq!(query.to_query_string(), "page=7&limit=10");

        // Page did not change: no fetch
        assert!(state.update(ListMsg::PageRequested(7)).is_empty());
    }

    #[test]
    fn test_superseded_request_is_cancelled_and_ignored() {
        let mut state = server_state();
        state.update(ListMsg::RefreshRequested);
        state.update(ListMsg::Loaded {
            request: RequestId(1),
            page: LoadedPage {
                items: users(10),
                total: Some(100),
            },
        });

        state.update(ListMsg::NextPage);
        let cmds = state.update(ListMsg::NextPage);
        assert_eq!(
            cmds[0],
            Cmd::CancelFetch {
                request: RequestId(2)
            }
        );
        assert_eq!(state.in_flight(), Some(RequestId(3)));

        // The late answer for page 2 must not overwrite page 3
        let stale = state.update(ListMsg::Loaded {
            request: RequestId(2),
            page: LoadedPage {
                items: vec![user("stale", "Stale", "mentor")],
                total: Some(1),
            },
        });
        assert!(stale.is_empty());
        assert_eq!(state.pagination().total_items(), 100);
        assert!(state.is_loading());

        let failed = state.update(ListMsg::LoadFailed {
            request: RequestId(2),
            error: "timeout".to_string(),
        });
        assert!(failed.is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_server_mode_refetches_when_page_vanished() {
        let mut state = server_state();
        state.update(ListMsg::RefreshRequested);
        state.update(ListMsg::Loaded {
            request: RequestId(1),
            page: LoadedPage {
                items: users(10),
                total: Some(100),
            },
        });
        state.update(ListMsg::LastPage);

        // Meanwhile most rows were deleted elsewhere
        let cmds = state.update(ListMsg::Loaded {
            request: RequestId(2),
            page: LoadedPage {
                items: vec![],
                total: Some(25),
            },
        });
        assert_eq!(state.pagination().current_page(), 3);
        assert_eq!(
            cmds,
            vec![Cmd::Fetch {
                request: RequestId(3),
                query: Query {
                    page: Some(PageRequest { page: 3, limit: 10 }),
                    ..Default::default()
                }
            }]
        );
    }

    #[test]
    fn test_server_mode_search_query() {
        let mut state = server_state();
        state.update(ListMsg::SearchInput {
            value: "  ada ".to_string(),
            now: None,
        });
        let cmds = state.update(ListMsg::SearchSubmitted);
        let Some(Cmd::Fetch { query, .. }) = cmds.last() else {
            panic!("expected a fetch, got {cmds:?}");
        };
        assert_eq!(query.search.as_deref(), Some("ada"));
        assert_eq!(query.page, Some(PageRequest { page: 1, limit: 10 }));
    }

    #[test]
    fn test_load_failure_surfaces_error() {
        let mut state: ListState<User> = ListState::default();
        state.update(ListMsg::RefreshRequested);
        let cmds = state.update(ListMsg::LoadFailed {
            request: RequestId(1),
            error: "500".to_string(),
        });
        assert_eq!(
            cmds,
            vec![Cmd::ShowError {
                message: "500".to_string()
            }]
        );
        assert!(!state.is_loading());
        assert_eq!(state.in_flight(), None);
    }

    #[test]
    fn test_selection_follows_page() {
        let mut state = loaded_client(12);
        state.update(ListMsg::SelectNext);
        state.update(ListMsg::SelectNext);
        assert_eq!(state.selected_item().map(|u| u.id.as_str()), Some("u1"));

        state.update(ListMsg::NextPage);
        assert_eq!(state.selected_item(), None);

        for _ in 0..5 {
            state.update(ListMsg::SelectNext);
        }
        // Page 2 has only two rows
        assert_eq!(state.selected_item().map(|u| u.id.as_str()), Some("u11"));
        state.update(ListMsg::SelectPrevious);
        assert_eq!(state.selected_item().map(|u| u.id.as_str()), Some("u10"));
    }
}
