use std::collections::BTreeSet;

use crate::{
    core::cmd::Cmd,
    core::msg::{ListMsg, Msg},
    core::state::AppState,
    domain::{Facet, Listable},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update<T: Listable>(msg: Msg<T>, mut state: AppState<T>) -> (AppState<T>, Vec<Cmd<T>>) {
    match msg {
        // List messages (delegated to ListState)
        Msg::List(list_msg) => {
            let commands = state.list.update(list_msg);
            (state, commands)
        }

        Msg::SearchFocused => {
            state.search_focused = true;
            (state, vec![])
        }

        Msg::SearchUnfocused => {
            state.search_focused = false;
            (state, vec![])
        }

        Msg::FacetCycled(facet) => {
            if !T::facets().contains(&facet) {
                log::debug!("{} has no {facet} facet", state.title);
                return (state, vec![]);
            }
            let value = next_facet_value(&state, facet);
            state.status_message = Some(match &value {
                Some(value) => format!("[Filter] {facet} = {value}"),
                None => format!("[Filter] {facet} cleared"),
            });
            let commands = state.list.update(ListMsg::FacetChanged { facet, value });
            (state, commands)
        }

        Msg::PageSizeCycled { larger } => {
            let pagination = state.list.pagination();
            let current = pagination.page_size();
            let options = pagination.page_sizes();
            let size = match (options.sizes().is_empty(), larger) {
                (false, true) => options.larger(current),
                (false, false) => options.smaller(current),
                // Any size is allowed: step by doubling
                (true, true) => current.saturating_mul(2),
                (true, false) => (current / 2).max(1),
            };
            if size == current {
                return (state, vec![]);
            }
            state.status_message = Some(format!("[Page size] {size}"));
            let commands = state.list.update(ListMsg::PageSizeChanged(size));
            (state, commands)
        }

        Msg::DeleteSelectedRequested => {
            let Some(id) = state.list.selected_item().map(|item| item.id().to_string()) else {
                return (state, vec![]);
            };
            state.status_message = Some(format!("[Deleted] {id}"));
            let commands = state.list.update(ListMsg::RemoveRequested { id });
            (state, commands)
        }

        Msg::StatusMessageUpdated(message) => {
            state.status_message = Some(message);
            (state, vec![])
        }

        Msg::StatusMessageCleared => {
            state.status_message = None;
            (state, vec![])
        }

        Msg::Quit => {
            state.should_quit = true;
            (state, vec![])
        }
    }
}

/// Cycles `None -> option 1 -> ... -> option n -> None`.
///
/// Records without a fixed option list (free-form categories) cycle through
/// the values present in the loaded items.
fn next_facet_value<T: Listable>(state: &AppState<T>, facet: Facet) -> Option<String> {
    let mut options = T::facet_options(facet);
    if options.is_empty() {
        options = state
            .list
            .items()
            .iter()
            .filter_map(|item| item.facet(facet))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
    }

    match state.list.filter().facet(facet) {
        None => options.first().cloned(),
        Some(current) => options
            .iter()
            .position(|option| option.eq_ignore_ascii_case(current))
            .and_then(|index| options.get(index + 1))
            .cloned(),
    }
}
