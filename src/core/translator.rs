use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{ListMsg, Msg},
        state::AppState,
    },
    domain::Listable,
};

/// Translates a key press into messages, given the current state.
/// This function is pure and contains no side effects
pub fn translate_key_event<T: Listable>(key: KeyEvent, state: &AppState<T>) -> Vec<Msg<T>> {
    // Global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::Quit];
    }

    if state.search_focused {
        translate_search_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while typing into the search box
fn translate_search_mode_keys<T: Listable>(key: KeyEvent, state: &AppState<T>) -> Vec<Msg<T>> {
    let raw = state.list.search().raw();

    match key.code {
        KeyCode::Enter => vec![
            Msg::List(ListMsg::SearchSubmitted),
            Msg::SearchUnfocused,
        ],
        KeyCode::Esc => vec![Msg::SearchUnfocused],
        KeyCode::Backspace => {
            let mut value = raw.to_string();
            if value.pop().is_none() {
                return vec![];
            }
            vec![search_input(value)]
        }
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            vec![search_input(format!("{raw}{c}"))]
        }
        _ => vec![],
    }
}

fn search_input<T>(value: String) -> Msg<T> {
    Msg::List(ListMsg::SearchInput { value, now: None })
}

/// Key bindings when navigating the list
fn translate_normal_mode_keys<T: Listable>(key: KeyEvent, state: &AppState<T>) -> Vec<Msg<T>> {
    let list = |msg: ListMsg<T>| vec![Msg::List(msg)];

    match key.code {
        KeyCode::Char('q') => vec![Msg::Quit],
        KeyCode::Char('/') => vec![Msg::SearchFocused],
        KeyCode::Esc if !state.list.search().raw().is_empty() => list(ListMsg::SearchCleared),

        // Row highlight
        KeyCode::Char('j') | KeyCode::Down => list(ListMsg::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => list(ListMsg::SelectPrevious),

        // Pager
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => list(ListMsg::NextPage),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => list(ListMsg::PreviousPage),
        KeyCode::Char('g') | KeyCode::Home => list(ListMsg::FirstPage),
        KeyCode::Char('G') | KeyCode::End => list(ListMsg::LastPage),
        KeyCode::Char('+') | KeyCode::Char('=') => vec![Msg::PageSizeCycled { larger: true }],
        KeyCode::Char('-') => vec![Msg::PageSizeCycled { larger: false }],

        // Facets, in the order the record type lists them
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            T::facets()
                .get(index)
                .map(|facet| vec![Msg::FacetCycled(*facet)])
                .unwrap_or_default()
        }
        KeyCode::Char('c') => list(ListMsg::FiltersCleared),

        KeyCode::Char('r') => list(ListMsg::RefreshRequested),
        KeyCode::Char('x') | KeyCode::Delete => vec![Msg::DeleteSelectedRequested],

        _ => vec![],
    }
}
