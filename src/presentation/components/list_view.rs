//! List view component
//!
//! Lays out one list screen: search bar, table, pager and status line.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::{Listable, TableRow},
    presentation::widgets::{ListTableWidget, PagerWidget, SearchBarWidget, StatusBarWidget},
};

/// Stateless renderer of an [`AppState`]
#[derive(Debug, Clone, Default)]
pub struct ListView;

impl ListView {
    pub fn new() -> Self {
        Self
    }

    pub fn view<T: Listable + TableRow>(&self, state: &AppState<T>, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Search bar
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Pager
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        let list = &state.list;
        let facets = T::facets()
            .iter()
            .map(|facet| (*facet, list.filter().facet(*facet)))
            .collect();
        let search_bar = SearchBarWidget::new(list.search().raw())
            .focused(state.search_focused)
            .facets(facets)
            .loading(list.is_loading());
        frame.render_widget(search_bar, layout[0]);

        let rows = list.visible_items();
        let table = ListTableWidget::new(&state.title, &rows)
            .selected(list.selection().selected_index())
            .loading(list.is_loading());
        frame.render_widget(table, layout[1]);

        frame.render_widget(PagerWidget::new(list.pagination()), layout[2]);

        let status_bar = StatusBarWidget::new(&state.title)
            .message(state.status_message.as_deref())
            .error(list.error());
        frame.render_widget(status_bar, layout[3]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        core::{
            cmd::RequestId,
            msg::{ListMsg, LoadedPage},
            state::ListState,
        },
        domain::records::User,
        test_helpers::users,
    };

    fn loaded_state(count: usize) -> AppState<User> {
        let mut list = ListState::default();
        list.update(ListMsg::RefreshRequested);
        list.update(ListMsg::Loaded {
            request: RequestId(1),
            page: LoadedPage::all(users(count)),
        });
        AppState::new("Users", list)
    }

    fn screen(state: &AppState<User>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        terminal
            .draw(|frame| ListView::new().view(state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_renders_first_page() {
        let lines = screen(&loaded_state(25));
        assert!(lines[0].starts_with("Search: press / to search   role: all   status: all"));
        assert!(lines[1].contains("Users"));
        assert!(lines[2].contains("Name"));
        assert!(lines[3].contains("User 0"));
        assert!(lines.iter().any(|line| line.contains("User 9")));
        assert!(!lines.iter().any(|line| line.contains("User 10 ")));
        assert!(lines[17].starts_with("‹ Prev  [1] 2 3  Next ›   1-10 of 25"));
    }

    #[test]
    fn test_renders_empty_and_error_state() {
        let mut list: ListState<User> = ListState::default();
        list.update(ListMsg::RefreshRequested);
        list.update(ListMsg::LoadFailed {
            request: RequestId(1),
            error: "backend unavailable".to_string(),
        });
        let lines = screen(&AppState::new("Users", list));

        assert!(lines.iter().any(|line| line.contains("No matching records")));
        assert!(lines[17].contains("No results"));
        assert_eq!(lines[19].trim_end(), "[Error] backend unavailable");
    }
}
