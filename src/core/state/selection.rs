//! Row selection within the visible page

/// Manages which row of the current page is highlighted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new selection state with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Get the currently selected row index within the page
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_selected(&self) -> bool {
        self.selected_index.is_some()
    }

    pub fn deselect(&mut self) {
        self.selected_index = None;
    }

    /// Move the highlight up one row
    pub fn scroll_up(&mut self) {
        if let Some(index) = self.selected_index {
            if index > 0 {
                self.selected_index = Some(index - 1);
            }
        }
    }

    /// Move the highlight down one row; the first call selects row 0
    pub fn scroll_down(&mut self, row_count: usize) {
        match self.selected_index {
            Some(index) if index + 1 < row_count => {
                self.selected_index = Some(index + 1);
            }
            None if row_count > 0 => {
                self.selected_index = Some(0);
            }
            _ => {}
        }
    }

    /// Keep the highlight on an existing row after the page content changed
    pub fn clamp(&mut self, row_count: usize) {
        self.selected_index = match self.selected_index {
            Some(_) if row_count == 0 => None,
            Some(index) => Some(index.min(row_count - 1)),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_state_default() {
        let state = SelectionState::new();
        assert_eq!(state.selected_index(), None);
        assert!(!state.is_selected());
    }

    #[test]
    fn test_scroll_up() {
        let mut state = SelectionState::new();
        state.scroll_down(10);
        state.scroll_down(10);
        assert_eq!(state.selected_index(), Some(1));

        state.scroll_up();
        assert_eq!(state.selected_index(), Some(0));

        // Cannot scroll up from 0
        state.scroll_up();
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_scroll_down() {
        let mut state = SelectionState::new();

        // Nothing to select on an empty page
        state.scroll_down(0);
        assert_eq!(state.selected_index(), None);

        // Initial scroll down selects first row
        state.scroll_down(3);
        assert_eq!(state.selected_index(), Some(0));

        state.scroll_down(3);
        state.scroll_down(3);
        assert_eq!(state.selected_index(), Some(2));

        // Cannot scroll beyond the last row
        state.scroll_down(3);
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn test_clamp_after_page_shrinks() {
        let mut state = SelectionState::new();
        for _ in 0..5 {
            state.scroll_down(10);
        }
        assert_eq!(state.selected_index(), Some(4));

        state.clamp(3);
        assert_eq!(state.selected_index(), Some(2));

        state.clamp(0);
        assert_eq!(state.selected_index(), None);

        state.deselect();
        state.clamp(5);
        assert_eq!(state.selected_index(), None);
    }
}
