//! Components
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::{Listable, TableRow},
};

pub mod list_view;

pub use list_view::ListView;

/// Collection of all components
pub struct Components {
    pub list_view: ListView,
}

impl Components {
    pub fn new() -> Self {
        Self {
            list_view: ListView::new(),
        }
    }

    /// Main rendering entry point
    pub fn render<T: Listable + TableRow>(&mut self, frame: &mut Frame, state: &AppState<T>) {
        let area = frame.area();
        self.list_view.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
