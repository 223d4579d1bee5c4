use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget};

use crate::domain::TableRow;

/// The rows of the current page as a table, with the highlighted row
/// reversed. Shows a placeholder instead when there is nothing to list.
pub struct ListTableWidget<'a, T> {
    rows: &'a [&'a T],
    selected: Option<usize>,
    loading: bool,
    title: &'a str,
}

impl<'a, T: TableRow> ListTableWidget<'a, T> {
    pub fn new(title: &'a str, rows: &'a [&'a T]) -> Self {
        Self {
            rows,
            selected: None,
            loading: false,
            title,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Message shown when the page has no rows
    pub fn placeholder(&self) -> &'static str {
        if self.loading {
            "Loading…"
        } else {
            "No matching records"
        }
    }

    /// Each column as wide as its widest cell, header included
    fn widths(&self) -> Vec<Constraint> {
        let headers = T::headers();
        let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
        for row in self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
            .into_iter()
            .map(|width| Constraint::Max(u16::try_from(width).unwrap_or(u16::MAX)))
            .collect()
    }
}

impl<'a, T: TableRow> Widget for ListTableWidget<'a, T> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL).title(self.title);

        if self.rows.is_empty() {
            Paragraph::new(self.placeholder())
                .style(Style::default().fg(Color::Gray).italic())
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(T::headers().iter().map(|header| Cell::from(*header)))
            .style(Style::default().bold().underlined());
        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells().into_iter().map(Cell::from)));
        let table = Table::new(rows, self.widths())
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(Style::default().reversed());

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
