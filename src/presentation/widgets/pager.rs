use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::state::{PageItem, PaginationState};

const ELLIPSIS: &str = "…";

/// The page button bar under a list:
/// `‹ Prev  1 … 6 [7] 8 … 10  Next ›   61-70 of 100 · 10 per page`
#[derive(Clone)]
pub struct PagerWidget<'a> {
    pagination: &'a PaginationState,
}

impl<'a> PagerWidget<'a> {
    pub fn new(pagination: &'a PaginationState) -> Self {
        Self { pagination }
    }

    /// One label per page button; the current page is bracketed
    pub fn page_labels(&self) -> Vec<String> {
        let current = self.pagination.current_page();
        self.pagination
            .page_numbers()
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) if page == current => format!("[{page}]"),
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => ELLIPSIS.to_string(),
            })
            .collect()
    }

    /// `61-70 of 100`, or `No results`
    pub fn range_label(&self) -> String {
        let pagination = self.pagination;
        if pagination.total_items() == 0 {
            return "No results".to_string();
        }
        format!(
            "{}-{} of {}",
            pagination.start_index() + 1,
            pagination.end_index(),
            pagination.total_items()
        )
    }

    fn nav_style(enabled: bool) -> Style {
        if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl<'a> Widget for PagerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let current = format!("[{}]", self.pagination.current_page());
        let mut spans = vec![
            Span::styled("‹ Prev", Self::nav_style(self.pagination.has_previous_page())),
            Span::raw("  "),
        ];
        for (i, label) in self.page_labels().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if label == current {
                Style::default().bold().reversed()
            } else {
                Style::default()
            };
            spans.push(Span::styled(label, style));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Next ›",
            Self::nav_style(self.pagination.has_next_page()),
        ));
        spans.push(Span::styled(
            format!(
                "   {} · {} per page",
                self.range_label(),
                self.pagination.page_size()
            ),
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
