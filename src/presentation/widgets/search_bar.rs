use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::{core::state::filter::ALL, domain::Facet};

/// Search box plus the facet dropdowns of a list view, on one line
pub struct SearchBarWidget<'a> {
    text: &'a str,
    focused: bool,
    facets: Vec<(Facet, Option<&'a str>)>,
    loading: bool,
}

impl<'a> SearchBarWidget<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            focused: false,
            facets: Vec::new(),
            loading: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn facets(mut self, facets: Vec<(Facet, Option<&'a str>)>) -> Self {
        self.facets = facets;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn facet_labels(&self) -> Vec<String> {
        self.facets
            .iter()
            .map(|(facet, value)| format!("{facet}: {}", value.unwrap_or(ALL)))
            .collect()
    }
}

impl<'a> Widget for SearchBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let label_style = if self.focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled("Search: ", label_style), Span::raw(self.text)];
        if self.focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        } else if self.text.is_empty() {
            spans.push(Span::styled(
                "press / to search",
                Style::default().fg(Color::DarkGray).italic(),
            ));
        }
        for label in self.facet_labels() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(label, Style::default().fg(Color::Cyan)));
        }
        if self.loading {
            spans.push(Span::styled("   loading…", Style::default().fg(Color::Gray)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(widget: SearchBarWidget, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_facet_labels() {
        let widget = SearchBarWidget::new("")
            .facets(vec![(Facet::Role, Some("mentor")), (Facet::Status, None)]);
        assert_eq!(widget.facet_labels(), vec!["role: mentor", "status: all"]);
    }

    #[test]
    fn test_render_unfocused_empty() {
        let line = rendered(SearchBarWidget::new(""), 60);
        assert_eq!(line.trim_end(), "Search: press / to search");
    }

    #[test]
    fn test_render_focused_with_facets_and_loading() {
        let widget = SearchBarWidget::new("ada")
            .focused(true)
            .facets(vec![(Facet::Kind, Some("job"))])
            .loading(true);
        let line = rendered(widget, 60);
        assert_eq!(line.trim_end(), "Search: ada▏   type: job   loading…");
    }
}
