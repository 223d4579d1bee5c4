use ratatui::{prelude::*, widgets::Paragraph};

const KEY_HINTS: &str = "/ search  j/k move  h/l page  +/- size  1-4 filter  x delete  r reload  q quit";

pub struct StatusBarWidget<'a> {
    title: &'a str,
    message: Option<&'a str>,
    error: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            message: None,
            error: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    /// A failed fetch; shown instead of the status message
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1), // Title and key hints
                Constraint::Length(1), // Status message
            ],
        )
        .split(area);

        let title_line = Line::from(vec![
            Span::styled(self.title, Style::default().bold()),
            Span::raw("  "),
            Span::styled(KEY_HINTS, Style::default().fg(Color::Gray).italic()),
        ]);
        Paragraph::new(title_line)
            .style(Style::default().bg(Color::Black))
            .render(layout[1], buf);

        let message = match (self.error, self.message) {
            (Some(error), _) => Line::styled(
                format!("[Error] {error}"),
                Style::default().fg(Color::Red),
            ),
            (None, Some(message)) => Line::raw(message),
            (None, None) => Line::default(),
        };
        Paragraph::new(message).render(layout[2], buf);
    }
}
