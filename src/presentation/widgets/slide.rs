use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// One rendered slide, laid out as a centered article with a progress
/// indicator on the last row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideWidget<'a> {
    text: Text<'a>,
    max_width: u16,
    position: usize,
    total: usize,
    progress_style: Style,
}

impl<'a> SlideWidget<'a> {
    pub fn new(text: Text<'a>, max_width: u16) -> Self {
        Self {
            text,
            max_width,
            position: 0,
            total: 0,
            progress_style: Style::default(),
        }
    }

    pub fn progress(mut self, position: usize, total: usize, style: Style) -> Self {
        self.position = position;
        self.total = total;
        self.progress_style = style;
        self
    }

    /// Width available to the slide text inside `area`.
    pub fn article_width(area: Rect, max_width: u16) -> u16 {
        area.width.saturating_sub(4).min(max_width).max(1)
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let width = Self::article_width(area, self.max_width);
        let [article] = Layout::horizontal([Constraint::Length(width)])
            .flex(layout::Flex::Center)
            .areas(body);
        let article = article.inner(Margin::new(0, 1));

        Paragraph::new(self.text)
            .wrap(Wrap { trim: false })
            .render(article, buf);

        if self.total > 0 {
            Line::styled(
                format!("{}/{} ", self.position, self.total),
                self.progress_style,
            )
            .right_aligned()
            .render(footer, buf);
        }
    }
}
