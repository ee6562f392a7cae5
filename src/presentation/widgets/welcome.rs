use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget, Wrap};

const LOGO: [&str; 5] = [
    "╭───────────────╮",
    "│   ▶ ▬▬▬▬▬▬    │",
    "│     ▬▬▬▬      │",
    "╰───────┬───────╯",
    "       ╱ ╲       ",
];

/// Styles of the welcome screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WelcomeStyles {
    pub logo: Style,
    pub title: Style,
    pub link: Style,
    pub notice: Style,
}

/// Screen shown at step 0, before the first slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WelcomeWidget {
    title: String,
    subtitle: String,
    link: String,
    notice: Option<String>,
    styles: WelcomeStyles,
}

impl WelcomeWidget {
    pub fn new(title: String, subtitle: String, link: String, styles: WelcomeStyles) -> Self {
        Self {
            title,
            subtitle,
            link,
            notice: None,
            styles,
        }
    }

    /// A one-line message shown under the texts, e.g. a failed load.
    pub fn notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = LOGO
            .iter()
            .map(|row| Line::styled(*row, self.styles.logo))
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(self.title.clone(), self.styles.title));
        lines.push(Line::default());
        lines.push(Line::raw(self.subtitle.clone()));
        lines.push(Line::styled(self.link.clone(), self.styles.link));
        if let Some(notice) = &self.notice {
            lines.push(Line::default());
            lines.push(Line::styled(notice.clone(), self.styles.notice));
        }
        lines
    }
}

impl Widget for WelcomeWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines = self.lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(layout::Flex::Center)
            .areas(area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(widget: WelcomeWidget) -> String {
        let area = Rect::new(0, 0, 60, 20);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_texts() {
        let widget = WelcomeWidget::new(
            "Keynote".into(),
            "Press space".into(),
            "See the docs".into(),
            WelcomeStyles::default(),
        );
        let content = render(widget);
        assert!(content.contains("Keynote"));
        assert!(content.contains("Press space"));
        assert!(content.contains("See the docs"));
        assert!(content.contains("╭───────────────╮"));
    }

    #[test]
    fn test_render_notice() {
        let widget = WelcomeWidget::new(
            "Keynote".into(),
            String::new(),
            String::new(),
            WelcomeStyles::default(),
        )
        .notice(Some("failed to read directory slides".into()));
        assert!(render(widget).contains("failed to read directory slides"));
    }
}
