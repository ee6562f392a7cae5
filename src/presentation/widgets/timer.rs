use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

/// The elapsed time, drawn over whatever is below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerWidget {
    time: String,
    style: Style,
}

impl TimerWidget {
    pub fn new(time: String, style: Style) -> Self {
        Self { time, style }
    }

    /// Top-right corner of `area`, just large enough for the time.
    pub fn area(&self, area: Rect) -> Rect {
        let width = u16::try_from(self.time.width() + 2)
            .unwrap_or(u16::MAX)
            .min(area.width);
        Rect::new(
            area.right().saturating_sub(width),
            area.top(),
            width,
            area.height.min(1),
        )
    }
}

impl Widget for TimerWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Clear.render(area, buf);
        Paragraph::new(format!(" {} ", self.time))
            .style(self.style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_area_top_right() {
        let widget = TimerWidget::new("00:01:02".into(), Style::default());
        assert_eq!(widget.area(Rect::new(0, 0, 80, 24)), Rect::new(70, 0, 10, 1));
    }

    #[test]
    fn test_area_narrow_terminal() {
        let widget = TimerWidget::new("00:01:02".into(), Style::default());
        assert_eq!(widget.area(Rect::new(0, 0, 4, 24)), Rect::new(0, 0, 4, 1));
    }

    #[test]
    fn test_render_overwrites_content() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buffer = Buffer::with_lines(["xxxxxxxxxxxx"]);
        let widget = TimerWidget::new("42".into(), Style::default());
        let timer_area = widget.area(area);
        widget.render(timer_area, &mut buffer);
        assert_eq!(buffer, Buffer::with_lines(["xxxxxxxx 42 "]));
    }
}
