use color_eyre::eyre::Result;
use ratatui::prelude::*;

use crate::action::Action;
use crate::infrastructure::config::Config;
use crate::infrastructure::tui::Frame;
use crate::model::{Clock, TimerFormat};
use crate::presentation::components::Component;
use crate::presentation::widgets::TimerWidget;

/// Elapsed presentation time in the top-right corner.
#[derive(Debug, Default)]
pub struct Timer {
    clock: Clock,
    format: TimerFormat,
    style: Style,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> u64 {
        self.clock.elapsed()
    }
}

impl Component for Timer {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.format = config.keynote.timer_format;
        self.style = config.styles.style("timer");
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::ClockTick {
            self.clock.tick();
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let widget = TimerWidget::new(self.clock.format(self.format), self.style);
        let overlay = widget.area(area);
        f.render_widget(widget, overlay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_counts_clock_ticks_only() -> Result<()> {
        let mut timer = Timer::new();
        timer.update(Action::ClockTick)?;
        timer.update(Action::Tick)?;
        timer.update(Action::Render)?;
        timer.update(Action::ClockTick)?;
        assert_eq!(timer.elapsed(), 2);
        Ok(())
    }

    #[test]
    fn test_draw_in_corner() -> Result<()> {
        let mut timer = Timer::new();
        let mut config = Config::default();
        config.keynote.timer_format = TimerFormat::Seconds;
        timer.register_config_handler(config)?;
        for _ in 0..12 {
            timer.update(Action::ClockTick)?;
        }

        let mut terminal = Terminal::new(TestBackend::new(10, 2))?;
        terminal.draw(|f| {
            let area = f.area();
            let _ = timer.draw(f, area);
        })?;
        terminal.backend().assert_buffer_lines(["       12 ", "          "]);
        Ok(())
    }
}
