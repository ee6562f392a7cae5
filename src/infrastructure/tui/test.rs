use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;
use tokio::time;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Headless terminal backed by `ratatui::backend::TestBackend`.
/// - enter/exit/suspend/resume are no-ops (no raw mode / alternate screen).
/// - next() pops queued events and yields `None` once the queue is drained,
///   optionally sleeping `pace` before each one so spawned tasks can run.
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    pace: Option<Duration>,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            pace: None,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn pace(mut self, interval: Duration) -> Self {
        self.pace = Some(interval);
        self
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// The last drawn frame, one string per row.
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.term.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// The last drawn frame as one string.
    pub fn contents(&self) -> String {
        self.rows().join("\n")
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        let area = self.term.backend().buffer().area;
        Ok(Size::new(area.width, area.height))
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        let pace = self.pace;
        Box::pin(async move {
            if let Some(interval) = pace {
                time::sleep(interval).await;
            }
            ev
        })
    }
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_events_drain_then_none() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Render])?;
        assert!(matches!(tui.next().await, Some(Event::Tick)));
        assert!(matches!(tui.next().await, Some(Event::Render)));
        assert!(tui.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_paced_events_let_spawned_tasks_run() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick])?.pace(Duration::from_millis(5));
        let task = tokio::spawn(async {});
        assert!(matches!(tui.next().await, Some(Event::Tick)));
        assert!(task.is_finished());
        Ok(())
    }

    #[test]
    fn test_draw_counts_and_captures() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.draw(&mut |f| f.render_widget(Paragraph::new("hello"), f.area()))?;
        assert_eq!(tui.draw_count(), 1);
        assert!(tui.rows()[0].starts_with("hello"));
        Ok(())
    }
}
