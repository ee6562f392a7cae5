use std::future::Future;
use std::io::{stdout, Stdout};
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableFocusChange, EnableFocusChange, Event as CrosstermEvent, EventStream,
        KeyEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
#[cfg(not(windows))]
use signal_hook::{consts::signal::SIGTSTP, low_level};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time,
};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Leaves raw mode and the alternate screen if they are active.
///
/// Safe to call from a panic hook where no `RealTui` is reachable.
pub fn restore() -> Result<()> {
    if terminal::is_raw_mode_enabled()? {
        crossterm::execute!(stdout(), LeaveAlternateScreen, DisableFocusChange, cursor::Show)?;
        terminal::disable_raw_mode()?;
    }
    Ok(())
}

/// Crossterm-backed terminal that emits ticks, render requests and input
/// events on an internal channel.
pub struct RealTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    task: JoinHandle<()>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
}

impl RealTui {
    pub fn new() -> Result<Self> {
        let tick_rate = 4.0;
        let frame_rate = 60.0;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let cancellation_token = CancellationToken::new();
        let task = tokio::spawn(async {});
        Ok(Self {
            terminal,
            task,
            cancellation_token,
            event_rx,
            event_tx,
            frame_rate,
            tick_rate,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    fn start(&mut self) {
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let cancellation_token = self.cancellation_token.clone();
        let event_tx = self.event_tx.clone();
        self.task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = time::interval(tick_delay);
            let mut render_interval = time::interval(render_delay);
            loop {
                let tick_delay = tick_interval.tick();
                let render_delay = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    _ = cancellation_token.cancelled() => {
                        break;
                    }
                    maybe_event = crossterm_event => {
                        let event = match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            Some(Ok(CrosstermEvent::Resize(x, y))) => Event::Resize(x, y),
                            Some(Ok(CrosstermEvent::FocusGained)) => Event::FocusGained,
                            // focus loss, mouse and paste are ignored
                            Some(Ok(_)) => continue,
                            Some(Err(e)) => Event::Error(e.to_string()),
                            None => {
                                let _ = event_tx.send(Event::Closed);
                                break;
                            }
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    },
                    _ = tick_delay => {
                        let _ = event_tx.send(Event::Tick);
                    },
                    _ = render_delay => {
                        let _ = event_tx.send(Event::Render);
                    },
                }
            }
        });
    }

    fn stop(&self) {
        self.cancel();
        let mut counter = 0;
        while !self.task.is_finished() {
            std::thread::sleep(Duration::from_millis(1));
            counter += 1;
            if counter > 50 {
                self.task.abort();
            }
            if counter > 100 {
                log::error!("Failed to abort task in 100 milliseconds for unknown reason");
                break;
            }
        }
    }

    fn cancel(&self) {
        self.cancellation_token.cancel();
    }
}

impl TuiLike for RealTui {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(stdout(), EnterAlternateScreen, EnableFocusChange, cursor::Hide)?;
        self.start();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.stop();
        if terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
        }
        restore()
    }

    fn suspend(&mut self) -> Result<()> {
        self.exit()?;
        #[cfg(not(windows))]
        low_level::raise(SIGTSTP)?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()?;
        self.terminal.clear()?;
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(self.event_rx.recv())
    }
}

impl Drop for RealTui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("Failed to restore terminal: {e:?}");
        }
    }
}
