//! Components
//!
//! Each component keeps its own state, reacts to actions and draws itself
//! into the frame. The application loop owns them as trait objects.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::{Rect, Size};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    infrastructure::config::Config,
    infrastructure::tui::{Event, Frame},
};

pub mod keynote;
pub mod timer;

pub use keynote::Keynote;
pub use timer::Timer;

pub trait Component {
    /// Gives the component a way to emit actions asynchronously.
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    /// Called once with the terminal size before the first frame.
    fn init(&mut self, area: Size) -> Result<()> {
        let _ = area;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        match event {
            Some(Event::Key(key_event)) => self.handle_key_events(key_event),
            _ => Ok(None),
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}
