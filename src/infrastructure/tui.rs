pub mod real;
pub mod test;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::{Rect, Size};

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    /// The input stream ended
    Closed,
    /// Reading input failed
    Error(String),
    Tick,
    Render,
    FocusGained,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// The terminal as seen by the application loop.
pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn suspend(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;
    fn size(&self) -> Result<Size>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
