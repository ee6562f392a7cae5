use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::Command;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// Re-read the slide directory
    Reload,
    SlidesLoaded(Vec<String>),
    LoadFailed(String),
    /// One second of presentation time has passed
    ClockTick,
    Navigate(Command),
}
