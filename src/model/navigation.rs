use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use strum::Display;

use super::clamp::clamp;

/// Keys the presenter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Command {
    Esc,
    Left,
    Up,
    Right,
    Down,
    Space,
    Home,
    End,
}

impl Command {
    /// Maps a key press to a command. Modified keys (except shift) are not
    /// navigation keys.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if !key
            .modifiers
            .difference(KeyModifiers::SHIFT)
            .is_empty()
        {
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(Command::Esc),
            KeyCode::Left => Some(Command::Left),
            KeyCode::Up => Some(Command::Up),
            KeyCode::Right => Some(Command::Right),
            KeyCode::Down => Some(Command::Down),
            KeyCode::Char(' ') => Some(Command::Space),
            KeyCode::Home => Some(Command::Home),
            KeyCode::End => Some(Command::End),
            _ => None,
        }
    }
}

/// Turns a (possibly unrecognised) command into a step delta. `span` is the
/// number of slides, used by the jump commands.
pub fn step_delta(command: Option<Command>, span: usize) -> i64 {
    let span = i64::try_from(span).unwrap_or(i64::MAX);
    match command {
        Some(Command::Up | Command::Left) => -1,
        Some(Command::Right | Command::Down | Command::Space) => 1,
        Some(Command::Home) => -span,
        Some(Command::End) => span,
        Some(Command::Esc) | None => 0,
    }
}

/// Accumulates step deltas, keeping the result within `[0, max]`.
///
/// Step `0` is the welcome screen, step `n` is slide `n - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stepper {
    step: usize,
    max: usize,
}

impl Stepper {
    pub fn new(max: usize) -> Self {
        Self { step: 0, max }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn apply(&mut self, delta: i64) -> usize {
        let max = i64::try_from(self.max).unwrap_or(i64::MAX);
        let current = i64::try_from(self.step).unwrap_or(i64::MAX);
        let next = clamp(0, max, true)(current.saturating_add(delta));
        // `next` is within [0, max], so it always fits back into usize.
        self.step = usize::try_from(next).unwrap_or(self.max);
        self.step
    }

    /// Applies a command through the step reducer.
    pub fn navigate(&mut self, command: Option<Command>) -> usize {
        self.apply(step_delta(command, self.max))
    }
}
