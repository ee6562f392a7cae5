//! Presentation state
//!
//! Plain data and the navigation pipeline. Nothing here touches the terminal.

pub mod clamp;
pub mod clock;
pub mod debounce;
pub mod deck;
pub mod navigation;

pub use clamp::clamp;
pub use clock::{Clock, TimerFormat};
pub use debounce::Debouncer;
pub use deck::{split_slides, Deck};
pub use navigation::{step_delta, Command, Stepper};
