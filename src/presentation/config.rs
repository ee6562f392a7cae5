//! UI configuration
//!
//! Keybindings and styles as they appear in the configuration file.

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
