//! Presentation layer
//!
//! - Components that react to actions and draw themselves
//! - Reusable widgets
//! - Markdown rendering
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod markdown;
pub mod widgets;
