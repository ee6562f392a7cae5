//! Infrastructure layer
//!
//! Everything that talks to the outside world:
//! - Terminal handling
//! - CLI argument processing
//! - Configuration files
//! - Reading the slide deck from disk

pub mod cli;
pub mod config;
pub mod deck_loader;
pub mod tui;
