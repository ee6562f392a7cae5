//! # Keynote
//!
//! A terminal presenter for decks of markdown slides.
//!
//! Slides are read from the `.md` files of a directory. Each file is split
//! into slides wherever three or more consecutive newlines appear. The
//! presentation starts on a welcome screen (step 0); step `n` shows slide
//! `n - 1`, and the arrow keys and space move between them.
//!
//! ## Modules
//!
//! - [`model`] - Pure presentation state: deck, stepping, debouncing, clock
//! - [`action`] - Actions exchanged between the loop and components
//! - [`app`] - The application loop
//! - [`infrastructure`] - Terminal, configuration, CLI and slide loading
//! - [`presentation`] - Components, widgets and markdown rendering
//! - [`utils`] - Logging, panic handling and paths

pub mod action;
pub mod app;
pub mod infrastructure;
pub mod model;
pub mod presentation;
pub mod utils;

pub use app::App;

pub type Result<T> = color_eyre::eyre::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
