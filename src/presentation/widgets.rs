//! Stateless widgets drawn by the components.

pub mod slide;
pub mod timer;
pub mod welcome;

pub use slide::SlideWidget;
pub use timer::TimerWidget;
pub use welcome::{WelcomeStyles, WelcomeWidget};
