//! Terminal form renderer built on ratatui.
//!
//! - `TextInput` - Text input with validation
//! - `Select` - Single selection from a list
//! - `MultiSelect` - Multiple selection with toggle
//! - `Confirm` - Yes/no choice
//! - `TerminalSearchHost` - Terminal side of the search prompt

mod app;
pub mod components;
mod renderer;
mod theme;

pub use app::TerminalApp;
pub use components::Response;
pub use renderer::TerminalRenderer;
pub use theme::Theme;
