//! Terminal prompts: text input, select, multi-select, confirm and a
//! live-filtered search.
//!
//! Options are resolved per call against a [`DefaultsRegistry`] holding
//! per-kind defaults; see [`Prompter`] for the entry points.

mod common;
pub mod config;
mod error;
mod item;
mod logging;
mod prompter;
pub mod search;
pub mod tui;
pub mod validators;

pub use common::{PROJECT_NAME, PROJECT_VERSION, project_config_dir};
pub use config::{DefaultsRegistry, OptionKey, PromptKind, PromptOptions, load_registry, show_defaults};
pub use error::PromptError;
pub use item::{Item, items_from_keys};
pub use logging::Logging;
pub use prompter::{FormRenderer, Prompter};
pub use validators::ValidationResult;
