use std::io;

use derive_more::{Display, Error};

use crate::config::{OptionKey, PromptKind};

/// Errors returned by every prompt entry point.
///
/// Nothing is retried or recovered internally: each failure is handed back
/// to the immediate caller as soon as it is detected.
#[derive(Debug, Display, Error)]
pub enum PromptError {
    /// A required option has neither an explicit value nor a registered default.
    #[display("prompt config error: option {option} not registered for {kind} prompt")]
    MissingOption { option: OptionKey, kind: PromptKind },

    /// The prompt was invoked with zero items.
    #[display("item pool is empty")]
    EmptyPool,

    /// An item failed pre-flight validation.
    #[display("bad item list: item {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    /// The user dismissed the prompt with Escape.
    #[display("{kind} canceled")]
    Cancelled { kind: PromptKind },

    /// Enter was pressed while nothing matched the filter.
    #[display("no item selected")]
    NoSelection,

    /// The user asked the whole program to stop (Ctrl+C).
    #[display("interrupted")]
    Interrupted,

    /// The terminal could not be driven.
    #[display("renderer failure: {_0}")]
    Renderer(#[error(source)] io::Error),
}

impl PromptError {
    /// Returns true for user-initiated aborts as opposed to configuration,
    /// validation or terminal failures.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::Interrupted)
    }
}

impl From<io::Error> for PromptError {
    fn from(value: io::Error) -> Self {
        Self::Renderer(value)
    }
}
