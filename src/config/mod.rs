//! Prompt configuration: per-call options, per-kind defaults and the
//! resolution pass that turns both into a fully-specified form config.

mod loader;
mod options;
mod registry;
mod resolve;
mod show;

use derive_more::Display;

pub use loader::{DefaultsFile, KindDefaults, default_defaults_path, load_registry};
pub use options::PromptOptions;
pub use registry::DefaultsRegistry;
pub use resolve::{
    ConfirmConfig, FormConfig, InputConfig, MultiSelectConfig, SearchConfig, SelectConfig,
};
pub use show::show_defaults;

#[cfg(test)]
mod loader_tests;

/// The kinds of prompt offered, each with its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, clap::ValueEnum)]
pub enum PromptKind {
    #[display("input")]
    Input,
    #[display("select")]
    Select,
    #[display("multi-select")]
    MultiSelect,
    #[display("confirm")]
    Confirm,
    #[display("search")]
    Search,
}

impl PromptKind {
    pub const ALL: [PromptKind; 5] = [
        PromptKind::Input,
        PromptKind::Select,
        PromptKind::MultiSelect,
        PromptKind::Confirm,
        PromptKind::Search,
    ];
}

/// Names of the recognized options, used when reporting a missing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OptionKey {
    #[display("title")]
    Title,
    #[display("description")]
    Description,
    #[display("prompt-prefix")]
    PromptPrefix,
    #[display("placeholder")]
    Placeholder,
    #[display("width")]
    Width,
    #[display("height")]
    Height,
    #[display("case-sensitive-filter")]
    CaseSensitiveFilter,
    #[display("string-validator")]
    StringValidator,
    #[display("item-validator")]
    ItemValidator,
    #[display("item-list-validator")]
    ItemListValidator,
    #[display("affirmative-label")]
    Affirmative,
    #[display("negative-label")]
    Negative,
    #[display("visual-theme")]
    Theme,
}
