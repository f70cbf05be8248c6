//! Resolution of per-call options against the defaults registry.
//!
//! Each prompt resolves everything it needs in one pass before touching the
//! terminal, so a missing option surfaces before anything is drawn.

use log::debug;

use crate::{
    error::PromptError,
    tui::Theme,
    validators::{ItemListValidator, ItemValidator, StringValidator},
};

use super::{DefaultsRegistry, OptionKey, PromptKind, PromptOptions};

struct Resolver<'a> {
    kind: PromptKind,
    options: &'a PromptOptions,
    defaults: Option<&'a PromptOptions>,
}

impl<'a> Resolver<'a> {
    fn new(kind: PromptKind, options: &'a PromptOptions, registry: &'a DefaultsRegistry) -> Self {
        Self {
            kind,
            options,
            defaults: registry.defaults_for(kind),
        }
    }

    /// Explicit value first, then the registered default.
    fn get<V: Clone>(
        &self,
        option: OptionKey,
        field: fn(&PromptOptions) -> &Option<V>,
    ) -> Result<V, PromptError> {
        field(self.options)
            .as_ref()
            .or_else(|| self.defaults.and_then(|d| field(d).as_ref()))
            .cloned()
            .ok_or(PromptError::MissingOption {
                option,
                kind: self.kind,
            })
    }

    fn form(&self) -> Result<FormConfig, PromptError> {
        Ok(FormConfig {
            title: self.get(OptionKey::Title, |o| &o.title)?,
            description: self.get(OptionKey::Description, |o| &o.description)?,
            width: self.get(OptionKey::Width, |o| &o.width)?,
            height: self.get(OptionKey::Height, |o| &o.height)?,
            theme: self.get(OptionKey::Theme, |o| &o.theme)?,
        })
    }
}

/// Settings shared by every prompt.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub title: String,
    pub description: String,
    /// 0 means automatic.
    pub width: u16,
    /// 0 means the terminal height.
    pub height: u16,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub form: FormConfig,
    pub prompt_prefix: String,
    pub placeholder: String,
    pub validator: StringValidator,
}

impl InputConfig {
    pub fn resolve(
        options: &PromptOptions,
        registry: &DefaultsRegistry,
    ) -> Result<Self, PromptError> {
        let r = Resolver::new(PromptKind::Input, options, registry);
        let config = Self {
            form: r.form()?,
            prompt_prefix: r.get(OptionKey::PromptPrefix, |o| &o.prompt_prefix)?,
            placeholder: r.get(OptionKey::Placeholder, |o| &o.placeholder)?,
            validator: r.get(OptionKey::StringValidator, |o| &o.string_validator)?,
        };
        debug!("resolved input prompt config: title={}", config.form.title);
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub form: FormConfig,
    pub item_validator: ItemValidator,
}

impl SelectConfig {
    pub fn resolve(
        options: &PromptOptions,
        registry: &DefaultsRegistry,
    ) -> Result<Self, PromptError> {
        let r = Resolver::new(PromptKind::Select, options, registry);
        let config = Self {
            form: r.form()?,
            item_validator: r.get(OptionKey::ItemValidator, |o| &o.item_validator)?,
        };
        debug!("resolved select prompt config: title={}", config.form.title);
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct MultiSelectConfig {
    pub form: FormConfig,
    pub item_validator: ItemValidator,
    pub list_validator: ItemListValidator,
}

impl MultiSelectConfig {
    pub fn resolve(
        options: &PromptOptions,
        registry: &DefaultsRegistry,
    ) -> Result<Self, PromptError> {
        let r = Resolver::new(PromptKind::MultiSelect, options, registry);
        let config = Self {
            form: r.form()?,
            item_validator: r.get(OptionKey::ItemValidator, |o| &o.item_validator)?,
            list_validator: r.get(OptionKey::ItemListValidator, |o| &o.item_list_validator)?,
        };
        debug!("resolved multi-select prompt config: title={}", config.form.title);
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub form: FormConfig,
    pub affirmative: String,
    pub negative: String,
}

impl ConfirmConfig {
    pub fn resolve(
        options: &PromptOptions,
        registry: &DefaultsRegistry,
    ) -> Result<Self, PromptError> {
        let r = Resolver::new(PromptKind::Confirm, options, registry);
        let config = Self {
            form: r.form()?,
            affirmative: r.get(OptionKey::Affirmative, |o| &o.affirmative_label)?,
            negative: r.get(OptionKey::Negative, |o| &o.negative_label)?,
        };
        debug!("resolved confirm prompt config: title={}", config.form.title);
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub form: FormConfig,
    pub case_sensitive: bool,
}

impl SearchConfig {
    pub fn resolve(
        options: &PromptOptions,
        registry: &DefaultsRegistry,
    ) -> Result<Self, PromptError> {
        let r = Resolver::new(PromptKind::Search, options, registry);
        let config = Self {
            form: r.form()?,
            case_sensitive: r.get(OptionKey::CaseSensitiveFilter, |o| &o.case_sensitive_filter)?,
        };
        debug!("resolved search prompt config: title={}", config.form.title);
        Ok(config)
    }
}
