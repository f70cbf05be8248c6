//! Entry points for running prompts.
//!
//! A [`Prompter`] pairs a [`DefaultsRegistry`] with a [`FormRenderer`]. Every
//! call resolves its configuration first, so a missing option or a bad item
//! list is reported before anything is drawn.

use std::io;

use log::{debug, info};

use crate::{
    config::{
        ConfirmConfig, DefaultsRegistry, InputConfig, MultiSelectConfig, PromptKind,
        PromptOptions, SearchConfig, SelectConfig,
    },
    error::PromptError,
    item::Item,
    search::{SearchHost, run_search},
    tui::{Response, TerminalRenderer},
    validators::{ItemValidator, ValidationResult},
};

/// Runs a fully configured prompt to completion.
///
/// The search prompt is driven through the [`SearchHost`] supertrait, one key
/// at a time; the other prompts run to completion inside the renderer.
pub trait FormRenderer: SearchHost {
    fn input(&mut self, config: &InputConfig) -> io::Result<Response<String>>;

    /// Returns the index of the chosen key.
    fn select(&mut self, config: &SelectConfig, keys: &[&str]) -> io::Result<Response<usize>>;

    /// Returns the indices of the chosen keys, in list order.
    fn multi_select(
        &mut self,
        config: &MultiSelectConfig,
        keys: &[&str],
    ) -> io::Result<Response<Vec<usize>>>;

    fn confirm(&mut self, config: &ConfirmConfig) -> io::Result<Response<bool>>;
}

/// Runs prompts against an explicit defaults registry.
///
/// ```no_run
/// use promptkit::{Item, PromptOptions, Prompter};
///
/// let mut prompter = Prompter::new();
/// let items = vec![Item::new("apple", 1), Item::new("banana", 2)];
/// let options = PromptOptions::builder().title("fruit:").build();
/// let chosen = prompter.search(&options, &items)?;
/// println!("{}", chosen.payload());
/// # Ok::<(), promptkit::PromptError>(())
/// ```
pub struct Prompter<R = TerminalRenderer> {
    registry: DefaultsRegistry,
    renderer: R,
}

impl Prompter<TerminalRenderer> {
    /// A terminal prompter with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(DefaultsRegistry::default())
    }

    #[must_use]
    pub fn with_registry(registry: DefaultsRegistry) -> Self {
        Self::with_renderer(registry, TerminalRenderer::new())
    }
}

impl Default for Prompter<TerminalRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRenderer> Prompter<R> {
    pub fn with_renderer(registry: DefaultsRegistry, renderer: R) -> Self {
        Self { registry, renderer }
    }

    pub fn registry(&self) -> &DefaultsRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DefaultsRegistry {
        &mut self.registry
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Reads one validated line of text.
    pub fn input(&mut self, options: &PromptOptions) -> Result<String, PromptError> {
        let config = InputConfig::resolve(options, &self.registry)?;

        let value = self
            .renderer
            .input(&config)?
            .into_result(PromptKind::Input)?;
        info!("input prompt submitted {} chars", value.chars().count());
        Ok(value)
    }

    /// Chooses one item. A single item is returned without prompting.
    pub fn select<'a, T>(
        &mut self,
        options: &PromptOptions,
        items: &'a [Item<T>],
    ) -> Result<&'a Item<T>, PromptError> {
        let config = SelectConfig::resolve(options, &self.registry)?;
        let keys = validate_items(items, &config.item_validator)?;

        if let [only] = items {
            debug!("select prompt skipped: single item");
            return Ok(only);
        }

        let index = self
            .renderer
            .select(&config, &keys)?
            .into_result(PromptKind::Select)?;
        info!("select prompt chose item {index}");
        items.get(index).ok_or(PromptError::NoSelection)
    }

    /// Chooses any number of items, returned in list order.
    pub fn multi_select<'a, T>(
        &mut self,
        options: &PromptOptions,
        items: &'a [Item<T>],
    ) -> Result<Vec<&'a Item<T>>, PromptError> {
        let config = MultiSelectConfig::resolve(options, &self.registry)?;
        let keys = validate_items(items, &config.item_validator)?;

        let indices = self
            .renderer
            .multi_select(&config, &keys)?
            .into_result(PromptKind::MultiSelect)?;
        info!("multi-select prompt chose {} items", indices.len());
        Ok(indices.into_iter().filter_map(|i| items.get(i)).collect())
    }

    pub fn confirm(&mut self, options: &PromptOptions) -> Result<bool, PromptError> {
        let config = ConfirmConfig::resolve(options, &self.registry)?;

        let answer = self
            .renderer
            .confirm(&config)?
            .into_result(PromptKind::Confirm)?;
        info!("confirm prompt answered {answer}");
        Ok(answer)
    }

    /// Live-filtered search over `items`.
    pub fn search<'a, T>(
        &mut self,
        options: &PromptOptions,
        items: &'a [Item<T>],
    ) -> Result<&'a Item<T>, PromptError> {
        let config = SearchConfig::resolve(options, &self.registry)?;
        let chosen = run_search(items, config, &mut self.renderer)?;
        info!("search prompt chose {chosen}");
        Ok(chosen)
    }
}

/// Checks every item up front and returns their keys.
fn validate_items<'a, T>(
    items: &'a [Item<T>],
    validator: &ItemValidator,
) -> Result<Vec<&'a str>, PromptError> {
    if items.is_empty() {
        return Err(PromptError::EmptyPool);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match validator.validate(item.key()) {
            ValidationResult::Valid => Ok(item.key()),
            ValidationResult::Invalid(reason) => Err(PromptError::InvalidItem { index, reason }),
        })
        .collect()
}
