use std::collections::HashMap;

use crate::{
    tui::Theme,
    validators::{self, ItemListValidator, ItemValidator, StringValidator},
};

use super::{PromptKind, PromptOptions};

/// Fallback option values, layered per prompt kind.
///
/// The registry is an ordinary value: build one, tweak it, clone it for an
/// isolated override and pass it to a [`crate::Prompter`].
#[derive(Debug, Clone)]
pub struct DefaultsRegistry {
    defaults: HashMap<PromptKind, PromptOptions>,
}

impl DefaultsRegistry {
    /// A registry with nothing registered for any kind.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            defaults: HashMap::new(),
        }
    }

    #[must_use]
    pub fn defaults_for(&self, kind: PromptKind) -> Option<&PromptOptions> {
        self.defaults.get(&kind)
    }

    pub fn defaults_for_mut(&mut self, kind: PromptKind) -> &mut PromptOptions {
        self.defaults.entry(kind).or_default()
    }

    /// Edits the defaults of one kind in place.
    ///
    /// ```
    /// use promptkit::{DefaultsRegistry, PromptKind};
    ///
    /// let mut registry = DefaultsRegistry::default();
    /// registry.set(PromptKind::Confirm, |d| d.affirmative_label = Some("Sure".into()));
    /// ```
    pub fn set<F>(&mut self, kind: PromptKind, edit: F) -> &mut Self
    where
        F: FnOnce(&mut PromptOptions),
    {
        edit(self.defaults_for_mut(kind));
        self
    }

    /// Replaces every default of one kind.
    pub fn replace(&mut self, kind: PromptKind, defaults: PromptOptions) -> Option<PromptOptions> {
        self.defaults.insert(kind, defaults)
    }
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        for kind in PromptKind::ALL {
            let defaults = registry.defaults_for_mut(kind);
            defaults.description = Some(String::new());
            defaults.width = Some(0);
            defaults.height = Some(0);
            defaults.theme = Some(Theme::default());

            match kind {
                PromptKind::Input => {
                    defaults.title = Some("user input:".into());
                    defaults.prompt_prefix = Some("> ".into());
                    defaults.placeholder = Some(String::new());
                    defaults.string_validator = Some(StringValidator::new(validators::accept_any));
                }
                PromptKind::Select => {
                    defaults.title = Some("select one item:".into());
                    defaults.item_validator = Some(ItemValidator::new(validators::non_empty_key));
                }
                PromptKind::MultiSelect => {
                    defaults.title = Some("select item(s):".into());
                    defaults.item_validator = Some(ItemValidator::new(validators::non_empty_key));
                    defaults.item_list_validator =
                        Some(ItemListValidator::new(validators::accept_any_list));
                }
                PromptKind::Confirm => {
                    defaults.title = Some("confirm:".into());
                    defaults.affirmative_label = Some("Yes".into());
                    defaults.negative_label = Some("No".into());
                }
                PromptKind::Search => {
                    defaults.title = Some("search item:".into());
                    defaults.case_sensitive_filter = Some(false);
                }
            }
        }

        registry
    }
}
