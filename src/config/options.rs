use bon::Builder;

use crate::{
    tui::Theme,
    validators::{ItemListValidator, ItemValidator, StringValidator},
};

/// Options for a single prompt call, or the defaults registered for one
/// prompt kind.
///
/// Every field is optional: an unset field falls back to the registry, and a
/// field unset in both places is a configuration error for the prompts that
/// need it.
///
/// ```
/// use promptkit::PromptOptions;
///
/// let options = PromptOptions::builder()
///     .title("Pick a fruit")
///     .height(12)
///     .case_sensitive_filter(true)
///     .build();
/// assert_eq!(options.title.as_deref(), Some("Pick a fruit"));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct PromptOptions {
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    /// Text shown in front of the input field.
    #[builder(into)]
    pub prompt_prefix: Option<String>,
    #[builder(into)]
    pub placeholder: Option<String>,
    /// Width in columns, 0 for automatic.
    pub width: Option<u16>,
    /// Height in rows, 0 to use the terminal height.
    pub height: Option<u16>,
    pub case_sensitive_filter: Option<bool>,
    #[builder(into)]
    pub string_validator: Option<StringValidator>,
    #[builder(into)]
    pub item_validator: Option<ItemValidator>,
    #[builder(into)]
    pub item_list_validator: Option<ItemListValidator>,
    #[builder(into)]
    pub affirmative_label: Option<String>,
    #[builder(into)]
    pub negative_label: Option<String>,
    pub theme: Option<Theme>,
}
