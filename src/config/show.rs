use std::fmt::Display;

use tabled::{
    Table, Tabled,
    settings::{Margin, Rotate, Style},
};

use crate::common::print_header;

use super::{DefaultsRegistry, PromptKind, PromptOptions};

const UNSET: &str = "-";

#[derive(Tabled)]
struct DefaultsDisplay {
    kind: String,
    title: String,
    description: String,
    prompt_prefix: String,
    placeholder: String,
    width: String,
    height: String,
    case_sensitive_filter: String,
    affirmative_label: String,
    negative_label: String,
    validators: String,
}

fn shown<V: Display>(value: Option<&V>) -> String {
    value.map_or_else(|| UNSET.to_string(), |v| format!("\"{v}\""))
}

impl DefaultsDisplay {
    fn new(kind: PromptKind, defaults: Option<&PromptOptions>) -> Self {
        let get = |f: fn(&PromptOptions) -> Option<&String>| shown(defaults.and_then(f));

        let validators: Vec<&str> = defaults
            .map(|d| {
                [
                    d.string_validator.as_ref().map(|_| "string"),
                    d.item_validator.as_ref().map(|_| "item"),
                    d.item_list_validator.as_ref().map(|_| "item-list"),
                ]
                .into_iter()
                .flatten()
                .collect()
            })
            .unwrap_or_default();

        Self {
            kind: kind.to_string(),
            title: get(|d| d.title.as_ref()),
            description: get(|d| d.description.as_ref()),
            prompt_prefix: get(|d| d.prompt_prefix.as_ref()),
            placeholder: get(|d| d.placeholder.as_ref()),
            width: shown(defaults.and_then(|d| d.width.as_ref())),
            height: shown(defaults.and_then(|d| d.height.as_ref())),
            case_sensitive_filter: shown(defaults.and_then(|d| d.case_sensitive_filter.as_ref())),
            affirmative_label: get(|d| d.affirmative_label.as_ref()),
            negative_label: get(|d| d.negative_label.as_ref()),
            validators: if validators.is_empty() {
                UNSET.to_string()
            } else {
                validators.join(", ")
            },
        }
    }
}

/// Renders the registered defaults, one column per prompt kind.
#[must_use]
pub fn render_defaults(registry: &DefaultsRegistry, kinds: &[PromptKind]) -> String {
    let rows = kinds
        .iter()
        .map(|&kind| DefaultsDisplay::new(kind, registry.defaults_for(kind)));

    let mut table = Table::new(rows);
    table
        .with(Rotate::Left)
        .with(Style::modern())
        .with(Margin::new(4, 0, 0, 0));
    table.to_string()
}

pub fn show_defaults(registry: &DefaultsRegistry, kind: Option<PromptKind>) {
    let kinds = kind.map_or_else(|| PromptKind::ALL.to_vec(), |k| vec![k]);

    print_header();
    println!("{}", render_defaults(registry, &kinds));
}
