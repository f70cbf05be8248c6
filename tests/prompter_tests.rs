use std::{collections::VecDeque, io};

use promptkit::{
    DefaultsRegistry, FormRenderer, Item, OptionKey, PromptError, PromptKind, PromptOptions,
    Prompter, items_from_keys,
    config::{ConfirmConfig, InputConfig, MultiSelectConfig, SelectConfig},
    search::{SearchHost, SearchKey},
    tui::Response,
    validators,
};
use ratatui::text::Text;

/// Records what each prompt was asked to show and answers with canned
/// responses.
#[derive(Default)]
struct FakeRenderer {
    inputs: VecDeque<Response<String>>,
    selections: VecDeque<Response<usize>>,
    multi_selections: VecDeque<Response<Vec<usize>>>,
    confirmations: VecDeque<Response<bool>>,
    keys: VecDeque<SearchKey>,

    titles: Vec<String>,
    shown_keys: Vec<Vec<String>>,
    frames: usize,
}

impl FakeRenderer {
    fn next<T>(queue: &mut VecDeque<Response<T>>) -> io::Result<Response<T>> {
        queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "not a terminal"))
    }

    fn record(&mut self, title: &str, keys: &[&str]) {
        self.titles.push(title.to_string());
        self.shown_keys
            .push(keys.iter().map(ToString::to_string).collect());
    }
}

impl SearchHost for FakeRenderer {
    fn height(&mut self) -> io::Result<u16> {
        Ok(24)
    }

    fn draw(&mut self, _frame: &Text<'_>, _width: u16) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<SearchKey> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

impl FormRenderer for FakeRenderer {
    fn input(&mut self, config: &InputConfig) -> io::Result<Response<String>> {
        self.record(&config.form.title, &[]);
        Self::next(&mut self.inputs)
    }

    fn select(&mut self, config: &SelectConfig, keys: &[&str]) -> io::Result<Response<usize>> {
        self.record(&config.form.title, keys);
        Self::next(&mut self.selections)
    }

    fn multi_select(
        &mut self,
        config: &MultiSelectConfig,
        keys: &[&str],
    ) -> io::Result<Response<Vec<usize>>> {
        self.record(&config.form.title, keys);
        Self::next(&mut self.multi_selections)
    }

    fn confirm(&mut self, config: &ConfirmConfig) -> io::Result<Response<bool>> {
        self.record(&config.form.title, &[]);
        Self::next(&mut self.confirmations)
    }
}

fn prompter(renderer: FakeRenderer) -> Prompter<FakeRenderer> {
    Prompter::with_renderer(DefaultsRegistry::default(), renderer)
}

#[test]
fn test_input_returns_submitted_text() {
    let mut p = prompter(FakeRenderer {
        inputs: [Response::Submitted("hello".to_string())].into(),
        ..FakeRenderer::default()
    });

    let value = p.input(&PromptOptions::default()).unwrap();

    assert_eq!(value, "hello");
    assert_eq!(p.renderer().titles, vec!["user input:"]);
}

#[test]
fn test_explicit_title_overrides_default() {
    let mut p = prompter(FakeRenderer {
        inputs: [Response::Submitted(String::new())].into(),
        ..FakeRenderer::default()
    });

    p.input(&PromptOptions::builder().title("Name?").build()).unwrap();

    assert_eq!(p.renderer().titles, vec!["Name?"]);
}

#[test]
fn test_registry_default_is_used() {
    let mut p = prompter(FakeRenderer {
        confirmations: [Response::Submitted(true)].into(),
        ..FakeRenderer::default()
    });
    p.registry_mut().set(PromptKind::Confirm, |d| {
        d.title = Some("Proceed?".into());
    });

    assert!(p.confirm(&PromptOptions::default()).unwrap());
    assert_eq!(p.renderer().titles, vec!["Proceed?"]);
}

#[test]
fn test_missing_option_fails_before_rendering() {
    let mut p = Prompter::with_renderer(DefaultsRegistry::empty(), FakeRenderer::default());

    let err = p.confirm(&PromptOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        PromptError::MissingOption {
            option: OptionKey::Title,
            kind: PromptKind::Confirm
        }
    ));
    assert!(p.renderer().titles.is_empty());
}

#[test]
fn test_cancel_is_reported_per_kind() {
    let mut p = prompter(FakeRenderer {
        inputs: [Response::Cancelled].into(),
        confirmations: [Response::Interrupted].into(),
        ..FakeRenderer::default()
    });

    let err = p.input(&PromptOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "input canceled");
    assert!(err.is_cancellation());

    let err = p.confirm(&PromptOptions::default()).unwrap_err();
    assert!(matches!(err, PromptError::Interrupted));
}

#[test]
fn test_renderer_failure_is_propagated() {
    let mut p = prompter(FakeRenderer::default());

    let err = p.input(&PromptOptions::default()).unwrap_err();

    assert!(matches!(err, PromptError::Renderer(_)));
    assert!(!err.is_cancellation());
}

#[test]
fn test_select_returns_chosen_item() {
    let items = vec![Item::new("one", 1), Item::new("two", 2), Item::new("three", 3)];
    let mut p = prompter(FakeRenderer {
        selections: [Response::Submitted(1)].into(),
        ..FakeRenderer::default()
    });

    let chosen = p.select(&PromptOptions::default(), &items).unwrap();

    assert_eq!(*chosen.payload(), 2);
    assert_eq!(p.renderer().shown_keys, vec![vec!["one", "two", "three"]]);
}

#[test]
fn test_select_single_item_skips_renderer() {
    let items = items_from_keys(["only"]);
    let mut p = prompter(FakeRenderer::default());

    let chosen = p.select(&PromptOptions::default(), &items).unwrap();

    assert_eq!(chosen.key(), "only");
    assert!(p.renderer().titles.is_empty());
}

#[test]
fn test_select_empty_pool() {
    let items: Vec<Item<()>> = Vec::new();
    let mut p = prompter(FakeRenderer::default());

    let err = p.select(&PromptOptions::default(), &items).unwrap_err();

    assert!(matches!(err, PromptError::EmptyPool));
}

#[test]
fn test_select_validates_items_up_front() {
    let items = items_from_keys(["fine", "", "also fine"]);
    let mut p = prompter(FakeRenderer {
        selections: [Response::Submitted(0)].into(),
        ..FakeRenderer::default()
    });

    let err = p.select(&PromptOptions::default(), &items).unwrap_err();

    assert!(matches!(err, PromptError::InvalidItem { index: 1, .. }));
    assert!(p.renderer().titles.is_empty());
}

#[test]
fn test_select_with_custom_item_validator() {
    let items = items_from_keys(["abc", "a1c"]);
    let mut p = prompter(FakeRenderer::default());
    let options = PromptOptions::builder()
        .item_validator(validators::no_numbers)
        .build();

    let err = p.select(&options, &items).unwrap_err();

    assert_eq!(err.to_string(), "bad item list: item 1: no numbers allowed");
}

#[test]
fn test_single_item_still_validated() {
    let items = items_from_keys([""]);
    let mut p = prompter(FakeRenderer::default());

    let err = p.select(&PromptOptions::default(), &items).unwrap_err();

    assert!(matches!(err, PromptError::InvalidItem { index: 0, .. }));
}

#[test]
fn test_multi_select_returns_items_in_order() {
    let items = items_from_keys(["a", "b", "c", "d"]);
    let mut p = prompter(FakeRenderer {
        multi_selections: [Response::Submitted(vec![0, 3])].into(),
        ..FakeRenderer::default()
    });

    let chosen = p.multi_select(&PromptOptions::default(), &items).unwrap();

    let keys: Vec<&str> = chosen.iter().map(|i| i.key()).collect();
    assert_eq!(keys, vec!["a", "d"]);
    assert_eq!(p.renderer().titles, vec!["select item(s):"]);
}

#[test]
fn test_multi_select_single_item_still_prompts() {
    let items = items_from_keys(["a"]);
    let mut p = prompter(FakeRenderer {
        multi_selections: [Response::Submitted(Vec::new())].into(),
        ..FakeRenderer::default()
    });

    let chosen = p.multi_select(&PromptOptions::default(), &items).unwrap();

    assert!(chosen.is_empty());
    assert_eq!(p.renderer().titles.len(), 1);
}

#[test]
fn test_multi_select_empty_pool() {
    let items: Vec<Item<()>> = Vec::new();
    let mut p = prompter(FakeRenderer::default());

    let err = p.multi_select(&PromptOptions::default(), &items).unwrap_err();

    assert!(matches!(err, PromptError::EmptyPool));
}

#[test]
fn test_search_through_prompter() {
    let items = items_from_keys(["apple", "banana", "cherry"]);
    let mut p = prompter(FakeRenderer {
        keys: [SearchKey::Char('e'), SearchKey::Char('r')].into(),
        ..FakeRenderer::default()
    });

    let chosen = p.search(&PromptOptions::default(), &items).unwrap();

    assert_eq!(chosen.key(), "cherry");
    // One frame per key plus the final empty frame.
    assert_eq!(p.renderer().frames, 3);
}

#[test]
fn test_search_does_not_validate_items() {
    let items = items_from_keys(["", "x"]);
    let mut p = prompter(FakeRenderer {
        keys: [SearchKey::Enter].into(),
        ..FakeRenderer::default()
    });

    let chosen = p.search(&PromptOptions::default(), &items).unwrap();

    assert_eq!(chosen.key(), "");
}

#[test]
fn test_search_case_sensitivity_from_registry() {
    let items = items_from_keys(["Apple", "apple", "APPLE pie"]);
    let mut registry = DefaultsRegistry::default();
    registry.set(PromptKind::Search, |d| d.case_sensitive_filter = Some(true));
    let mut p = Prompter::with_renderer(
        registry,
        FakeRenderer {
            keys: [SearchKey::Char('a')].into(),
            ..FakeRenderer::default()
        },
    );

    let chosen = p.search(&PromptOptions::default(), &items).unwrap();

    assert_eq!(chosen.key(), "apple");
}

#[test]
fn test_cloned_registry_is_isolated() {
    let base = DefaultsRegistry::default();
    let mut custom = base.clone();
    custom.set(PromptKind::Input, |d| d.title = Some("custom:".into()));

    let mut a = Prompter::with_renderer(
        base,
        FakeRenderer {
            inputs: [Response::Submitted(String::new())].into(),
            ..FakeRenderer::default()
        },
    );
    let mut b = Prompter::with_renderer(
        custom,
        FakeRenderer {
            inputs: [Response::Submitted(String::new())].into(),
            ..FakeRenderer::default()
        },
    );

    a.input(&PromptOptions::default()).unwrap();
    b.input(&PromptOptions::default()).unwrap();

    assert_eq!(a.renderer().titles, vec!["user input:"]);
    assert_eq!(b.renderer().titles, vec!["custom:"]);
}
