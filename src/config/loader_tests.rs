use std::io::Write;

use tempfile::NamedTempFile;

use super::{DefaultsFile, DefaultsRegistry, KindDefaults, PromptKind, SearchConfig, load_registry};
use crate::config::{ConfirmConfig, PromptOptions};

#[test]
fn test_parse_empty_file() {
    let file = DefaultsFile::parse("").unwrap();
    assert_eq!(file, DefaultsFile::default());
}

#[test]
fn test_parse_kind_tables() {
    let file = DefaultsFile::parse(
        r#"
[search]
title = "find:"
case_sensitive_filter = true

[confirm]
affirmative_label = "Sure"
"#,
    )
    .unwrap();

    let search = file.search.unwrap();
    assert_eq!(search.title.as_deref(), Some("find:"));
    assert_eq!(search.case_sensitive_filter, Some(true));
    assert_eq!(
        file.confirm.unwrap().affirmative_label.as_deref(),
        Some("Sure")
    );
    assert!(file.input.is_none());
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(DefaultsFile::parse("[search]\ncolour = \"red\"\n").is_err());
    assert!(DefaultsFile::parse("[nonsense]\ntitle = \"x\"\n").is_err());
}

#[test]
fn test_apply_overrides_only_given_fields() {
    let file = DefaultsFile {
        search: Some(KindDefaults {
            title: Some("find:".into()),
            ..KindDefaults::default()
        }),
        ..DefaultsFile::default()
    };

    let mut registry = DefaultsRegistry::default();
    file.apply(&mut registry);

    let config = SearchConfig::resolve(&PromptOptions::default(), &registry).unwrap();
    assert_eq!(config.form.title, "find:");
    assert!(!config.case_sensitive);
}

#[test]
fn test_apply_common_then_specific() {
    let file = DefaultsFile {
        common: Some(KindDefaults {
            height: Some(20),
            title: Some("common".into()),
            ..KindDefaults::default()
        }),
        confirm: Some(KindDefaults {
            title: Some("really?".into()),
            ..KindDefaults::default()
        }),
        ..DefaultsFile::default()
    };

    let mut registry = DefaultsRegistry::default();
    file.apply(&mut registry);

    let confirm = ConfirmConfig::resolve(&PromptOptions::default(), &registry).unwrap();
    assert_eq!(confirm.form.title, "really?");
    assert_eq!(confirm.form.height, 20);

    let search = SearchConfig::resolve(&PromptOptions::default(), &registry).unwrap();
    assert_eq!(search.form.title, "common");
    assert_eq!(search.form.height, 20);
}

#[test]
fn test_load_registry_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[search]\nheight = 15").unwrap();

    let registry = load_registry(Some(file.path())).unwrap();
    let defaults = registry.defaults_for(PromptKind::Search).unwrap();
    assert_eq!(defaults.height, Some(15));
    // Built-ins are kept underneath
    assert_eq!(defaults.title.as_deref(), Some("search item:"));
}

#[test]
fn test_load_registry_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_registry(Some(&missing)).is_err());
}

#[test]
fn test_load_registry_invalid_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml = = =").unwrap();
    assert!(load_registry(Some(file.path())).is_err());
}
