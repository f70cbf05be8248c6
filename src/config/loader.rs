use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use log::info;
use serde::{Deserialize, Serialize};

use crate::common::project_config_dir;

use super::{DefaultsRegistry, PromptKind, PromptOptions};

const DEFAULTS_FILE_NAME: &str = "defaults.toml";

/// Defaults that can be stored on disk for one prompt kind.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindDefaults {
    pub title: Option<String>,
    pub description: Option<String>,
    pub prompt_prefix: Option<String>,
    pub placeholder: Option<String>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub case_sensitive_filter: Option<bool>,
    pub affirmative_label: Option<String>,
    pub negative_label: Option<String>,
}

impl KindDefaults {
    /// Overwrites the fields set here, leaving the others untouched.
    fn apply_to(&self, defaults: &mut PromptOptions) {
        fn set<V: Clone>(target: &mut Option<V>, value: Option<&V>) {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        }

        set(&mut defaults.title, self.title.as_ref());
        set(&mut defaults.description, self.description.as_ref());
        set(&mut defaults.prompt_prefix, self.prompt_prefix.as_ref());
        set(&mut defaults.placeholder, self.placeholder.as_ref());
        set(&mut defaults.width, self.width.as_ref());
        set(&mut defaults.height, self.height.as_ref());
        set(&mut defaults.case_sensitive_filter, self.case_sensitive_filter.as_ref());
        set(&mut defaults.affirmative_label, self.affirmative_label.as_ref());
        set(&mut defaults.negative_label, self.negative_label.as_ref());
    }
}

/// Contents of `defaults.toml`.
///
/// ```toml
/// [common]
/// height = 20
///
/// [search]
/// title = "find:"
/// case_sensitive_filter = true
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsFile {
    /// Applied to every kind before the kind-specific tables.
    pub common: Option<KindDefaults>,
    pub input: Option<KindDefaults>,
    pub select: Option<KindDefaults>,
    pub multi_select: Option<KindDefaults>,
    pub confirm: Option<KindDefaults>,
    pub search: Option<KindDefaults>,
}

impl DefaultsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid defaults file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Unable to deserialize defaults")
    }

    fn for_kind(&self, kind: PromptKind) -> Option<&KindDefaults> {
        match kind {
            PromptKind::Input => self.input.as_ref(),
            PromptKind::Select => self.select.as_ref(),
            PromptKind::MultiSelect => self.multi_select.as_ref(),
            PromptKind::Confirm => self.confirm.as_ref(),
            PromptKind::Search => self.search.as_ref(),
        }
    }

    /// Layers the file over `registry`.
    pub fn apply(&self, registry: &mut DefaultsRegistry) {
        for kind in PromptKind::ALL {
            let defaults = registry.defaults_for_mut(kind);
            if let Some(common) = &self.common {
                common.apply_to(defaults);
            }
            if let Some(specific) = self.for_kind(kind) {
                specific.apply_to(defaults);
            }
        }
    }
}

pub fn default_defaults_path() -> Result<PathBuf> {
    Ok(project_config_dir()?.join(DEFAULTS_FILE_NAME))
}

/// Builds the built-in registry and layers a defaults file over it.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load_registry(path: Option<&Path>) -> Result<DefaultsRegistry> {
    let mut registry = DefaultsRegistry::default();

    let file = match path {
        Some(p) => {
            if !p.exists() {
                bail!("Defaults file not found: {}", p.display());
            }
            Some(DefaultsFile::load(p)?)
        }
        None => {
            let p = default_defaults_path()?;
            if p.exists() {
                Some(DefaultsFile::load(&p)?)
            } else {
                None
            }
        }
    };

    if let Some(file) = file {
        info!("applying defaults file");
        file.apply(&mut registry);
    }

    Ok(registry)
}
