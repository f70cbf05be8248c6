//! Selectable entries shared by every list-based prompt.

use std::fmt::{self, Display, Formatter};

/// A key/payload pair representing one selectable or searchable entry.
///
/// The key is what the user sees and what the search filter matches against.
/// The payload is opaque to the prompts and handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    key: String,
    payload: T,
}

impl<T> Item<T> {
    /// Creates a new item with the given display key and payload.
    #[must_use]
    pub fn new(key: impl Into<String>, payload: T) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }

    /// Returns the display key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl Item<String> {
    /// Creates an item whose payload is a copy of its key.
    #[must_use]
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            payload: key.clone(),
            key,
        }
    }
}

impl<T> Display for Item<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Builds a list of key-only items.
pub fn items_from_keys<I, S>(keys: I) -> Vec<Item<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter().map(Item::from_key).collect()
}
