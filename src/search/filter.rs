//! Substring filtering of item keys.
//!
//! Matching is plain substring containment, optionally case-folded. Order is
//! always that of the full list; there is no ranking.

use std::{borrow::Cow, ops::Range};

use crate::item::Item;

/// Item keys prepared once per session so each keystroke is a single
/// linear scan without per-item allocation.
pub struct Matcher<'a> {
    keys: Vec<&'a str>,
    /// Lowercased keys, only built when matching is case-insensitive.
    folded: Option<Vec<String>>,
}

impl<'a> Matcher<'a> {
    pub fn new<T>(items: &'a [Item<T>], case_sensitive: bool) -> Self {
        let keys: Vec<&'a str> = items.iter().map(Item::key).collect();
        let folded = (!case_sensitive).then(|| keys.iter().map(|k| k.to_lowercase()).collect());
        Self { keys, folded }
    }

    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.folded.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn normalize<'q>(&self, query: &'q str) -> Cow<'q, str> {
        if self.case_sensitive() {
            Cow::Borrowed(query)
        } else {
            Cow::Owned(query.to_lowercase())
        }
    }

    fn haystack(&self, index: usize) -> Option<&str> {
        match &self.folded {
            Some(folded) => folded.get(index).map(String::as_str),
            None => self.keys.get(index).copied(),
        }
    }

    /// Indices of the items whose key contains `query`, in list order.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.keys.len()).collect();
        }

        let needle = self.normalize(query);
        let needle = needle.as_ref();

        match &self.folded {
            Some(folded) => positions(folded.iter().map(String::as_str), needle),
            None => positions(self.keys.iter().copied(), needle),
        }
    }

    /// Byte range of the first match of `query` within the original key of
    /// item `index`, when it can be mapped back onto that key.
    #[must_use]
    pub fn match_range(&self, index: usize, query: &str) -> Option<Range<usize>> {
        if query.is_empty() {
            return None;
        }

        let key = self.keys.get(index)?;
        let haystack = self.haystack(index)?;
        let needle = self.normalize(query);
        let start = haystack.find(needle.as_ref())?;
        let range = start..start.checked_add(needle.len())?;

        // Case folding can change byte lengths; only highlight when the
        // folded key lines up with the original.
        if haystack.len() != key.len() {
            return None;
        }
        key.get(range.clone()).map(|_| range)
    }
}

fn positions<'h>(haystacks: impl Iterator<Item = &'h str>, needle: &str) -> Vec<usize> {
    haystacks
        .enumerate()
        .filter(|(_, h)| h.contains(needle))
        .map(|(i, _)| i)
        .collect()
}

/// Filters `items` by `query`, returning matching indices in order.
pub fn filter_items<T>(items: &[Item<T>], query: &str, case_sensitive: bool) -> Vec<usize> {
    Matcher::new(items, case_sensitive).filter(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::items_from_keys;

    fn keys<'a>(items: &'a [Item<String>], indices: &[usize]) -> Vec<&'a str> {
        indices
            .iter()
            .filter_map(|&i| items.get(i).map(Item::key))
            .collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let items = items_from_keys(["b", "a", "c"]);
        assert_eq!(filter_items(&items, "", false), vec![0, 1, 2]);
        assert_eq!(filter_items(&items, "", true), vec![0, 1, 2]);
    }

    #[test]
    fn test_substring_match_preserves_order() {
        let items = items_from_keys(["apple", "banana", "cherry", "mango"]);
        let found = filter_items(&items, "an", false);
        assert_eq!(keys(&items, &found), vec!["banana", "mango"]);
    }

    #[test]
    fn test_not_fuzzy() {
        let items = items_from_keys(["apple", "banana"]);
        assert!(filter_items(&items, "ape", false).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let items = items_from_keys(["Apple", "apple"]);
        assert_eq!(filter_items(&items, "APPLE", false), vec![0, 1]);
    }

    #[test]
    fn test_case_sensitive() {
        let items = items_from_keys(["Apple", "apple"]);
        assert!(filter_items(&items, "APPLE", true).is_empty());
        assert_eq!(filter_items(&items, "Apple", true), vec![0]);
    }

    #[test]
    fn test_filter_matches_brute_force_definition() {
        let items = items_from_keys(["Alpha", "beta", "GAMMA", "delta", "alphabet", ""]);
        for query in ["a", "A", "al", "ta", "MM", "x", "bet"] {
            for case_sensitive in [true, false] {
                let expected: Vec<usize> = items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| {
                        if case_sensitive {
                            item.key().contains(query)
                        } else {
                            item.key().to_lowercase().contains(&query.to_lowercase())
                        }
                    })
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(
                    filter_items(&items, query, case_sensitive),
                    expected,
                    "query {query:?}, case_sensitive {case_sensitive}"
                );
            }
        }
    }

    #[test]
    fn test_multibyte_query() {
        let items = items_from_keys(["crème brûlée", "creme brulee", "Ünïcode"]);
        assert_eq!(filter_items(&items, "û", false), vec![0]);
        assert_eq!(filter_items(&items, "ünï", false), vec![2]);
    }

    #[test]
    fn test_match_range_points_into_original_key() {
        let items = items_from_keys(["Banana"]);
        let matcher = Matcher::new(&items, false);
        assert_eq!(matcher.match_range(0, "NAN"), Some(2..5));
        assert_eq!(matcher.match_range(0, "x"), None);
        assert_eq!(matcher.match_range(0, ""), None);
    }

    #[test]
    fn test_match_range_multibyte() {
        let items = items_from_keys(["crème"]);
        let matcher = Matcher::new(&items, true);
        let range = matcher.match_range(0, "èm").unwrap();
        assert_eq!(items[0].key().get(range), Some("èm"));
    }

    #[test]
    fn test_large_pool() {
        let items = items_from_keys((0..500_000).map(|i| format!("object {i}")));
        let matcher = Matcher::new(&items, false);
        assert_eq!(matcher.filter("object 499999"), vec![499_999]);
        assert_eq!(matcher.filter("").len(), 500_000);
    }
}
