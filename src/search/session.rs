//! The search prompt state machine.
//!
//! A session owns the filter text, the filtered index list and the viewport.
//! It consumes one [`SearchKey`] at a time and ends in exactly one terminal
//! state; later keys are ignored.

use derive_more::Display;
use log::debug;
use ratatui::text::Text;

use crate::{
    config::{PromptKind, SearchConfig},
    error::PromptError,
    item::Item,
};

use super::{filter::Matcher, view, viewport::Viewport};

/// Keys the search prompt reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// A printable character to append to the filter.
    Char(char),
    Backspace,
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Escape,
    /// Ctrl+C.
    Interrupt,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    #[display("active")]
    Active,
    /// Enter was pressed, or the filter narrowed the list to one item. The
    /// selection is empty when Enter was pressed on an empty list.
    #[display("accepted")]
    Accepted,
    #[display("cancelled")]
    Cancelled,
    #[display("interrupted")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Terminate,
}

pub struct SearchSession<'a, T> {
    items: &'a [Item<T>],
    matcher: Matcher<'a>,
    config: SearchConfig,
    filter: String,
    filtered: Vec<usize>,
    viewport: Viewport,
    status: SearchStatus,
    selected: Option<usize>,
}

impl<'a, T> SearchSession<'a, T> {
    /// Starts a session over `items`.
    ///
    /// `total_height` is the number of terminal rows available to the prompt;
    /// it is only used when the configured height is 0. A pool of exactly one
    /// item is accepted immediately.
    pub fn new(
        items: &'a [Item<T>],
        config: SearchConfig,
        total_height: u16,
    ) -> Result<Self, PromptError> {
        if items.is_empty() {
            return Err(PromptError::EmptyPool);
        }

        let total = if config.form.height == 0 {
            total_height
        } else {
            config.form.height
        };
        let rows = view::list_height(&config.form, total);
        debug!(
            "search session: {} items, {rows} visible rows, case_sensitive={}",
            items.len(),
            config.case_sensitive
        );

        let matcher = Matcher::new(items, config.case_sensitive);
        let filtered = matcher.filter("");

        let mut session = Self {
            items,
            matcher,
            config,
            filter: String::new(),
            filtered,
            viewport: Viewport::new(rows),
            status: SearchStatus::Active,
            selected: None,
        };
        session.accept_single_match();
        Ok(session)
    }

    /// Applies one key and reports whether the session is finished.
    pub fn handle_key(&mut self, key: SearchKey) -> Step {
        if self.is_done() {
            return Step::Terminate;
        }

        match key {
            SearchKey::Interrupt => {
                self.status = SearchStatus::Interrupted;
                return Step::Terminate;
            }
            SearchKey::Escape => {
                self.status = SearchStatus::Cancelled;
                return Step::Terminate;
            }
            SearchKey::Char(c) => {
                if !c.is_control() {
                    self.filter.push(c);
                    self.refilter();
                }
            }
            SearchKey::Backspace => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
            }
            SearchKey::Up => self.viewport.line_up(self.filtered.len()),
            SearchKey::Down => self.viewport.line_down(self.filtered.len()),
            SearchKey::PageUp => self.viewport.page_up(self.filtered.len()),
            SearchKey::PageDown => self.viewport.page_down(self.filtered.len()),
            SearchKey::Enter => {
                self.selected = self.filtered.get(self.viewport.cursor()).copied();
                self.status = SearchStatus::Accepted;
            }
        }

        self.accept_single_match();

        if self.is_done() {
            Step::Terminate
        } else {
            Step::Continue
        }
    }

    fn refilter(&mut self) {
        self.filtered = self.matcher.filter(&self.filter);
        self.viewport.reset();
    }

    fn accept_single_match(&mut self) {
        if self.status == SearchStatus::Active
            && let [only] = self.filtered.as_slice()
        {
            self.selected = Some(*only);
            self.status = SearchStatus::Accepted;
        }
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status != SearchStatus::Active
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.viewport.cursor()
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.viewport.offset()
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Items matching the current filter, in list order.
    pub fn filtered(&self) -> impl Iterator<Item = &'a Item<T>> + '_ {
        let items = self.items;
        self.filtered.iter().filter_map(move |&i| items.get(i))
    }

    /// Visible rows as `(position in filtered list, item index, item)`.
    pub(crate) fn visible(&self) -> impl Iterator<Item = (usize, usize, &'a Item<T>)> + '_ {
        let items = self.items;
        let range = self.viewport.visible_range(self.filtered.len());
        let start = range.start;
        self.filtered
            .get(range)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(move |(row, &index)| {
                items
                    .get(index)
                    .map(|item| (start.saturating_add(row), index, item))
            })
    }

    pub(crate) fn matcher(&self) -> &Matcher<'a> {
        &self.matcher
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'a Item<T>> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Renders the current frame. Empty once the session has finished.
    #[must_use]
    pub fn render(&self) -> Text<'static> {
        view::render(self)
    }

    /// The selected item, or the reason there is none.
    pub fn into_result(self) -> Result<&'a Item<T>, PromptError> {
        match self.status {
            SearchStatus::Accepted => self
                .selected
                .and_then(|i| self.items.get(i))
                .ok_or(PromptError::NoSelection),
            SearchStatus::Cancelled => Err(PromptError::Cancelled {
                kind: PromptKind::Search,
            }),
            SearchStatus::Interrupted => Err(PromptError::Interrupted),
            SearchStatus::Active => Err(PromptError::NoSelection),
        }
    }
}
