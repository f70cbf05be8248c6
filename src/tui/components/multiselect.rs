//! Multi-selection component with toggle support.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::{
    Component, Response, description_lines, form_height, is_interrupt, prompt_area,
    select::MAX_VISIBLE_ITEMS, status_line,
};
use crate::{config::MultiSelectConfig, validators::ValidationResult};

const HELP: &str = "↑↓ navigate, Space toggle, Ctrl+A all, Enter submit, Esc cancel";

/// A multi-selection prompt over item keys. Submits the chosen indices in
/// list order.
pub struct MultiSelect<'a> {
    config: &'a MultiSelectConfig,
    keys: &'a [&'a str],
    cursor: usize,
    chosen: BTreeSet<usize>,
    error: Option<String>,
}

impl<'a> MultiSelect<'a> {
    #[must_use]
    pub fn new(config: &'a MultiSelectConfig, keys: &'a [&'a str]) -> Self {
        Self {
            config,
            keys,
            cursor: 0,
            chosen: BTreeSet::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_chosen(&self, index: usize) -> bool {
        self.chosen.contains(&index)
    }

    fn move_cursor_up(&mut self) {
        self.cursor = if self.cursor == 0 {
            self.keys.len().saturating_sub(1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    fn move_cursor_down(&mut self) {
        let next = self.cursor.saturating_add(1);
        self.cursor = if next >= self.keys.len() { 0 } else { next };
    }

    fn toggle(&mut self) {
        if self.cursor < self.keys.len() && !self.chosen.remove(&self.cursor) {
            self.chosen.insert(self.cursor);
        }
    }

    fn submit(&mut self) -> Option<Response<Vec<usize>>> {
        let chosen_keys: Vec<&str> = self
            .chosen
            .iter()
            .filter_map(|&idx| self.keys.get(idx).copied())
            .collect();

        match self.config.list_validator.validate(&chosen_keys) {
            ValidationResult::Valid => Some(Response::Submitted(self.chosen.iter().copied().collect())),
            ValidationResult::Invalid(msg) => {
                self.error = Some(msg);
                None
            }
        }
    }
}

impl Component for MultiSelect<'_> {
    type Output = Vec<usize>;

    fn handle_key(&mut self, key: KeyEvent) -> Option<Response<Vec<usize>>> {
        if is_interrupt(&key) {
            return Some(Response::Interrupted);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.chosen.extend(0..self.keys.len());
            }
            KeyCode::Enter => return self.submit(),
            KeyCode::Esc => return Some(Response::Cancelled),
            _ => return None,
        }
        self.error = None;
        None
    }

    fn render(&self, frame: &mut Frame) {
        let form = &self.config.form;
        let theme = &form.theme;
        let description = description_lines(form);

        // items + description + border + status
        let natural = self
            .keys
            .len()
            .min(MAX_VISIBLE_ITEMS)
            .saturating_add(description.len())
            .saturating_add(3);
        let area = prompt_area(frame.area(), form.width, form_height(form, natural));

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(Span::styled(form.title.as_str(), theme.title));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let [description_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(u16::try_from(description.len()).unwrap_or(u16::MAX)),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        frame.render_widget(Paragraph::new(description), description_area);

        let list_items: Vec<ListItem> = self
            .keys
            .iter()
            .enumerate()
            .map(|(idx, key)| {
                let is_cursor = idx == self.cursor;
                let checkbox = if self.is_chosen(idx) { "[x]" } else { "[ ]" };
                let cursor = if is_cursor { ">" } else { " " };
                let style = if is_cursor {
                    theme.selected
                } else {
                    theme.unselected
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{cursor} {checkbox} "), theme.indicator),
                    Span::styled(*key, style),
                ]))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.cursor));
        let list = List::new(list_items).scroll_padding(1);
        frame.render_stateful_widget(list, list_area, &mut state);

        frame.render_widget(status_line(form, self.error.as_deref(), HELP), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DefaultsRegistry, PromptOptions},
        tui::components::testing::{ctrl, draw, key},
        validators,
    };

    fn config(options: &PromptOptions) -> MultiSelectConfig {
        MultiSelectConfig::resolve(options, &DefaultsRegistry::default()).unwrap()
    }

    #[test]
    fn test_toggle_and_submit_in_list_order() {
        let config = config(&PromptOptions::default());
        let keys = ["a", "b", "c"];
        let mut multi = MultiSelect::new(&config, &keys);

        multi.handle_key(key(KeyCode::Up));
        multi.handle_key(key(KeyCode::Char(' ')));
        multi.handle_key(key(KeyCode::Down));
        multi.handle_key(key(KeyCode::Char(' ')));
        assert!(multi.is_chosen(0));
        assert!(multi.is_chosen(2));

        assert_eq!(
            multi.handle_key(key(KeyCode::Enter)),
            Some(Response::Submitted(vec![0, 2]))
        );
    }

    #[test]
    fn test_toggle_twice_unselects() {
        let config = config(&PromptOptions::default());
        let keys = ["a", "b"];
        let mut multi = MultiSelect::new(&config, &keys);

        multi.handle_key(key(KeyCode::Char(' ')));
        multi.handle_key(key(KeyCode::Char(' ')));
        assert!(!multi.is_chosen(0));
        assert_eq!(
            multi.handle_key(key(KeyCode::Enter)),
            Some(Response::Submitted(Vec::new()))
        );
    }

    #[test]
    fn test_select_all() {
        let config = config(&PromptOptions::default());
        let keys = ["a", "b", "c"];
        let mut multi = MultiSelect::new(&config, &keys);

        multi.handle_key(ctrl('a'));
        assert_eq!(
            multi.handle_key(key(KeyCode::Enter)),
            Some(Response::Submitted(vec![0, 1, 2]))
        );
    }

    #[test]
    fn test_list_validator_blocks_submit() {
        let options = PromptOptions::builder()
            .item_list_validator(validators::at_least_one)
            .build();
        let config = config(&options);
        let keys = ["a", "b"];
        let mut multi = MultiSelect::new(&config, &keys);

        assert_eq!(multi.handle_key(key(KeyCode::Enter)), None);
        assert!(multi.error.is_some());

        multi.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(multi.error, None);
        assert_eq!(
            multi.handle_key(key(KeyCode::Enter)),
            Some(Response::Submitted(vec![0]))
        );
    }

    #[test]
    fn test_cancel_and_interrupt() {
        let config = config(&PromptOptions::default());
        let keys = ["a", "b"];
        let mut multi = MultiSelect::new(&config, &keys);
        assert_eq!(multi.handle_key(key(KeyCode::Esc)), Some(Response::Cancelled));
        assert_eq!(multi.handle_key(ctrl('c')), Some(Response::Interrupted));
    }

    #[test]
    fn test_render_checkboxes() {
        let config = config(&PromptOptions::default());
        let keys = ["alpha", "beta"];
        let mut multi = MultiSelect::new(&config, &keys);
        multi.handle_key(key(KeyCode::Char(' ')));

        let rows = draw(&multi, 100, 20).join("\n");
        assert!(rows.contains("select item(s):"));
        assert!(rows.contains("> [x] alpha"));
        assert!(rows.contains("  [ ] beta"));
    }
}
