//! Single selection component.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::{
    Component, Response, description_lines, form_height, is_interrupt, prompt_area, status_line,
};
use crate::{config::SelectConfig, validators::ValidationResult};

const HELP: &str = "↑↓ navigate, Enter select, Esc cancel";

/// Rows shown before the list starts scrolling when no height is configured.
pub(super) const MAX_VISIBLE_ITEMS: usize = 15;

/// A single selection prompt over item keys. Submits the chosen index.
pub struct Select<'a> {
    config: &'a SelectConfig,
    keys: &'a [&'a str],
    cursor: usize,
    error: Option<String>,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(config: &'a SelectConfig, keys: &'a [&'a str]) -> Self {
        Self {
            config,
            keys,
            cursor: 0,
            error: None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
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

    fn submit(&mut self) -> Option<Response<usize>> {
        let key = self.keys.get(self.cursor)?;
        match self.config.item_validator.validate(key) {
            ValidationResult::Valid => Some(Response::Submitted(self.cursor)),
            ValidationResult::Invalid(msg) => {
                self.error = Some(msg);
                None
            }
        }
    }
}

impl Component for Select<'_> {
    type Output = usize;

    fn handle_key(&mut self, key: KeyEvent) -> Option<Response<usize>> {
        if is_interrupt(&key) {
            return Some(Response::Interrupted);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor_up();
                self.error = None;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor_down();
                self.error = None;
            }
            KeyCode::Enter => return self.submit(),
            KeyCode::Esc => return Some(Response::Cancelled),
            _ => {}
        }
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
                let (prefix, style) = if idx == self.cursor {
                    ("> ", theme.selected)
                } else {
                    ("  ", theme.unselected)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, theme.indicator),
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
