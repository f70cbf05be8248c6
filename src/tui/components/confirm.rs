//! Yes/no confirmation component.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{Component, Response, description_lines, form_height, is_interrupt, prompt_area};
use crate::config::ConfirmConfig;

const HELP: &str = "←→ toggle, y/n choose, Enter submit, Esc cancel";

pub struct Confirm<'a> {
    config: &'a ConfirmConfig,
    affirmative: bool,
}

impl<'a> Confirm<'a> {
    /// Starts with the affirmative button focused.
    #[must_use]
    pub fn new(config: &'a ConfirmConfig) -> Self {
        Self {
            config,
            affirmative: true,
        }
    }

    #[must_use]
    pub fn is_affirmative(&self) -> bool {
        self.affirmative
    }
}

impl Component for Confirm<'_> {
    type Output = bool;

    fn handle_key(&mut self, key: KeyEvent) -> Option<Response<bool>> {
        if is_interrupt(&key) {
            return Some(Response::Interrupted);
        }

        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h' | 'l') => {
                self.affirmative = !self.affirmative;
                None
            }
            KeyCode::Char('y' | 'Y') => Some(Response::Submitted(true)),
            KeyCode::Char('n' | 'N') => Some(Response::Submitted(false)),
            KeyCode::Enter => Some(Response::Submitted(self.affirmative)),
            KeyCode::Esc => Some(Response::Cancelled),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame) {
        let form = &self.config.form;
        let theme = &form.theme;
        let description = description_lines(form);

        // borders + description + spacer + buttons + help
        let natural = description.len().saturating_add(5);
        let area = prompt_area(frame.area(), form.width, form_height(form, natural));

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(Span::styled(form.title.as_str(), theme.title));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let [description_area, buttons_area, help_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        let content = Paragraph::new(description)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, description_area);

        let focused = theme.selected.add_modifier(Modifier::REVERSED);
        let (yes_style, no_style) = if self.affirmative {
            (focused, theme.unselected)
        } else {
            (theme.unselected, focused)
        };
        let buttons = Line::from(vec![
            Span::styled(format!(" {} ", self.config.affirmative), yes_style),
            Span::raw("   "),
            Span::styled(format!(" {} ", self.config.negative), no_style),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(buttons, buttons_area);

        let help_line =
            Line::from(Span::styled(HELP, theme.help)).alignment(Alignment::Center);
        frame.render_widget(help_line, help_area);
    }
}
