//! Single line text input with validation.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use super::{
    Component, Response, description_lines, form_height, is_interrupt, prompt_area, status_line,
};
use crate::{config::InputConfig, validators::ValidationResult};

const HELP: &str = "Enter to submit, Esc to cancel";

pub struct TextInput<'a> {
    config: &'a InputConfig,
    input: Input,
    error: Option<String>,
}

impl<'a> TextInput<'a> {
    #[must_use]
    pub fn new(config: &'a InputConfig) -> Self {
        Self {
            config,
            input: Input::default(),
            error: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    fn submit(&mut self) -> Option<Response<String>> {
        let value = self.input.value().to_string();
        match self.config.validator.validate(&value) {
            ValidationResult::Valid => Some(Response::Submitted(value)),
            ValidationResult::Invalid(msg) => {
                self.error = Some(msg);
                None
            }
        }
    }
}

impl Component for TextInput<'_> {
    type Output = String;

    fn handle_key(&mut self, key: KeyEvent) -> Option<Response<String>> {
        if is_interrupt(&key) {
            return Some(Response::Interrupted);
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Some(Response::Cancelled),
            _ => {
                self.input.handle_event(&Event::Key(key));
                self.error = None;
                None
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let form = &self.config.form;
        let theme = &form.theme;
        let description = description_lines(form);

        // borders + description + input + status
        let natural = description.len().saturating_add(4);
        let area = prompt_area(
            frame.area(),
            form.width,
            form_height(form, natural),
        );

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(Span::styled(form.title.as_str(), theme.title));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let [description_area, input_area, status_area] = Layout::vertical([
            Constraint::Length(u16::try_from(description.len()).unwrap_or(u16::MAX)),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        frame.render_widget(Paragraph::new(description), description_area);

        let prefix = Span::styled(self.config.prompt_prefix.as_str(), theme.indicator);
        let prefix_width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
        let text_width = usize::from(input_area.width.saturating_sub(prefix_width).max(1));
        let scroll = self.input.visual_scroll(text_width);

        let line = if self.input.value().is_empty() {
            Line::from(vec![
                prefix,
                Span::styled(self.config.placeholder.as_str(), theme.disabled),
            ])
        } else {
            let visible: String = self.input.value().chars().skip(scroll).collect();
            Line::from(vec![prefix, Span::styled(visible, theme.unselected)])
        };
        frame.render_widget(Paragraph::new(line), input_area);

        let cursor = self.input.visual_cursor().saturating_sub(scroll);
        let cursor_x = input_area
            .x
            .saturating_add(prefix_width)
            .saturating_add(u16::try_from(cursor).unwrap_or(u16::MAX));
        frame.set_cursor_position((cursor_x, input_area.y));

        frame.render_widget(
            Paragraph::new(status_line(form, self.error.as_deref(), HELP)),
            status_area,
        );
    }
}
