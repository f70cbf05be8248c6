//! Interactive form components.
//!
//! Each component is a small state machine: [`Component::handle_key`] consumes
//! one key press and returns a [`Response`] once the prompt is finished, and
//! [`Component::render`] draws the current state. [`run`] wires a component
//! to the real terminal.

mod confirm;
mod multiselect;
mod search;
mod select;
mod text_input;

pub use confirm::Confirm;
pub use multiselect::MultiSelect;
pub use search::TerminalSearchHost;
pub use select::Select;
pub use text_input::TextInput;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
};

use super::TerminalApp;
use crate::{
    config::{FormConfig, PromptKind},
    error::PromptError,
};

/// How an interactive prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T> {
    /// The user submitted a value that passed validation.
    Submitted(T),
    /// Escape.
    Cancelled,
    /// Ctrl+C.
    Interrupted,
}

impl<T> Response<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        match self {
            Self::Submitted(value) => Response::Submitted(f(value)),
            Self::Cancelled => Response::Cancelled,
            Self::Interrupted => Response::Interrupted,
        }
    }

    pub fn into_result(self, kind: PromptKind) -> Result<T, PromptError> {
        match self {
            Self::Submitted(value) => Ok(value),
            Self::Cancelled => Err(PromptError::Cancelled { kind }),
            Self::Interrupted => Err(PromptError::Interrupted),
        }
    }
}

pub trait Component {
    type Output;

    fn render(&self, frame: &mut Frame);

    /// Returns `Some` once the prompt is finished.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Response<Self::Output>>;
}

/// Runs `component` on the terminal until it finishes.
pub fn run<C: Component>(mut component: C) -> io::Result<Response<C::Output>> {
    let mut app = TerminalApp::new()?;

    loop {
        app.terminal().draw(|frame| component.render(frame))?;

        if let Some(response) = component.handle_key(next_key_press()?) {
            return Ok(response);
        }
    }
}

/// Blocks until the next key press, skipping releases and non-key events.
pub(crate) fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}

pub(crate) fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Centers a `width` x `height` box in `area`. A zero width takes 60% of
/// the area.
pub(crate) fn prompt_area(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = if width == 0 {
        Constraint::Percentage(60)
    } else {
        Constraint::Length(width)
    };

    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Box height for a form: the configured height, or `natural` when unset.
pub(crate) fn form_height(form: &FormConfig, natural: usize) -> u16 {
    if form.height == 0 {
        u16::try_from(natural).unwrap_or(u16::MAX)
    } else {
        form.height
    }
}

pub(crate) fn description_lines(form: &FormConfig) -> Vec<Line<'_>> {
    form.description
        .lines()
        .map(|line| Line::from(Span::styled(line, form.theme.description)))
        .collect()
}

/// The error message if there is one, otherwise the help text.
pub(crate) fn status_line<'a>(form: &FormConfig, error: Option<&'a str>, help: &'a str) -> Line<'a> {
    match error {
        Some(err) => Line::from(Span::styled(err, form.theme.error)),
        None => Line::from(Span::styled(help, form.theme.help)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_into_result() {
        assert_eq!(Response::Submitted(3).into_result(PromptKind::Input).unwrap(), 3);

        let err = Response::<u8>::Cancelled
            .into_result(PromptKind::Confirm)
            .unwrap_err();
        assert_eq!(err.to_string(), "confirm canceled");

        let err = Response::<u8>::Interrupted
            .into_result(PromptKind::Confirm)
            .unwrap_err();
        assert!(matches!(err, PromptError::Interrupted));
    }

    #[test]
    fn test_response_map() {
        assert_eq!(Response::Submitted(2).map(|v| v * 2), Response::Submitted(4));
        assert_eq!(Response::<u8>::Cancelled.map(|v| v * 2), Response::Cancelled);
    }

    #[test]
    fn test_prompt_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = prompt_area(area, 40, 10);
        assert_eq!(rect, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_prompt_area_clamps_to_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = prompt_area(area, 40, 10);
        assert!(rect.width <= 20);
        assert!(rect.height <= 5);
    }

    #[test]
    fn test_is_interrupt() {
        assert!(is_interrupt(&testing::ctrl('c')));
        assert!(!is_interrupt(&testing::key(KeyCode::Char('c'))));
    }
}
