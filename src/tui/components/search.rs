//! Terminal side of the search prompt.

use std::io;

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    terminal,
};
use ratatui::{layout::Rect, text::Text, widgets::Paragraph};

use super::{is_interrupt, next_key_press};
use crate::{
    search::{SearchHost, SearchKey},
    tui::TerminalApp,
};

/// Draws search frames on the alternate screen and reads keys from the
/// terminal. The screen is only taken over once there is a frame to show.
#[derive(Default)]
pub struct TerminalSearchHost {
    app: Option<TerminalApp>,
}

impl TerminalSearchHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves the alternate screen, if it was entered.
    pub fn release(&mut self) {
        self.app = None;
    }
}

/// Translates a terminal key press into a search key. Keys the search
/// prompt does not use map to `None`.
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<SearchKey> {
    if is_interrupt(key) {
        return Some(SearchKey::Interrupt);
    }

    let key = match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            SearchKey::Char(c)
        }
        KeyCode::Backspace => SearchKey::Backspace,
        KeyCode::Up => SearchKey::Up,
        KeyCode::Down => SearchKey::Down,
        KeyCode::PageUp => SearchKey::PageUp,
        KeyCode::PageDown => SearchKey::PageDown,
        KeyCode::Enter => SearchKey::Enter,
        KeyCode::Esc => SearchKey::Escape,
        _ => return None,
    };
    Some(key)
}

impl SearchHost for TerminalSearchHost {
    fn height(&mut self) -> io::Result<u16> {
        terminal::size().map(|(_, rows)| rows)
    }

    fn draw(&mut self, frame: &Text<'_>, width: u16) -> io::Result<()> {
        if frame.lines.is_empty() {
            self.release();
            return Ok(());
        }

        if self.app.is_none() {
            self.app = Some(TerminalApp::new()?);
        }
        let Some(app) = self.app.as_mut() else {
            return Ok(());
        };

        app.terminal().draw(|f| {
            let area = f.area();
            let area = if width == 0 {
                area
            } else {
                Rect {
                    width: width.min(area.width),
                    ..area
                }
            };
            f.render_widget(Paragraph::new(frame.clone()), area);
        })?;
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<SearchKey> {
        loop {
            if let Some(key) = map_key(&next_key_press()?) {
                return Ok(key);
            }
        }
    }
}
