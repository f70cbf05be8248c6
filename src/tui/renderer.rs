use std::io;

use ratatui::text::Text;

use super::components::{
    Confirm, MultiSelect, Response, Select, TerminalSearchHost, TextInput, run,
};
use crate::{
    config::{ConfirmConfig, InputConfig, MultiSelectConfig, SelectConfig},
    prompter::FormRenderer,
    search::{SearchHost, SearchKey},
};

/// Renders every prompt on the real terminal. Each prompt takes over the
/// alternate screen for its duration and restores the terminal afterwards.
#[derive(Default)]
pub struct TerminalRenderer {
    search: TerminalSearchHost,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormRenderer for TerminalRenderer {
    fn input(&mut self, config: &InputConfig) -> io::Result<Response<String>> {
        run(TextInput::new(config))
    }

    fn select(&mut self, config: &SelectConfig, keys: &[&str]) -> io::Result<Response<usize>> {
        run(Select::new(config, keys))
    }

    fn multi_select(
        &mut self,
        config: &MultiSelectConfig,
        keys: &[&str],
    ) -> io::Result<Response<Vec<usize>>> {
        run(MultiSelect::new(config, keys))
    }

    fn confirm(&mut self, config: &ConfirmConfig) -> io::Result<Response<bool>> {
        run(Confirm::new(config))
    }
}

impl SearchHost for TerminalRenderer {
    fn height(&mut self) -> io::Result<u16> {
        self.search.height()
    }

    fn draw(&mut self, frame: &Text<'_>, width: u16) -> io::Result<()> {
        self.search.draw(frame, width)
    }

    fn next_key(&mut self) -> io::Result<SearchKey> {
        self.search.next_key()
    }
}
