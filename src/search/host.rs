use std::io;

use log::debug;
use ratatui::text::Text;

use crate::{config::SearchConfig, error::PromptError, item::Item};

use super::session::{SearchKey, SearchSession};

/// The terminal side of a search prompt: where frames go and keys come from.
pub trait SearchHost {
    /// Rows available to the prompt. Read once, when a session starts.
    fn height(&mut self) -> io::Result<u16>;

    /// Draws one frame. An empty frame clears the prompt.
    fn draw(&mut self, frame: &Text<'_>, width: u16) -> io::Result<()>;

    /// Blocks until the next key the prompt reacts to.
    fn next_key(&mut self) -> io::Result<SearchKey>;
}

/// Runs a search session over `items` until it reaches a terminal state.
pub fn run_search<'a, T, H: SearchHost>(
    items: &'a [Item<T>],
    config: SearchConfig,
    host: &mut H,
) -> Result<&'a Item<T>, PromptError> {
    if items.is_empty() {
        return Err(PromptError::EmptyPool);
    }

    let total = if config.form.height == 0 {
        host.height()?
    } else {
        config.form.height
    };
    let width = config.form.width;
    let mut session = SearchSession::new(items, config, total)?;

    while !session.is_done() {
        host.draw(&session.render(), width)?;
        let key = host.next_key()?;
        session.handle_key(key);
    }
    host.draw(&session.render(), width)?;

    debug!("search finished: {}", session.status());
    session.into_result()
}
