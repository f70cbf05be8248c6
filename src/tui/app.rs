//! Terminal application wrapper with RAII setup/teardown.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

/// Type alias for the terminal with crossterm backend.
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// RAII wrapper for terminal setup and teardown.
///
/// Enables raw mode and the alternate screen on creation and restores the
/// terminal on drop, including when a prompt returns early with an error.
pub struct TerminalApp {
    terminal: TuiTerminal,
}

impl TerminalApp {
    /// Fails when stdout is not an interactive terminal.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        debug!("terminal entered raw mode");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalApp {
    fn drop(&mut self) {
        // Attempt to restore terminal state, ignoring errors during cleanup
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
