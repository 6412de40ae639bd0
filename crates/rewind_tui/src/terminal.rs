//! Raw-mode terminal setup and teardown.

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::{debug, warn};

/// Keeps the terminal in raw mode on the alternate screen until dropped.
///
/// Call [`TerminalGuard::restore`] to surface teardown errors; dropping the
/// guard restores the terminal too but can only log them.
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }

    /// Restores the terminal, returning the first teardown error.
    pub fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active
            && let Err(e) = restore_terminal()
        {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs every teardown step, even after one fails.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, cursor::Show),
    ])
}

/// The first error among `results`, or `Ok` if every step succeeded.
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().fold(Ok(()), |acc, result| acc.and(result))
}
