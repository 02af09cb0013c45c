use std::io::{self, Stdout};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// Raw-mode alternate screen, restored when dropped.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, ResetColor, Show, LeaveAlternateScreen) {
            log::error!("Could not leave alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Could not disable raw mode: {err}");
        }
    }
}
