use std::io;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend};

/// Process-wide terminal modes a session switches on and off
pub trait TerminalModes {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode, alternate screen and hidden cursor on stdout
pub struct CrosstermModes;

impl TerminalModes for CrosstermModes {
    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
    }

    fn leave(&mut self) -> io::Result<()> {
        // restore as much as possible even if one step fails
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        raw.and(screen)
    }
}

/// Exclusive ownership of the terminal for the lifetime of the dashboard.
///
/// Modes are entered on construction and left exactly once, either by an
/// explicit [`release`](Self::release) or when the session is dropped.
pub struct TerminalSession<B: Backend, M: TerminalModes> {
    terminal: Terminal<B>,
    modes: M,
    active: bool,
}

impl<B: Backend, M: TerminalModes> TerminalSession<B, M> {
    pub fn acquire(backend: B, mut modes: M) -> io::Result<Self> {
        modes.enter()?;
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = modes.leave();
                return Err(e);
            }
        };
        log::debug!("terminal session acquired");
        Ok(Self {
            terminal,
            modes,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restore the terminal. Later calls are no-ops.
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let cursor = self.terminal.show_cursor();
        let modes = self.modes.leave();
        log::debug!("terminal session released");
        modes.and(cursor)
    }
}

impl<B: Backend, M: TerminalModes> Drop for TerminalSession<B, M> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.release();
        }
    }
}
