use crate::model::{Pid, ProcessRow};
use crate::signal::{ControlSignal, Signaler};
use crate::source::DataSource;

/// What a single key press asks the dashboard to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Quit,
    Control(ControlSignal),
    /// Unbound key, or an event that only needs a redraw
    Ignore,
}

impl Command {
    /// Command bound to a plain character key.
    pub fn from_char(c: char) -> Self {
        match c {
            'k' | 'K' => Self::Control(ControlSignal::Terminate),
            's' | 'S' => Self::Control(ControlSignal::Pause),
            'r' | 'R' => Self::Control(ControlSignal::Resume),
            'q' | 'Q' => Self::Quit,
            _ => Self::Ignore,
        }
    }
}

/// Whether the loop keeps running after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Selection and status feedback that survive from one frame to the next.
#[derive(Clone, Debug)]
pub struct DashboardState {
    selected: usize,
    status: String,
    self_pid: Pid,
}

impl DashboardState {
    /// `self_pid` is the dashboard's own process, which terminate and pause refuse to target.
    pub fn new(self_pid: Pid) -> Self {
        Self {
            selected: 0,
            status: String::new(),
            self_pid,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Pull the selection back inside a sequence of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Move the selection up, wrapping from the first row to the last.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    /// Move the selection down, wrapping from the last row to the first.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected + 1 >= len {
            0
        } else {
            self.selected + 1
        };
    }

    /// Apply one command against the rows drawn this frame.
    ///
    /// Control actions re-read the process table afterwards so the selection
    /// is clamped against what actually survived the signal.
    pub fn apply<D, S>(
        &mut self,
        command: Command,
        rows: &[ProcessRow],
        source: &mut D,
        signaler: &mut S,
    ) -> Flow
    where
        D: DataSource + ?Sized,
        S: Signaler + ?Sized,
    {
        match command {
            Command::Up => self.select_prev(rows.len()),
            Command::Down => self.select_next(rows.len()),
            Command::Quit => return Flow::Exit,
            Command::Control(signal) => {
                if let Some(row) = rows.get(self.selected) {
                    self.control(signal, row.pid, signaler);
                    let fresh = source.processes();
                    self.clamp(fresh.len());
                }
            }
            Command::Ignore => {}
        }
        Flow::Continue
    }

    fn control<S: Signaler + ?Sized>(&mut self, signal: ControlSignal, pid: Pid, signaler: &mut S) {
        if pid == self.self_pid && signal.refuses_self() {
            log::warn!("refusing to {} own process {}", signal.verb(), pid);
            self.status = format!("Refusing to {} the monitor process.", signal.verb());
            return;
        }

        let delivered = match signal {
            ControlSignal::Terminate => signaler.terminate(pid),
            ControlSignal::Pause => signaler.pause(pid),
            ControlSignal::Resume => signaler.resume(pid),
        };

        if delivered {
            log::info!("{} pid {}", signal.past_tense().to_lowercase(), pid);
            self.status = format!("{} PID {}.", signal.past_tense(), pid);
        } else {
            log::warn!("failed to {} pid {}", signal.verb(), pid);
            self.status = format!(
                "Failed to {} PID {} (permission or gone).",
                signal.verb(),
                pid
            );
        }
    }
}
