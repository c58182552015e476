use std::io;
use std::time::Duration;

use ratatui::backend::Backend;

use sysdash_core::model::Pid;
use sysdash_core::signal::Signaler;
use sysdash_core::source::DataSource;
use sysdash_core::state::{DashboardState, Flow};

use crate::keys::KeySource;
use crate::terminal::{TerminalModes, TerminalSession};
use crate::ui::{self, render::FrameView};

/// The render/input loop and the collaborators it drives
pub struct Dashboard<D, S> {
    source: D,
    signaler: S,
    state: DashboardState,
    frame_delay: Duration,
}

impl<D: DataSource, S: Signaler> Dashboard<D, S> {
    pub fn new(source: D, signaler: S, self_pid: Pid, frame_delay: Duration) -> Self {
        Self {
            source,
            signaler,
            state: DashboardState::new(self_pid),
            frame_delay,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Draw, wait for a key, act on it; until the quit key.
    ///
    /// The session is released before returning, on success and on error.
    pub fn run<B, M, K>(
        &mut self,
        session: &mut TerminalSession<B, M>,
        keys: &mut K,
    ) -> io::Result<()>
    where
        B: Backend,
        M: TerminalModes,
        K: KeySource,
    {
        let result = self.run_frames(session, keys);
        let released = session.release();
        result.and(released)
    }

    fn run_frames<B, M, K>(
        &mut self,
        session: &mut TerminalSession<B, M>,
        keys: &mut K,
    ) -> io::Result<()>
    where
        B: Backend,
        M: TerminalModes,
        K: KeySource,
    {
        let mut frames: u64 = 0;
        loop {
            // the system counts come from the table read just before them
            let rows = self.source.processes();
            let system = self.source.system();
            self.state.clamp(rows.len());

            session.terminal_mut().draw(|f| {
                ui::draw(
                    f,
                    &FrameView {
                        system: &system,
                        rows: &rows,
                        state: &self.state,
                    },
                )
            })?;
            frames += 1;

            let command = keys.next_command()?;
            log::trace!("frame {}: {:?}", frames, command);

            let flow = self
                .state
                .apply(command, &rows, &mut self.source, &mut self.signaler);
            if flow == Flow::Exit {
                log::info!("quit after {} frames", frames);
                return Ok(());
            }

            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }
    }
}
