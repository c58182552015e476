use crate::model::Pid;

/// Control actions the dashboard can deliver to a process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlSignal {
    /// Force kill (SIGKILL)
    Terminate,
    /// Suspend (SIGSTOP)
    Pause,
    /// Continue a suspended process (SIGCONT)
    Resume,
}

impl ControlSignal {
    /// Verb used in status messages ("Failed to kill ...")
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Terminate => "kill",
            Self::Pause => "suspend",
            Self::Resume => "resume",
        }
    }

    /// Past tense used in success messages ("Killed PID 42.")
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Terminate => "Killed",
            Self::Pause => "Suspended",
            Self::Resume => "Resumed",
        }
    }

    /// Whether the dashboard refuses to deliver this signal to itself
    pub fn refuses_self(&self) -> bool {
        matches!(self, Self::Terminate | Self::Pause)
    }
}

/// Sends control signals to processes.
///
/// Delivery reports only success or failure; there are no retries and no
/// error detail, the caller turns `false` into user-facing text.
pub trait Signaler {
    fn send(&mut self, pid: Pid, signal: ControlSignal) -> bool;

    fn terminate(&mut self, pid: Pid) -> bool {
        self.send(pid, ControlSignal::Terminate)
    }

    fn pause(&mut self, pid: Pid) -> bool {
        self.send(pid, ControlSignal::Pause)
    }

    fn resume(&mut self, pid: Pid) -> bool {
        self.send(pid, ControlSignal::Resume)
    }
}
