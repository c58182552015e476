/// Process id as reported by the operating system
pub type Pid = u32;

/// System-wide metrics for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub os_name: String,
    pub kernel: String,
    /// Global CPU utilization, 0.0 - 1.0
    pub cpu_utilization: f64,
    /// Used / total memory, 0.0 - 1.0
    pub memory_utilization: f64,
    pub total_processes: usize,
    pub running_processes: usize,
    pub uptime_secs: u64,
}

/// One line of the process table.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRow {
    pub pid: Pid,
    pub user: String,
    /// CPU utilization, 0.0 - 1.0 of one core
    pub cpu_utilization: f64,
    /// Resident memory, already formatted for display (MB)
    pub ram: String,
    pub uptime_secs: u64,
    /// Single-letter state code such as `R`, `S` or `T`
    pub state: String,
    pub command: String,
}

impl ProcessRow {
    pub fn process_state(&self) -> ProcessState {
        ProcessState::from_code(&self.state)
    }
}

/// Coarse classification of a process, used for row coloring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Sleeping,
    Stopped,
    Other,
}

impl ProcessState {
    /// Classify by the first character of a state code.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('R') => Self::Running,
            Some('S') => Self::Sleeping,
            Some('T') => Self::Stopped,
            _ => Self::Other,
        }
    }
}
