use std::ffi::OsString;

use sysinfo::{Process, ProcessStatus, ProcessesToUpdate, System, Users};

use sysdash_core::format::kb_to_mb;
use sysdash_core::model::{MetricsSnapshot, ProcessRow};
use sysdash_core::source::DataSource;

const UNKNOWN: &str = "unknown";

/// `DataSource` backed by the `sysinfo` crate
pub struct SystemSampler {
    system: System,
    users: Users,
}

impl SystemSampler {
    pub fn new() -> Self {
        Self {
            system: System::new_all(),
            users: Users::new_with_refreshed_list(),
        }
    }

    fn user_name(&self, process: &Process) -> Option<String> {
        let uid = process.user_id()?;
        self.users
            .get_user_by_id(uid)
            .map(|user| user.name().to_string())
    }

    fn row(&self, process: &Process) -> ProcessRow {
        ProcessRow {
            pid: process.pid().as_u32(),
            user: self.user_name(process).unwrap_or_else(|| "?".into()),
            cpu_utilization: f64::from(process.cpu_usage()) / 100.0,
            ram: kb_to_mb(process.memory() as f64 / 1024.0),
            uptime_secs: process.run_time(),
            state: state_code(process.status()).into(),
            command: command_line(process.cmd(), &process.name().to_string_lossy()),
        }
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for SystemSampler {
    fn system(&mut self) -> MetricsSnapshot {
        self.system.refresh_cpu_all();
        self.system.refresh_memory();

        // counted from the last `processes()` refresh, so they match its rows
        let processes = self.system.processes();
        let running = processes
            .values()
            .filter(|p| p.status() == ProcessStatus::Run)
            .count();

        MetricsSnapshot {
            os_name: System::name().unwrap_or_else(|| UNKNOWN.into()),
            kernel: System::kernel_version().unwrap_or_else(|| UNKNOWN.into()),
            cpu_utilization: f64::from(self.system.global_cpu_usage()) / 100.0,
            memory_utilization: utilization(
                self.system.used_memory(),
                self.system.total_memory(),
            ),
            total_processes: processes.len(),
            running_processes: running,
            uptime_secs: System::uptime(),
        }
    }

    fn processes(&mut self) -> Vec<ProcessRow> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);

        // new uids show up when users log in after startup
        let unknown_uid = self
            .system
            .processes()
            .values()
            .filter_map(|p| p.user_id())
            .any(|uid| self.users.get_user_by_id(uid).is_none());
        if unknown_uid {
            self.users.refresh_list();
        }

        let mut rows: Vec<ProcessRow> = self
            .system
            .processes()
            .values()
            .map(|p| self.row(p))
            .collect();
        rows.sort_by_key(|row| row.pid);
        log::trace!("sampled {} processes", rows.len());
        rows
    }
}

/// `used / total`, or 0 when the total is unknown
fn utilization(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (used as f64 / total as f64).clamp(0.0, 1.0)
    }
}

/// `ps`-style single letter for a process status
fn state_code(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::Run => "R",
        ProcessStatus::Sleep => "S",
        ProcessStatus::Idle => "I",
        ProcessStatus::Stop => "T",
        ProcessStatus::Zombie => "Z",
        ProcessStatus::Tracing => "t",
        ProcessStatus::Dead => "X",
        ProcessStatus::UninterruptibleDiskSleep => "D",
        _ => "?",
    }
}

/// Full argv joined by spaces, or the bare name for kernel threads
fn command_line(argv: &[OsString], name: &str) -> String {
    if argv.is_empty() {
        return name.to_string();
    }
    argv.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
