use sysdash_core::model::Pid;
use sysdash_core::signal::{ControlSignal, Signaler};

/// Delivers control signals with `kill(2)`
#[derive(Debug, Default)]
pub struct OsSignaler;

#[cfg(unix)]
fn signal_number(signal: ControlSignal) -> libc::c_int {
    match signal {
        ControlSignal::Terminate => libc::SIGKILL,
        ControlSignal::Pause => libc::SIGSTOP,
        ControlSignal::Resume => libc::SIGCONT,
    }
}

/// Pids that would make `kill` address a process group rather than one process
#[cfg_attr(not(unix), allow(dead_code))]
fn target(pid: Pid) -> Option<i32> {
    match i32::try_from(pid) {
        Ok(raw) if raw > 0 => Some(raw),
        _ => None,
    }
}

impl Signaler for OsSignaler {
    #[cfg(unix)]
    fn send(&mut self, pid: Pid, signal: ControlSignal) -> bool {
        let Some(raw) = target(pid) else {
            log::warn!("not signalling invalid pid {}", pid);
            return false;
        };

        let rc = unsafe { libc::kill(raw as libc::pid_t, signal_number(signal)) };
        if rc == 0 {
            log::debug!("{:?} delivered to pid {}", signal, pid);
            true
        } else {
            log::warn!(
                "{:?} to pid {} failed: {}",
                signal,
                pid,
                std::io::Error::last_os_error()
            );
            false
        }
    }

    #[cfg(not(unix))]
    fn send(&mut self, pid: Pid, signal: ControlSignal) -> bool {
        log::warn!("{:?} to pid {} unsupported on this platform", signal, pid);
        false
    }
}
