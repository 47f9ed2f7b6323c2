use std::ffi::CStr;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;
use crate::input::ArgumentVector;

/// Exit status of the one child just reaped. Nothing keeps it past the
/// dispatch cycle that produced it.
#[derive(Debug, Clone, Copy)]
pub struct ChildExecutionResult {
    pub pid: u32,
    pub status: ExitStatus,
}

impl ChildExecutionResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn describe(&self) -> String {
        match (self.status.code(), self.status.signal()) {
            (Some(code), _) => format!("exit status {}", code),
            (None, Some(signal)) => format!("terminated by {}", signal_name(signal)),
            (None, None) => self.status.to_string(),
        }
    }
}

fn signal_name(signal: i32) -> String {
    // SAFETY: strsignal returns a NUL-terminated string that stays valid
    // until the next call on this thread; it is copied out immediately.
    let name = unsafe { libc::strsignal(signal) };
    if name.is_null() {
        return format!("signal {}", signal);
    }
    unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned()
}

/// Runs external programs one at a time and blocks until each exits.
#[derive(Clone, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `args` with inherited stdio and waits for that child only.
    ///
    /// The program name is resolved through `PATH` unless it contains a `/`;
    /// relative names resolve against the current working directory.
    pub fn launch(&self, args: &ArgumentVector) -> Result<ChildExecutionResult, ProcessError> {
        let program = args.command();
        let mut child = Command::new(program)
            .args(args.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ProcessError::from_spawn(program, e))?;

        log::debug!("spawned {} as pid {}", program, child.id());

        let status = child.wait().map_err(ProcessError::Wait)?;
        let result = ChildExecutionResult {
            pid: child.id(),
            status,
        };
        log::debug!("pid {} finished: {}", result.pid, result.describe());
        if !result.success() {
            log::info!("{}: {}", program, result.describe());
        }
        Ok(result)
    }
}
