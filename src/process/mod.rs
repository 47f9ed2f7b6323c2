use std::fmt;
use std::io;

pub mod executor;

pub use executor::{ChildExecutionResult, ProcessLauncher};

#[derive(Debug)]
pub enum ProcessError {
    /// No child could be created; nothing was run.
    Spawn(io::Error),
    /// The child could not become the requested program.
    Exec { program: String, source: io::Error },
    Wait(io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "fork failed: {}", e),
            ProcessError::Exec { program, source } => write!(f, "exec: {}: {}", program, source),
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

impl ProcessError {
    /// Sorts a spawn failure into child creation or image replacement.
    pub fn from_spawn(program: &str, e: io::Error) -> Self {
        match e.raw_os_error() {
            Some(libc::EAGAIN) | Some(libc::ENOMEM) => ProcessError::Spawn(e),
            _ => ProcessError::Exec {
                program: program.to_string(),
                source: e,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spawn_classification() {
        let err = ProcessError::from_spawn("ls", io::Error::from_raw_os_error(libc::EAGAIN));
        assert!(matches!(err, ProcessError::Spawn(_)));

        let err = ProcessError::from_spawn("nope", io::Error::from_raw_os_error(libc::ENOENT));
        assert!(matches!(err, ProcessError::Exec { ref program, .. } if program == "nope"));
        assert!(err.to_string().starts_with("exec: nope: "));
    }
}
