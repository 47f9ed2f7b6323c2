use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::{ExitCommand, FAREWELL};

use crate::input::ArgumentVector;

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    ChangeDirectory { path: String, source: io::Error },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => write!(f, "{}: missing argument", cmd),
            CommandError::ChangeDirectory { path, source } => write!(f, "cd: {}: {}", path, source),
        }
    }
}

impl std::error::Error for CommandError {}

/// What the session loop does after a builtin returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &ArgumentVector, out: &mut dyn Write) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &ArgumentVector, out: &mut dyn Write) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, out),
            CommandType::Exit(cmd) => cmd.execute(args, out),
        }
    }
}

/// Runs the commands that must live inside the interpreter process.
///
/// These mutate process-wide state (the working directory) with no locking;
/// the single-threaded session loop is what keeps that sound. Running
/// commands concurrently would need serialisation around `cd`.
#[derive(Clone)]
pub struct BuiltinDispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        Self { commands }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn is_builtin(&self, args: &ArgumentVector) -> bool {
        self.commands.contains_key(args.command())
    }

    /// Callers must check [`BuiltinDispatcher::is_builtin`] first.
    pub fn execute(&self, args: &ArgumentVector, out: &mut dyn Write) -> Result<Flow, CommandError> {
        let Some(cmd) = self.commands.get(args.command()) else {
            unreachable!("`{}` dispatched as a builtin", args.command());
        };
        log::debug!("builtin: {}", args.command());
        cmd.execute(args, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Tokenized, Tokenizer};
    use crate::test_support::cwd_lock;
    use std::env;

    fn argv(line: &str) -> ArgumentVector {
        match Tokenizer::default().tokenize(&mut line.to_string()).unwrap() {
            Tokenized::Args(args) => args,
            Tokenized::Empty => panic!("empty line"),
        }
    }

    #[test]
    fn test_classify() {
        let dispatcher = BuiltinDispatcher::new();
        assert!(dispatcher.is_builtin(&argv("cd /tmp")));
        assert!(dispatcher.is_builtin(&argv("exit")));
        assert!(!dispatcher.is_builtin(&argv("ls -la")));
        assert!(!dispatcher.is_builtin(&argv("CD /tmp")));
        assert!(!dispatcher.is_builtin(&argv("exit2")));
        assert_eq!(dispatcher.names(), ["cd", "exit"]);
    }

    #[test]
    fn test_execute_cd() {
        let _guard = cwd_lock();
        let original = env::current_dir().unwrap();
        let dispatcher = BuiltinDispatcher::new();
        let temp_dir = env::temp_dir().canonicalize().unwrap();
        let mut out = Vec::<u8>::new();

        let flow = dispatcher
            .execute(&argv(&format!("cd {}", temp_dir.display())), &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(env::current_dir().unwrap(), temp_dir);

        let result = dispatcher.execute(&argv("cd /path/that/does/not/exist"), &mut out);
        assert!(matches!(result, Err(CommandError::ChangeDirectory { .. })));
        assert_eq!(env::current_dir().unwrap(), temp_dir);
        assert!(out.is_empty());

        env::set_current_dir(original).unwrap();
    }

    #[test]
    fn test_execute_exit_ignores_arguments() {
        let dispatcher = BuiltinDispatcher::new();
        let mut out = Vec::<u8>::new();

        let flow = dispatcher.execute(&argv("exit 3 now"), &mut out).unwrap();
        assert_eq!(flow, Flow::Exit);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", FAREWELL));
    }

    #[test]
    #[should_panic(expected = "dispatched as a builtin")]
    fn test_non_builtin_is_a_contract_violation() {
        let dispatcher = BuiltinDispatcher::new();
        let _ = dispatcher.execute(&argv("ls"), &mut Vec::<u8>::new());
    }
}
