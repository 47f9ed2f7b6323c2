use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::input::ArgumentVector;

pub const FAREWELL: &str = "Goodbye!";

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Trailing arguments are ignored; the session always ends with status 0.
    fn execute(&self, _args: &ArgumentVector, out: &mut dyn Write) -> Result<Flow, CommandError> {
        if let Err(e) = writeln!(out, "{}", FAREWELL).and_then(|_| out.flush()) {
            log::warn!("could not write farewell: {}", e);
        }
        Ok(Flow::Exit)
    }
}
