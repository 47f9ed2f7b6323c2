use std::env;
use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::input::ArgumentVector;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &ArgumentVector, _out: &mut dyn Write) -> Result<Flow, CommandError> {
        // No argument means no change; there is no implicit home directory.
        let Some(path) = args.get(1) else {
            return Err(CommandError::MissingArgument("cd"));
        };

        env::set_current_dir(path).map_err(|source| CommandError::ChangeDirectory {
            path: path.to_string(),
            source,
        })?;
        log::debug!("working directory changed to {}", path);
        Ok(Flow::Continue)
    }
}
