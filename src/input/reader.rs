use std::io::{BufRead, Read, Write};

use rustyline::{config::Configurer, error::ReadlineError, history::MemHistory, Editor};

use super::helper::ShellHelper;
use crate::error::ShellError;

/// Bytes per line read, counting the terminator.
pub const MAX_LINE: usize = 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The operator abandoned the line being edited.
    Interrupted,
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;
}

/// fgets-style reader: at most `max_line - 1` bytes per call, so an overlong
/// line comes back as several consecutive lines.
pub struct BufferedSource<R, W> {
    reader: R,
    prompt_out: W,
    max_line: usize,
}

impl<R: BufRead, W: Write> BufferedSource<R, W> {
    pub fn new(reader: R, prompt_out: W, max_line: usize) -> Self {
        Self {
            reader,
            prompt_out,
            max_line,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> LineSource for BufferedSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        let limit = self.max_line.saturating_sub(1).max(1) as u64;
        let mut buf = Vec::new();
        let read = Read::take(&mut self.reader, limit).read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(ReadOutcome::Eof);
        }

        Ok(ReadOutcome::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Interactive line editor with in-memory history.
pub struct EditorSource {
    editor: Editor<ShellHelper, MemHistory>,
    max_line: usize,
}

impl EditorSource {
    pub fn new(helper: ShellHelper, max_line: usize) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, MemHistory>::with_history(
            rustyline::Config::default(),
            MemHistory::new(),
        )?;
        editor.set_helper(Some(helper));
        editor.set_auto_add_history(true);

        Ok(Self { editor, max_line })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(mut line) => {
                truncate_at_boundary(&mut line, self.max_line.saturating_sub(1));
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

fn truncate_at_boundary(line: &mut String, max: usize) {
    if line.len() <= max {
        return;
    }
    let mut end = max;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    log::debug!("input line truncated to {} bytes", end);
    line.truncate(end);
}
