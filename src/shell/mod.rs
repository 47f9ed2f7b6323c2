use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use crate::{
    core::{
        commands::{BuiltinDispatcher, Flow},
        config::{Config, EditorMode},
    },
    error::ShellError,
    flags::Flags,
    input::{BufferedSource, EditorSource, LineSource, ReadOutcome, ShellHelper, TokenizeError, Tokenized, Tokenizer},
    process::ProcessLauncher,
};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The `exit` builtin ran.
    Exit,
    EndOfInput,
}

/// Read, tokenize, dispatch, release; one line at a time.
///
/// A line's external command has fully exited before the next line is read,
/// and its argument vector is dropped at the end of [`Shell::execute_line`]
/// whichever way dispatch went.
pub struct Shell<S, O = Stdout, E = Stderr> {
    source: S,
    tokenizer: Tokenizer,
    builtins: BuiltinDispatcher,
    launcher: ProcessLauncher,
    prompt: String,
    out: O,
    err: E,
}

impl<S: LineSource, O: Write, E: Write> Shell<S, O, E> {
    pub fn new(source: S, config: &Config, out: O, err: E) -> Self {
        Self {
            source,
            tokenizer: Tokenizer::new(config.max_args, config.split),
            builtins: BuiltinDispatcher::new(),
            launcher: ProcessLauncher::new(),
            prompt: config.prompt.clone(),
            out,
            err,
        }
    }

    pub fn run(&mut self) -> Result<SessionEnd, ShellError> {
        loop {
            let line = match self.source.read_line(&self.prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    log::debug!("end of input");
                    return Ok(SessionEnd::EndOfInput);
                }
            };

            if self.execute_line(line)? == Flow::Exit {
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// Runs one raw input line. Command failures are reported on the error
    /// stream; only a broken output stream is returned as an error.
    pub fn execute_line(&mut self, mut line: String) -> Result<Flow, ShellError> {
        let tokenized = self.tokenizer.tokenize(&mut line);
        self.dispatch(tokenized)
    }

    fn dispatch(&mut self, tokenized: Result<Tokenized, TokenizeError>) -> Result<Flow, ShellError> {
        let args = match tokenized {
            Ok(Tokenized::Args(args)) => args,
            Ok(Tokenized::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                self.report(&ShellError::from(e))?;
                return Ok(Flow::Continue);
            }
        };
        if args.is_truncated() {
            log::debug!("argument list truncated to {} tokens", args.len());
        }

        let outcome = if self.builtins.is_builtin(&args) {
            self.builtins
                .execute(&args, &mut self.out)
                .map_err(ShellError::from)
        } else {
            // Keep our own pending output ahead of the child's.
            self.out.flush()?;
            self.launcher
                .launch(&args)
                .map(|_| Flow::Continue)
                .map_err(ShellError::from)
        };

        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report(&mut self, e: &ShellError) -> io::Result<()> {
        writeln!(self.err, "krsh: {}", e)?;
        self.err.flush()
    }

    pub fn into_parts(self) -> (S, O, E) {
        (self.source, self.out, self.err)
    }
}

fn use_editor(flags: &Flags, config: &Config) -> bool {
    if flags.is_set("no-editor") {
        return false;
    }
    match config.editor {
        EditorMode::On => true,
        EditorMode::Off => false,
        EditorMode::Auto => io::stdin().is_terminal(),
    }
}

/// Runs a session on the process's standard streams.
pub fn start(flags: &Flags, config: &Config) -> Result<SessionEnd, ShellError> {
    if use_editor(flags, config) {
        let helper = ShellHelper::new(&BuiltinDispatcher::new().names());
        let source = EditorSource::new(helper, config.max_line)?;
        Shell::new(source, config, io::stdout(), io::stderr()).run()
    } else {
        let source = BufferedSource::new(io::stdin().lock(), io::stdout(), config.max_line);
        Shell::new(source, config, io::stdout(), io::stderr()).run()
    }
}
