use std::{borrow::Cow, collections::BTreeSet, env, fs};

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::highlight::SyntaxHighlighter;

/// Editor helper: completes the command word and colours the line.
#[derive(Clone)]
pub struct ShellHelper {
    commands: BTreeSet<Cow<'static, str>>,
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new(builtins: &[&'static str]) -> Self {
        let mut helper = Self {
            commands: BTreeSet::new(),
            highlighter: SyntaxHighlighter::new(),
        };
        helper
            .commands
            .extend(builtins.iter().map(|&name| Cow::Borrowed(name)));
        helper.add_path_commands();
        helper
    }

    fn add_path_commands(&mut self) {
        let Some(path_var) = env::var_os("PATH") else {
            return;
        };
        for dir in env::split_paths(&path_var) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_candidate = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_candidate, entry.file_name().to_str()) {
                    self.commands.insert(Cow::Owned(name.to_string()));
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let start = before_cursor.len() - before_cursor.trim_start().len();

        // Only the command word is completed; arguments are left alone.
        if before_cursor[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        Ok((start, self.complete_command(&before_cursor[start..])))
    }
}
