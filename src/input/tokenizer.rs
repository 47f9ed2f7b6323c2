use std::collections::TryReserveError;
use std::fmt;
use std::str::FromStr;

/// Slots per argument vector, counting the end marker.
pub const MAX_ARGS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Only a literal space separates tokens; tabs stay inside a token.
    Space,
    /// Any run of whitespace separates tokens.
    #[default]
    Whitespace,
}

impl SplitMode {
    fn is_separator(self, c: char) -> bool {
        match self {
            SplitMode::Space => c == ' ',
            SplitMode::Whitespace => c.is_whitespace(),
        }
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space" => Ok(SplitMode::Space),
            "whitespace" => Ok(SplitMode::Whitespace),
            other => Err(format!("unknown split mode: {}", other)),
        }
    }
}

#[derive(Debug)]
pub enum TokenizeError {
    Allocation(TryReserveError),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::Allocation(e) => write!(f, "allocation failure: {}", e),
        }
    }
}

impl std::error::Error for TokenizeError {}

impl From<TryReserveError> for TokenizeError {
    fn from(e: TryReserveError) -> Self {
        TokenizeError::Allocation(e)
    }
}

/// The owned tokens of one input line. The first token is the command name.
///
/// The end marker is implicit: [`ArgumentVector::get`] yields `None` for the
/// slot right after the last token, truncated or not. Every token is released
/// together with the vector when it goes out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentVector {
    tokens: Vec<String>,
    truncated: bool,
}

impl ArgumentVector {
    pub fn command(&self) -> &str {
        &self.tokens[0]
    }

    /// Positional arguments after the command name.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Whether words past the slot limit were dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Tokenized {
    /// Nothing to dispatch on this line.
    Empty,
    Args(ArgumentVector),
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    max_args: usize,
    mode: SplitMode,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(MAX_ARGS, SplitMode::default())
    }
}

impl Tokenizer {
    pub fn new(max_args: usize, mode: SplitMode) -> Self {
        Self { max_args, mode }
    }

    /// Tokens kept per line; one slot is reserved for the end marker.
    pub fn capacity(&self) -> usize {
        self.max_args.saturating_sub(1).max(1)
    }

    /// Strips one trailing newline from `line` and splits what remains.
    ///
    /// Words beyond [`Tokenizer::capacity`] are dropped silently; the result
    /// records this in [`ArgumentVector::is_truncated`].
    pub fn tokenize(&self, line: &mut String) -> Result<Tokenized, TokenizeError> {
        if line.ends_with('\n') {
            line.pop();
        }

        if line.trim().is_empty() {
            return Ok(Tokenized::Empty);
        }

        let limit = self.capacity();
        let mode = self.mode;
        let mut words = line
            .split(move |c: char| mode.is_separator(c))
            .filter(|word| !word.is_empty());

        let mut tokens: Vec<String> = Vec::new();
        tokens.try_reserve(limit.min(line.len() / 2 + 1))?;

        while tokens.len() < limit {
            let Some(word) = words.next() else {
                break;
            };
            tokens.try_reserve(1)?;
            tokens.push(duplicate(word)?);
        }
        let truncated = words.next().is_some();

        if tokens.is_empty() {
            return Ok(Tokenized::Empty);
        }

        Ok(Tokenized::Args(ArgumentVector { tokens, truncated }))
    }
}

fn duplicate(word: &str) -> Result<String, TryReserveError> {
    let mut token = String::new();
    token.try_reserve_exact(word.len())?;
    token.push_str(word);
    Ok(token)
}
