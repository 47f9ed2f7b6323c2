mod helper;
pub mod reader;
pub mod tokenizer;

pub use helper::ShellHelper;
pub use reader::{BufferedSource, EditorSource, LineSource, ReadOutcome, MAX_LINE};
pub use tokenizer::{ArgumentVector, SplitMode, TokenizeError, Tokenized, Tokenizer, MAX_ARGS};
