use std::io::Write;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::highlight::SyntaxHighlighter;

pub static SHELL_LOGGER: ShellLogger = ShellLogger {
    highlighter: OnceLock::new(),
};

/// Writes `krsh: <level>: <message>` lines to stderr.
pub struct ShellLogger {
    highlighter: OnceLock<SyntaxHighlighter>,
}

impl Log for ShellLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let highlighter = self.highlighter.get_or_init(SyntaxHighlighter::new);
        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failing stderr.
        let _ = writeln!(
            stderr,
            "krsh: {}: {}",
            highlighter.highlight_level(record.level()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

pub fn level_for(quiet: bool, debug: bool) -> LevelFilter {
    match (quiet, debug) {
        (true, _) => LevelFilter::Off,
        (false, true) => LevelFilter::Debug,
        (false, false) => LevelFilter::Warn,
    }
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&SHELL_LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
