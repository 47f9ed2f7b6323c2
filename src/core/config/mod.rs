use std::{fmt, path::PathBuf, str::FromStr};

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

use crate::input::{SplitMode, MAX_ARGS, MAX_LINE};

pub const DEFAULT_PROMPT: &str = "krsh> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Line editor only when stdin is a terminal.
    #[default]
    Auto,
    On,
    Off,
}

impl FromStr for EditorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(EditorMode::Auto),
            "on" => Ok(EditorMode::On),
            "off" => Ok(EditorMode::Off),
            other => Err(format!("expected auto, on or off, got {}", other)),
        }
    }
}

/// Startup settings. Read once; nothing changes them while the session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub max_line: usize,
    pub max_args: usize,
    pub split: SplitMode,
    pub editor: EditorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_line: MAX_LINE,
            max_args: MAX_ARGS,
            split: SplitMode::default(),
            editor: EditorMode::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the rc file, if there is one.
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        ConfigLoader::new(paths).load_configs(&mut config)?;
        Ok(config)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        match key {
            "prompt" => self.prompt = value.to_string(),
            "max_line" => self.max_line = parse_limit(value).map_err(invalid)?,
            "max_args" => self.max_args = parse_limit(value).map_err(invalid)?,
            "split" => self.split = value.parse().map_err(invalid)?,
            "editor" => self.editor = value.parse().map_err(invalid)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    let n: usize = value.parse().map_err(|e| format!("{}", e))?;
    if n < 2 {
        return Err("must be at least 2".to_string());
    }
    Ok(n)
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(PathBuf),
    UnknownKey(String),
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::UnknownKey(key) => write!(f, "Unknown config key: {}", key),
            ConfigError::InvalidValue { key, value, reason } => {
                write!(f, "Invalid value for {}: {:?} ({})", key, value, reason)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, "krsh> ");
        assert_eq!(config.max_line, 1024);
        assert_eq!(config.max_args, 64);
        assert_eq!(config.split, SplitMode::Whitespace);
        assert_eq!(config.editor, EditorMode::Auto);
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("max_args", "8").unwrap();
        config.set("split", "space").unwrap();
        config.set("editor", "off").unwrap();
        assert_eq!(config.max_args, 8);
        assert_eq!(config.split, SplitMode::Space);
        assert_eq!(config.editor, EditorMode::Off);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("max_line", "1"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("max_args", "many"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("colour", "yes"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert_eq!(config, Config::default());
    }
}
