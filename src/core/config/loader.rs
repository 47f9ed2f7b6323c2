use std::{fs, path::Path};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let Some(path) = self.paths.rc_path.as_deref() else {
            return Ok(());
        };
        if self.paths.required && !path.exists() {
            return Err(ConfigError::ConfigFileNotFound(path.to_path_buf()));
        }
        self.source_if_exists(path, config)
    }

    fn source_if_exists(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        if path.exists() {
            log::debug!("reading config from {}", path.display());
            let content = fs::read_to_string(path)?;
            for (number, line) in content.lines().enumerate() {
                self.process_line(number + 1, line, config)?;
            }
        }
        Ok(())
    }

    fn process_line(&self, number: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            log::warn!("config line {}: expected key = value", number);
            return Ok(());
        };
        let key = key.trim();
        let mut value = value.trim();

        // Quotes keep surrounding spaces, e.g. in the prompt.
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        match config.set(key, value) {
            Err(ConfigError::UnknownKey(key)) => {
                log::warn!("config line {}: unknown key {}", number, key);
                Ok(())
            }
            other => other,
        }
    }
}
