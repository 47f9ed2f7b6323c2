use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Self {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }

    fn with_value(mut self) -> Self {
        self.takes_value = true;
        self
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();
        flags.insert("help", Flag::new("-h", "--help", "Print this help message"));
        flags.insert(
            "version",
            Flag::new("-v", "--version", "Show version information"),
        );
        flags.insert(
            "config",
            Flag::new("-c", "--config", "Read settings from this file instead of ~/.krshrc")
                .with_value(),
        );
        flags.insert("quiet", Flag::new("-q", "--quiet", "Suppress diagnostics"));
        flags.insert("debug", Flag::new("-d", "--debug", "Enable debug output"));
        flags.insert(
            "no-editor",
            Flag::new("-n", "--no-editor", "Read plain lines even on a terminal"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let Some(flag) = self
                .flags
                .values_mut()
                .find(|f| arg == f.short || arg == f.long)
            else {
                return Err(ShellError::FlagError(format!("unknown option {}", arg)));
            };

            if flag.takes_value {
                let value = iter.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: krsh [OPTIONS]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by_key(|f| f.long);
        for flag in flags {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<18} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let mut flags = Flags::new();
        flags
            .parse(&args(&["-q", "--config", "/tmp/rc", "--no-editor"]))
            .unwrap();

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("no-editor"));
        assert!(!flags.is_set("debug"));
        assert_eq!(flags.get_value("config").map(String::as_str), Some("/tmp/rc"));
    }

    #[test]
    fn test_config_requires_value() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-c"])),
            Err(ShellError::FlagError(_))
        ));
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["--login"])),
            Err(ShellError::FlagError(_))
        ));
    }
}
