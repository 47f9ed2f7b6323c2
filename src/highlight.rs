use inksac::prelude::*;
use log::Level;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Command word in cyan, `-flags` in yellow, separators kept as typed.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut seen_command = false;
        for piece in input.split_inclusive(char::is_whitespace) {
            let word = piece.trim_end_matches(char::is_whitespace);
            let gap = &piece[word.len()..];
            if word.is_empty() {
                out.push_str(gap);
                continue;
            }
            if !seen_command {
                let style = Style::builder().foreground(Color::Cyan).bold().build();
                out.push_str(&word.style(style).to_string());
                seen_command = true;
            } else if word.starts_with('-') {
                let style = Style::builder().foreground(Color::Yellow).build();
                out.push_str(&word.style(style).to_string());
            } else {
                out.push_str(word);
            }
            out.push_str(gap);
        }
        out
    }

    pub fn highlight_level(&self, level: Level) -> String {
        if !self.enabled() {
            return level.as_str().to_lowercase();
        }

        let color = match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Blue,
            Level::Trace => Color::RGB(128, 128, 128),
        };
        let style = Style::builder().foreground(color).bold().build();
        level.as_str().to_lowercase().style(style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passthrough() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(highlighter.highlight_command("ls  -la /tmp"), "ls  -la /tmp");
        assert_eq!(highlighter.highlight_level(Level::Warn), "warn");
    }
}
