use crate::report::format::{Delta, Trend};
use colored::Colorize;
use std::io::IsTerminal;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only a terminal stdout with `NO_COLOR` unset.
    pub fn resolve(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && !no_color,
        }
    }

    /// Resolve against the real stdout and environment, and set `colored`'s
    /// process-wide override to match. Call once, from the binary.
    pub fn apply(self) -> bool {
        let enabled = self.resolve(
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        );
        colored::control::set_override(enabled);
        enabled
    }
}

/// Green for headings and shrinkage, red for growth.
#[derive(Copy, Clone, Debug)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn delta(&self, delta: &Delta) -> String {
        let text = delta.to_string();
        if !self.color {
            return text;
        }
        match delta.trend {
            Trend::Shrank => text.green().to_string(),
            Trend::Grew => text.red().to_string(),
            Trend::Unchanged => text,
        }
    }
}
