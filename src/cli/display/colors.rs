//! Color mapping for CLI output.
//!
//! `console` disables styling automatically when output is not a terminal.

use console::{style, StyledObject};

use crate::domain::models::EnvironmentMode;

/// Returns a styled environment mode: production stands out.
pub fn colorize_mode(mode: EnvironmentMode) -> StyledObject<String> {
    match mode {
        EnvironmentMode::Production => style(mode.to_string()).red().bold(),
        EnvironmentMode::Development => style(mode.to_string()).green(),
    }
}

/// Styled label for detail views (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", style(name).bold(), style(":").dim())
}
