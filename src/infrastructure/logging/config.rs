use std::path::PathBuf;

use crate::domain::models::EnvironmentMode;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Console output format
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// Enable console (stderr) logging
    pub enable_console: bool,

    /// Log rotation policy
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            log_dir: None,
            enable_console: true,
            rotation: RotationPolicy::default(),
        }
    }
}

impl LogConfig {
    /// Logging profile for an environment mode.
    ///
    /// Development is verbose and human readable, production is quieter and
    /// structured.
    pub fn for_mode(mode: EnvironmentMode) -> Self {
        match mode {
            EnvironmentMode::Development => Self {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                ..Self::default()
            },
            EnvironmentMode::Production => Self {
                level: "info".to_string(),
                format: LogFormat::Json,
                ..Self::default()
            },
        }
    }

    /// Raise the level by `verbose` steps, saturating at `trace`.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let current = LEVELS
            .iter()
            .position(|level| level.eq_ignore_ascii_case(&self.level))
            .unwrap_or(2);
        let raised = (current + usize::from(verbose)).min(LEVELS.len() - 1);
        self.level = LEVELS[raised].to_string();
        self
    }

    /// Also write rolling JSON log files into `dir`.
    #[must_use]
    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }
}
