//! Configuration errors.

use thiserror::Error;

use super::models::ConfigKey;

/// Errors raised while loading or reading the configuration.
///
/// All of these are fatal at startup; nothing is defaulted silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required configuration key `{0}`")]
    MissingKey(ConfigKey),

    #[error("Invalid value for `{key}`: expected {expected} ({detail})")]
    InvalidFormat {
        key: ConfigKey,
        expected: &'static str,
        detail: String,
    },

    #[error("Configuration has not been loaded")]
    NotLoaded,

    #[error("Configuration has already been loaded")]
    AlreadyLoaded,

    #[error("Configuration source {origin} could not be read: {reason}")]
    Source { origin: String, reason: String },
}

impl ConfigError {
    /// Build an `InvalidFormat` error with the key's expected shape.
    pub fn invalid(key: ConfigKey, detail: impl Into<String>) -> Self {
        Self::InvalidFormat {
            key,
            expected: key.expected(),
            detail: detail.into(),
        }
    }

    /// The key the error refers to, if any.
    pub const fn key(&self) -> Option<ConfigKey> {
        match self {
            Self::MissingKey(key) | Self::InvalidFormat { key, .. } => Some(*key),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        let origin = err
            .metadata
            .as_ref()
            .map_or_else(|| "<unknown>".to_string(), |md| md.name.to_string());
        Self::Source {
            origin,
            reason: err.kind.to_string(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
