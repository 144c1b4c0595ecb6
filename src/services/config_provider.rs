//! One-shot configuration provider.

use figment::Provider;
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::ConfigurationRecord;
use crate::infrastructure::config::{ConfigLoader, SourceOptions};

/// Lifecycle state of a [`ConfigProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    Unloaded,
    Loaded,
}

/// Resolves the configuration once and hands out the immutable record.
///
/// `Unloaded` moves to `Loaded` on the first successful [`load`]; a failed
/// load leaves the provider `Unloaded`. After loading, [`get`] is safe to call
/// from any number of threads.
///
/// [`load`]: ConfigProvider::load
/// [`get`]: ConfigProvider::get
#[derive(Debug, Default)]
pub struct ConfigProvider {
    record: OnceLock<ConfigurationRecord>,
}

impl ConfigProvider {
    pub const fn new() -> Self {
        Self {
            record: OnceLock::new(),
        }
    }

    /// A provider that is already loaded with `record`.
    pub fn from_record(record: ConfigurationRecord) -> Self {
        let provider = Self::new();
        let _ = provider.record.set(record);
        provider
    }

    /// Resolve and validate `source`, then keep the result.
    ///
    /// Fails with `AlreadyLoaded` if a record is already held; the held
    /// record is left untouched.
    pub fn load<P: Provider>(&self, source: P) -> ConfigResult<&ConfigurationRecord> {
        if self.is_loaded() {
            return Err(ConfigError::AlreadyLoaded);
        }

        let record = ConfigLoader::resolve(source).inspect_err(|err| {
            warn!(error = %err, "configuration rejected");
        })?;

        self.record
            .set(record)
            .map_err(|_| ConfigError::AlreadyLoaded)?;
        let record = self.get()?;

        info!(
            mode = %record.mode(),
            api_server_url = record.api_server_url(),
            auth_domain = record.auth().domain(),
            "configuration loaded"
        );
        Ok(record)
    }

    /// Load the layered project configuration described by `options`.
    pub fn load_layered(&self, options: &SourceOptions) -> ConfigResult<&ConfigurationRecord> {
        self.load(ConfigLoader::figment(options)?)
    }

    /// The loaded record.
    pub fn get(&self) -> ConfigResult<&ConfigurationRecord> {
        self.record.get().ok_or(ConfigError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.record.get().is_some()
    }

    pub fn state(&self) -> ProviderState {
        if self.is_loaded() {
            ProviderState::Loaded
        } else {
            ProviderState::Unloaded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigKey;
    use figment::providers::Serialized;
    use serde_json::json;

    fn source(client_id: Option<&str>) -> Serialized<serde_json::Value> {
        let mut value = json!({
            "production": true,
            "apiServerUrl": "https://api.coffee.example.com",
            "auth0": {
                "url": "coffee.eu",
                "audience": "drinks",
                "callbackURL": "https://coffee.example.com"
            }
        });
        if let Some(id) = client_id {
            value["auth0"]["clientId"] = json!(id);
        }
        Serialized::defaults(value)
    }

    #[test]
    fn test_get_before_load() {
        let provider = ConfigProvider::new();
        assert_eq!(provider.get().unwrap_err(), ConfigError::NotLoaded);
        assert_eq!(provider.state(), ProviderState::Unloaded);
    }

    #[test]
    fn test_load_then_get() {
        let provider = ConfigProvider::new();
        let loaded = provider.load(source(Some("abc123"))).unwrap().clone();

        assert_eq!(provider.state(), ProviderState::Loaded);
        assert_eq!(provider.get().unwrap(), &loaded);
        assert_eq!(provider.get().unwrap(), provider.get().unwrap());
        assert!(loaded.is_production());
    }

    #[test]
    fn test_failed_load_stays_unloaded_and_can_retry() {
        let provider = ConfigProvider::new();
        let err = provider.load(source(None)).unwrap_err();
        assert_eq!(err, ConfigError::MissingKey(ConfigKey::AuthClientId));
        assert!(!provider.is_loaded());
        assert_eq!(provider.get().unwrap_err(), ConfigError::NotLoaded);

        provider.load(source(Some("abc123"))).unwrap();
        assert!(provider.is_loaded());
    }

    #[test]
    fn test_second_load_is_rejected() {
        let provider = ConfigProvider::new();
        provider.load(source(Some("first"))).unwrap();

        let err = provider.load(source(Some("second"))).unwrap_err();
        assert_eq!(err, ConfigError::AlreadyLoaded);
        assert_eq!(provider.get().unwrap().auth().client_id(), "first");
    }

    #[test]
    fn test_from_record() {
        let record = ConfigLoader::resolve(source(Some("abc123"))).unwrap();
        let provider = ConfigProvider::from_record(record.clone());
        assert_eq!(provider.state(), ProviderState::Loaded);
        assert_eq!(provider.get().unwrap(), &record);
    }

    #[test]
    fn test_concurrent_readers_see_same_record() {
        let provider = ConfigProvider::new();
        provider.load(source(Some("abc123"))).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| provider.get().unwrap().auth().client_id().to_string()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "abc123");
            }
        });
    }
}
