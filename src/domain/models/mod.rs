pub mod config_key;
pub mod record;

pub use config_key::{fold_key, ConfigKey};
pub use record::{
    AuthDocument, AuthProviderConfig, ConfigurationRecord, EnvironmentDocument, EnvironmentMode,
    ServiceUrl, AUTH0_HOST_SUFFIX,
};
