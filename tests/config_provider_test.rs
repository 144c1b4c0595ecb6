//! Loading the layered project configuration end to end.

mod common;

use coffeeshop_config::{
    render, ConfigError, ConfigKey, ConfigLoader, ConfigProvider, EnvironmentMode, ExportFormat,
    SourceOptions,
};
use common::{env_assignments, sample_project, temp_project, write_config, SAMPLE_YAML};

/// Options with a prefix no other test (or the host) uses.
fn options(project: &std::path::Path, prefix: &str) -> SourceOptions {
    SourceOptions {
        env_prefix: prefix.to_string(),
        ..SourceOptions::for_project(project)
    }
}

#[test]
fn test_sample_project_loads() {
    let project = sample_project();
    let provider = ConfigProvider::new();

    let record = provider
        .load_layered(&options(project.path(), "CSTEST_SAMPLE_"))
        .expect("sample should load");

    assert_eq!(record.mode(), EnvironmentMode::Development);
    assert_eq!(record.api_server_url(), "http://127.0.0.1:5000");
    assert_eq!(record.auth().domain(), "dabolinux.us");
    assert_eq!(record.auth().audience(), "CoffeeShopNew");
    assert_eq!(record.auth().client_id(), "0qFP6YXf2hS20ERx8TQJDmrTK1EmZ17q");
    assert_eq!(record.auth().callback_url(), "http://localhost:8100");

    let again = provider.get().unwrap();
    assert_eq!(again, provider.get().unwrap());
}

#[test]
fn test_missing_client_id_is_named() {
    let project = temp_project();
    let without_client_id: String = SAMPLE_YAML
        .lines()
        .filter(|line| !line.contains("clientId"))
        .map(|line| format!("{line}\n"))
        .collect();
    write_config(project.path(), "config.yaml", &without_client_id);

    let err = ConfigLoader::load(&options(project.path(), "CSTEST_MISSING_")).unwrap_err();
    assert_eq!(err, ConfigError::MissingKey(ConfigKey::AuthClientId));
    assert_eq!(
        err.to_string(),
        "Missing required configuration key `auth0.clientId`"
    );
}

#[test]
fn test_empty_project_reports_first_key() {
    let project = temp_project();
    let err = ConfigLoader::load(&options(project.path(), "CSTEST_EMPTY_")).unwrap_err();
    assert_eq!(err, ConfigError::MissingKey(ConfigKey::Production));
}

#[test]
fn test_local_file_overrides_base() {
    let project = sample_project();
    write_config(
        project.path(),
        "local.yaml",
        "apiServerUrl: http://localhost:5001\n",
    );

    let record = ConfigLoader::load(&options(project.path(), "CSTEST_LOCAL_")).unwrap();
    assert_eq!(record.api_server_url(), "http://localhost:5001");
    assert_eq!(record.auth().audience(), "CoffeeShopNew");
}

#[test]
fn test_explicit_json_file_overrides_local() {
    let project = sample_project();
    write_config(project.path(), "local.yaml", "production: false\n");
    let json_path = project.path().join("production.json");
    std::fs::write(
        &json_path,
        r#"{ "production": true, "apiServerUrl": "https://api.coffee.example.com" }"#,
    )
    .unwrap();

    let opts = SourceOptions {
        config_file: Some(json_path),
        ..options(project.path(), "CSTEST_JSON_")
    };
    let record = ConfigLoader::load(&opts).unwrap();
    assert!(record.is_production());
    assert_eq!(record.api_server_url(), "https://api.coffee.example.com");
}

#[test]
fn test_env_overrides_files() {
    let project = sample_project();
    let opts = options(project.path(), "CSTEST_ENV_");

    temp_env::with_vars(
        [
            ("CSTEST_ENV_PRODUCTION", Some("true")),
            ("CSTEST_ENV_AUTH0__CLIENT_ID", Some("from-environment")),
            ("CSTEST_ENV_AUTH0__CALLBACK_URL", Some("https://shop.example.com")),
        ],
        || {
            let record = ConfigLoader::load(&opts).unwrap();
            assert!(record.is_production());
            assert_eq!(record.auth().client_id(), "from-environment");
            assert_eq!(record.auth().callback_url(), "https://shop.example.com");
            // Untouched keys still come from the file
            assert_eq!(record.auth().domain(), "dabolinux.us");
        },
    );
}

#[test]
fn test_env_only_configuration() {
    let project = temp_project();
    let opts = options(project.path(), "CSTEST_ONLY_");

    temp_env::with_vars(
        [
            ("CSTEST_ONLY_PRODUCTION", Some("false")),
            ("CSTEST_ONLY_API_SERVER_URL", Some("http://127.0.0.1:5000")),
            ("CSTEST_ONLY_AUTH0__URL", Some("dabolinux.us")),
            ("CSTEST_ONLY_AUTH0__AUDIENCE", Some("CoffeeShopNew")),
            ("CSTEST_ONLY_AUTH0__CLIENT_ID", Some("0qFP6YXf2hS20ERx8TQJDmrTK1EmZ17q")),
            ("CSTEST_ONLY_AUTH0__CALLBACK_URL", Some("http://localhost:8100")),
        ],
        || {
            let record = ConfigLoader::load(&opts).unwrap();
            assert_eq!(record.api_server_url(), "http://127.0.0.1:5000");
            assert_eq!(record.mode(), EnvironmentMode::Development);
        },
    );
}

#[test]
fn test_env_values_are_not_retyped() {
    let project = sample_project();
    let opts = options(project.path(), "CSTEST_RAW_");

    temp_env::with_vars(
        [
            ("CSTEST_RAW_AUTH0__CLIENT_ID", Some("12345678")),
            ("CSTEST_RAW_AUTH0__AUDIENCE", Some("true")),
        ],
        || {
            let record = ConfigLoader::load(&opts).unwrap();
            assert_eq!(record.auth().client_id(), "12345678");
            assert_eq!(record.auth().audience(), "true");
        },
    );

    temp_env::with_var("CSTEST_RAW_AUTH0__AUDIENCE", Some("\"My API\""), || {
        let record = ConfigLoader::load(&opts).unwrap();
        assert_eq!(record.auth().audience(), "\"My API\"");
    });
}

#[test]
fn test_env_export_loads_back() {
    let project = temp_project();
    write_config(
        project.path(),
        "config.yaml",
        "production: true\n\
         apiServerUrl: https://api.example.com\n\
         auth0:\n  url: shop.eu\n  audience: \"Coffee Shop's API\"\n  \
         clientId: \"12345678\"\n  callbackURL: https://shop.example.com\n",
    );
    let original = ConfigLoader::load(&options(project.path(), "CSTEST_EXPORTED_")).unwrap();
    let rendered = render(&original, ExportFormat::Env, "CSTEST_REIMPORT_").unwrap();

    let empty = temp_project();
    temp_env::with_vars(env_assignments(&rendered), || {
        let reloaded = ConfigLoader::load(&options(empty.path(), "CSTEST_REIMPORT_")).unwrap();
        assert_eq!(reloaded, original);
    });
}

#[test]
fn test_invalid_env_url_is_named() {
    let project = sample_project();
    let opts = options(project.path(), "CSTEST_BADURL_");

    temp_env::with_var("CSTEST_BADURL_API_SERVER_URL", Some("127.0.0.1:5000"), || {
        let err = ConfigLoader::load(&opts).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat { .. }));
        assert_eq!(err.key(), Some(ConfigKey::ApiServerUrl));
    });
}

#[test]
fn test_malformed_file_is_source_error() {
    let project = temp_project();
    write_config(project.path(), "config.yaml", "production: [false\n");

    let err = ConfigLoader::load(&options(project.path(), "CSTEST_MALFORMED_")).unwrap_err();
    assert!(
        matches!(err, ConfigError::Source { .. }),
        "Expected Source error, got {err:?}"
    );
}

#[test]
fn test_failed_layered_load_leaves_provider_unloaded() {
    let project = temp_project();
    let provider = ConfigProvider::new();

    assert!(provider
        .load_layered(&options(project.path(), "CSTEST_RETRY_"))
        .is_err());
    assert_eq!(provider.get().unwrap_err(), ConfigError::NotLoaded);

    write_config(project.path(), "config.yaml", SAMPLE_YAML);
    provider
        .load_layered(&options(project.path(), "CSTEST_RETRY_"))
        .unwrap();
    assert_eq!(
        provider
            .load_layered(&options(project.path(), "CSTEST_RETRY_"))
            .unwrap_err(),
        ConfigError::AlreadyLoaded
    );
}
