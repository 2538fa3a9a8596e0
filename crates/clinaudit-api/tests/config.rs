use std::collections::HashMap;

use clinaudit_api::config::{ApiConfig, LogFormat};

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn reads_overrides() {
    let config = config_from(&[
        ("CLINAUDIT_BIND_ADDR", "127.0.0.1:9000"),
        ("CLINAUDIT_LOG_FORMAT", "Text"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn rejects_malformed_values() {
    assert!(config_from(&[("CLINAUDIT_BIND_ADDR", "localhost")]).is_err());
    let err = config_from(&[("CLINAUDIT_LOG_FORMAT", "xml")]).unwrap_err();
    assert!(err.to_string().contains("xml"));
}
