#![allow(clippy::unwrap_used)]
// Loading and saving config files on disk.

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;

use dnslookup_config::{
    Config, Profile, load_config_from, profile_to_client_config, save_config_to,
};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(cfg.default_profile.as_deref(), Some("default"));
    assert_eq!(cfg.defaults.timeout, 30);
    assert!(cfg.profiles.is_empty());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
default_profile = "staging"

[defaults]
timeout = 12

[profiles.staging]
base_url = "http://127.0.0.1:8080/whoisserver/DNSService"
api_key = "plaintext-key"
insecure = true
"#,
    )
    .unwrap();

    let cfg = load_config_from(&path).unwrap();
    assert_eq!(cfg.active_profile_name(None), "staging");
    assert_eq!(cfg.defaults.timeout, 12);
    assert!(!cfg.defaults.insecure);

    let name = cfg.active_profile_name(None);
    let profile = &cfg.profiles[&name];
    let client = profile_to_client_config(profile, &name, &cfg.defaults).unwrap();

    assert_eq!(
        client.base_url.as_str(),
        "http://127.0.0.1:8080/whoisserver/DNSService"
    );
    assert_eq!(client.api_key.expose_secret(), "plaintext-key");
    assert_eq!(client.transport.timeout, Duration::from_secs(12));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_profile = [").unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.profiles.insert(
        "default".into(),
        Profile {
            api_key_env: Some("WHOISXML_KEY".into()),
            timeout: Some(7),
            ..Profile::default()
        },
    );
    save_config_to(&cfg, &path).unwrap();

    assert_eq!(load_config_from(&path).unwrap(), cfg);
}
