use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_bind_all_interfaces_on_3000() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HABITHIVE_HOST", "127.0.0.1"), ("PORT", " 8081 ")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8081");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HABITHIVE_HOST", ""), ("PORT", "  ")])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn invalid_host_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("HABITHIVE_HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HABITHIVE_HOST", .. }));
}
