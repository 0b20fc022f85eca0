use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed_and_trailing_slash_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://books.example.edu/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://books.example.edu");
    assert_eq!(cfg.backend_timeout, Duration::from_secs(5));
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "0", "70000"] {
        let err = HostConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, StartupError::InvalidEnv { var: "PORT", .. }), "{raw}: {err}");
    }
}

#[test]
fn backend_url_needs_http_scheme_and_host() {
    for raw in ["localhost:8000", "ftp://host", "http://", "https:///"] {
        let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", raw)])).unwrap_err();
        assert!(matches!(err, StartupError::InvalidEnv { var: "BACKEND_URL", .. }), "{raw}: {err}");
    }
}

#[test]
fn zero_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "0")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid BACKEND_TIMEOUT_SECS: \"0\" (expected a positive number of seconds)"
    );
}
