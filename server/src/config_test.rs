use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.public_dir.ends_with("../public"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", ""), ("PUBLIC_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.public_dir.ends_with("../public"));
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn overrides_are_applied() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("BIND_ADDR", "127.0.0.1"), ("PUBLIC_DIR", "/srv/www")]))
            .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/www"));
}

#[test]
fn ipv6_bind_address_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

// =============================================================================
// Malformed values
// =============================================================================

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { key: "PORT", ref value, .. } if value == "http"));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { key: "PORT", .. }));
}

#[test]
fn bad_bind_address_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { key: "BIND_ADDR", .. }));
}

// =============================================================================
// Process environment: unique key per test to avoid races.
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    // PORT itself is shared, so only assert that a parse of the live
    // environment agrees with a lookup of the same values.
    let live = ServerConfig::from_env();
    let mirrored = ServerConfig::from_lookup(|key| std::env::var(key).ok());
    assert_eq!(live.ok(), mirrored.ok());
}

#[test]
fn parse_or_reads_unique_variable() {
    let key = "__TEST_PORTFOLIO_PARSE_OR__";
    unsafe { std::env::set_var(key, "4242") };
    let parsed: u16 = parse_or("PORT", std::env::var(key).ok(), 1).unwrap();
    assert_eq!(parsed, 4242);
    unsafe { std::env::remove_var(key) };
}
