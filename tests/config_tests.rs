use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use zone_printer::config;
use zone_printer::error::ConfigError;

// Tests touching process environment must not interleave.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_get_port_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("PORT");

    assert_eq!(config::get_port(), "8080");
}

#[test]
fn test_get_port_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PORT", "9090");

    assert_eq!(config::get_port(), "9090");

    env::remove_var("PORT");
}

#[test]
fn test_get_port_ignores_empty_value() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PORT", "");

    assert_eq!(config::get_port(), "8080");

    env::remove_var("PORT");
}

#[test]
fn test_get_addr_defaults_to_all_interfaces() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("ADDR");

    assert_eq!(config::get_addr(), "");
}

#[test]
fn test_get_addr_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("ADDR", "127.0.0.1");

    assert_eq!(config::get_addr(), "127.0.0.1");

    env::remove_var("ADDR");
}

#[test]
fn test_fake_zone_unset_or_empty_is_none() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("FAKE_ZONE");
    assert_eq!(config::get_fake_zone(), None);

    env::set_var("FAKE_ZONE", "");
    assert_eq!(config::get_fake_zone(), None);

    env::remove_var("FAKE_ZONE");
}

#[test]
fn test_fake_zone_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("FAKE_ZONE", "europe-west1-b");

    assert_eq!(config::get_fake_zone().as_deref(), Some("europe-west1-b"));

    env::remove_var("FAKE_ZONE");
}

#[test]
fn test_metadata_host_is_trimmed() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("GCE_METADATA_HOST", " 127.0.0.1:8181 ");

    assert_eq!(config::get_metadata_host().as_deref(), Some("127.0.0.1:8181"));

    env::remove_var("GCE_METADATA_HOST");
}

#[test]
fn test_bind_address_empty_host_binds_everything() {
    assert_eq!(
        config::bind_address("", "8080").unwrap(),
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080)
    );
}

#[test]
fn test_bind_address_ipv4() {
    assert_eq!(
        config::bind_address("127.0.0.1", "5000").unwrap(),
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000)
    );
}

#[test]
fn test_bind_address_ipv6_with_and_without_brackets() {
    let expected = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 8080);
    assert_eq!(config::bind_address("::1", "8080").unwrap(), expected);
    assert_eq!(config::bind_address("[::1]", "8080").unwrap(), expected);
}

#[test]
fn test_bind_address_rejects_bad_port() {
    assert!(matches!(
        config::bind_address("", "http"),
        Err(ConfigError::InvalidPort(_))
    ));
    assert!(matches!(
        config::bind_address("", "70000"),
        Err(ConfigError::InvalidPort(_))
    ));
}

#[test]
fn test_env_file_feeds_log_filter_and_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("RUST_LOG");
    env::remove_var("FAKE_ZONE");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local.env");
    std::fs::write(&path, "RUST_LOG=zone_printer=debug\nFAKE_ZONE=us-west1-b\n").unwrap();

    config::load_env_file(path.to_str());

    assert_eq!(env::var("RUST_LOG").as_deref(), Ok("zone_printer=debug"));
    assert_eq!(config::get_fake_zone().as_deref(), Some("us-west1-b"));

    env::remove_var("RUST_LOG");
    env::remove_var("FAKE_ZONE");
}
