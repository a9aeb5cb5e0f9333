use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::path::Path;

use crate::error::ConfigError;

// Default configuration constants
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_ADDR: &str = "";
pub const STATIC_DIR: &str = "static";
pub const DEFAULT_METADATA_HOST: &str = "169.254.169.254";

pub const PORT_ENV: &str = "PORT";
pub const ADDR_ENV: &str = "ADDR";
pub const FAKE_ZONE_ENV: &str = "FAKE_ZONE";
pub const METADATA_HOST_ENV: &str = "GCE_METADATA_HOST";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_port() -> String {
    non_empty_var(PORT_ENV).unwrap_or_else(|| DEFAULT_PORT.to_string())
}

pub fn get_addr() -> String {
    non_empty_var(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

/// Debug override for the resolved zone, for running outside the cloud.
pub fn get_fake_zone() -> Option<String> {
    non_empty_var(FAKE_ZONE_ENV)
}

pub fn get_metadata_host() -> Option<String> {
    non_empty_var(METADATA_HOST_ENV).map(|host| host.trim().to_string())
}

/// Joins a listen host and port. An empty host binds every interface.
pub fn bind_address(addr: &str, port: &str) -> Result<SocketAddr, ConfigError> {
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;

    let host = addr.trim().trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port));
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    (host, port)
        .to_socket_addrs()
        .map_err(|e| ConfigError::InvalidAddress {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?
        .next()
        .ok_or_else(|| ConfigError::InvalidAddress {
            addr: addr.to_string(),
            reason: "no addresses found".to_string(),
        })
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
