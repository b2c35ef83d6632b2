use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "todo_service=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TODO_SERVICE_ADDR is not a socket address: {0}")]
    InvalidAddr(String),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("TODO_SERVICE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { addr, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_port_8080() {
        let config = ServerConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_in(&[
            ("TODO_SERVICE_ADDR", "127.0.0.1:9000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_bad_addr() {
        let result = ServerConfig::from_lookup(lookup_in(&[("TODO_SERVICE_ADDR", "localhost")]));
        assert!(matches!(result, Err(ConfigError::InvalidAddr(addr)) if addr == "localhost"));
    }
}
