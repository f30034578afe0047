use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 7860;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {value:?}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("PORT must be a valid u16, got {value:?}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("HOST") {
            config.host = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?;
        }

        if let Some(value) = lookup("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:7860");
    }

    #[test]
    fn test_reads_host_and_port() {
        let config =
            Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "3000")])).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "70000"));
    }

    #[test]
    fn test_invalid_host() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
