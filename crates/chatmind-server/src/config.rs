//! Server Configuration
//!
//! Read from the environment after `.env` is loaded.

use std::net::SocketAddr;
use std::path::PathBuf;

use chatmind_core::{LandingError, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,

    /// `STATIC_DIR`: compiled web frontend
    pub static_dir: PathBuf,

    /// `SEED_ON_STARTUP`
    pub seed_on_startup: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| LandingError::Config(format!("BIND_ADDR {bind_addr:?}: {e}")))?;

        let static_dir = lookup("STATIC_DIR").map_or_else(|| DEFAULT_STATIC_DIR.into(), PathBuf::from);

        let seed_on_startup = match lookup("SEED_ON_STARTUP") {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                LandingError::Config(format!("SEED_ON_STARTUP {value:?} is not a boolean"))
            })?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            seed_on_startup,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.seed_on_startup);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "dist"),
            ("SEED_ON_STARTUP", "no"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert!(!config.seed_on_startup);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = config(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));

        let err = config(&[("SEED_ON_STARTUP", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("SEED_ON_STARTUP"));
    }
}
