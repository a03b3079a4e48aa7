//! Configuration loading for TechRoad.
//! Reads techroad.toml from the current directory or the path in TECHROAD_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{Result, TechroadError};

pub const CONFIG_ENV: &str = "TECHROAD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "techroad.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_site_name()  -> String { "TechRoad".to_string() }
fn default_static_dir() -> String { "static".to_string() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self { name: default_site_name(), static_dir: default_static_dir() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing-subscriber EnvFilter directive, used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "info,tower_http=info".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

impl Config {
    /// Load configuration the way the binary does.
    ///
    /// An explicit `TECHROAD_CONFIG` path must exist. Without it, a missing
    /// `techroad.toml` falls back to defaults. Environment overrides apply last.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::load_from(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => {
                tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `TECHROAD_HOST` / `TECHROAD_PORT` overrides from the given lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TECHROAD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TECHROAD_PORT") {
            self.server.port = port.parse().map_err(|_| {
                TechroadError::Config(format!("TECHROAD_PORT is not a valid port: {port}"))
            })?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| TechroadError::Config(format!("invalid listen address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.site.name, "TechRoad");
        assert_eq!(config.site.static_dir, "static");
        assert_eq!(config.log.filter, "info,tower_http=info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = Config::from_toml_str("[server]\nport = \"nope\"\n").unwrap_err();
        assert!(matches!(err, TechroadError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            [("TECHROAD_HOST", "0.0.0.0"), ("TECHROAD_PORT", "9000")].into();
        let mut config = Config::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn test_bad_port_override_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(|k| (k == "TECHROAD_PORT").then(|| "99999".to_string()))
            .unwrap_err();
        assert!(matches!(err, TechroadError::Config(_)));
        assert_eq!(config.server.port, 3001);
    }
}
