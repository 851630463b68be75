// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::StockroomError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds a session may sit idle before it is dropped (0 = never).
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    /// Cap on concurrent sessions (0 = unlimited).
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    /// How often the expiry sweep runs (0 = lazy expiry only).
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout(),
            max_sessions: default_max_sessions(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8350
}

fn default_idle_timeout() -> u64 {
    3600
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_sweep_interval() -> u64 {
    300
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, StockroomError> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, StockroomError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| StockroomError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.server.bind, "127.0.0.1");
        assert_eq!(c.server.port, 8350);
        assert_eq!(c.session.idle_timeout_secs, 3600);
        assert_eq!(c.session.max_sessions, 10_000);
        assert_eq!(c.session.sweep_interval_secs, 300);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = "";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8350);
        assert_eq!(config.session.max_sessions, 10_000);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[server]
bind = "0.0.0.0"
port = 9000

[session]
idle_timeout_secs = 600
max_sessions = 50
sweep_interval_secs = 30
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.session.idle_timeout_secs, 600);
        assert_eq!(config.session.max_sessions, 50);
        assert_eq!(config.session.sweep_interval_secs, 30);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml_str = r#"
[server]
port = 9000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.session.idle_timeout_secs, 3600);
    }

    #[test]
    fn test_zero_disables_expiry_and_cap() {
        let toml_str = r#"
[session]
idle_timeout_secs = 0
max_sessions = 0
sweep_interval_secs = 0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.idle_timeout_secs, 0);
        assert_eq!(config.session.max_sessions, 0);
        assert_eq!(config.session.sweep_interval_secs, 0);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(
            deserialized.session.idle_timeout_secs,
            config.session.idle_timeout_secs
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(StockroomError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 8111\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.port, 8111);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, StockroomError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }
}
