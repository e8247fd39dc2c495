//! Configuration for the registry server.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Directory of browser pages served for non-API paths.
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON users file (created if missing).
    #[serde(default = "default_store_path")]
    pub path: String,
    /// Treat an unparseable users file as empty instead of failing requests.
    #[serde(default)]
    pub reset_on_corrupt: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            reset_on_corrupt: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StaticFilesConfig {
    #[serde(default)]
    pub dir: Option<String>,
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_store_path() -> String {
    "users-data.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (REGISTRY__SECTION__KEY format)
    /// 2. config.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Same as [`Config::load`] with an explicit config file name (extension optional).
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("store.path", default_store_path())?
            .set_default("logging.level", default_log_level())?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("REGISTRY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const PORT_VAR: &str = "REGISTRY__SERVER__PORT";

    fn write_config(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("registry.toml");
        std::fs::write(&path, body).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.path, "users-data.json");
        assert!(!config.store.reset_on_corrupt);
        assert_eq!(config.logging.level, "info");
        assert!(config.static_files.dir.is_none());
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[server]
port = 4100

[store]
path = "/var/lib/registry/users.json"
reset_on_corrupt = true

[static_files]
dir = "public"
"#,
        );

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.store.path, "/var/lib/registry/users.json");
        assert!(config.store.reset_on_corrupt);
        assert_eq!(config.static_files.dir.as_deref(), Some("public"));
        assert_eq!(config.listen_addr(), "0.0.0.0:4100");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[server]\nport = 4100\n");

        std::env::set_var(PORT_VAR, "4200");
        let result = Config::load_from(&path);
        std::env::remove_var(PORT_VAR);

        let config = result.unwrap();
        assert_eq!(config.server.port, 4200);
        assert_eq!(config.store.path, "users-data.json");
    }
}
