//! Configuration management for the account server
//!
//! Settings are read from `config.toml` and can be overridden from the
//! environment with the `ACCOUNT_SERVER_` prefix. Everything here is read once
//! at startup.

use config::{Config, ConfigError, Environment, File, Map};
use log::{info, warn};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Search order for the configuration file, relative to the working directory
const CONFIG_PATHS: [&str; 2] = [
    "account-server/config.toml", // Container layout: /app/account-server/config.toml
    "config.toml",                // Local development: ./config.toml
];

const ENV_PREFIX: &str = "ACCOUNT_SERVER";

/// Startup configuration for the HTTP listener and the credential store
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP address the HTTP listener binds to
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// SQLite database file, or `:memory:`
    pub database_path: String,

    /// Longest accepted username, counted in characters after normalization
    pub max_username_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            database_path: "accounts.db".to_string(),
            max_username_length: 64,
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// Only a missing file falls back to the built-in defaults. A file that
    /// exists but cannot be parsed or fails validation is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), None)
    }

    /// Search `base_dir` for a configuration file. `env` replaces the process
    /// environment when given.
    fn load_from(base_dir: &Path, env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_path", defaults.database_path)?
            .set_default("max_username_length", defaults.max_username_length as i64)?;

        let found = CONFIG_PATHS
            .iter()
            .map(|path| base_dir.join(path))
            .find(|path| path.is_file());

        match found {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                builder = builder.add_source(File::from(path.as_path()));
            }
            None => warn!(
                "No configuration file found (tried {:?}), using defaults",
                CONFIG_PATHS
            ),
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Message("bind_address cannot be empty".into()));
        }

        if self.socket_addr().is_none() {
            return Err(ConfigError::Message(format!(
                "bind_address {:?} is not a valid IP address",
                self.bind_address
            )));
        }

        if self.database_path.trim().is_empty() {
            return Err(ConfigError::Message("database_path cannot be empty".into()));
        }

        if self.max_username_length == 0 {
            return Err(ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Bind address and port as a socket address
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port).parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn no_env() -> Option<Map<String, String>> {
        Some(Map::new())
    }

    fn env_with(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn write_config(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    const PROD_CONFIG: &str = r#"
bind_address = "0.0.0.0"
port = 9090
database_path = "prod.db"
max_username_length = 32
"#;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.socket_addr(),
            Some("127.0.0.1:8080".parse().unwrap())
        );
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_bind_address_rejected() {
        let config = ServerConfig {
            bind_address: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let config = ServerConfig {
            database_path: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_username_length_rejected() {
        let config = ServerConfig {
            max_username_length: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.toml", PROD_CONFIG);

        let config = ServerConfig::load_from(dir.path(), no_env()).unwrap();
        assert_eq!(
            config,
            ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 9090,
                database_path: "prod.db".to_string(),
                max_username_length: 32,
            }
        );
    }

    #[test]
    fn test_container_path_searched_first() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.toml", PROD_CONFIG);
        write_config(
            dir.path(),
            "account-server/config.toml",
            "port = 7000\ndatabase_path = \"container.db\"\n",
        );

        let config = ServerConfig::load_from(dir.path(), no_env()).unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.database_path, "container.db");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = ServerConfig::load_from(dir.path(), no_env()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.toml", "port = 9090\n");

        let config = ServerConfig::load_from(dir.path(), no_env()).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.database_path, "accounts.db");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.toml", PROD_CONFIG);

        let env = env_with(&[
            ("ACCOUNT_SERVER_PORT", "9191"),
            ("ACCOUNT_SERVER_MAX_USERNAME_LENGTH", "16"),
        ]);
        let config = ServerConfig::load_from(dir.path(), env).unwrap();
        assert_eq!(config.port, 9191);
        assert_eq!(config.max_username_length, 16);
        assert_eq!(config.database_path, "prod.db");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let env = env_with(&[("ACCOUNT_SERVER_DATABASE_PATH", "/var/lib/accounts.db")]);
        let config = ServerConfig::load_from(dir.path(), env).unwrap();
        assert_eq!(config.database_path, "/var/lib/accounts.db");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "config.toml",
            "port = 9090\ndatabase_path = \"prod.db\"\nthis line is not toml\n",
        );

        assert!(ServerConfig::load_from(dir.path(), no_env()).is_err());
    }

    #[test]
    fn test_wrongly_typed_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.toml", "port = \"eighty\"\n");

        assert!(ServerConfig::load_from(dir.path(), no_env()).is_err());
    }

    #[test]
    fn test_invalid_value_in_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.toml", "port = 0\n");

        assert!(ServerConfig::load_from(dir.path(), no_env()).is_err());
    }
}
