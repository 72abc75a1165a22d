//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Session cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in days.
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,
    /// Whether the session cookie is marked `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_days: default_expiry_days(),
            secure_cookies: false,
        }
    }
}

fn default_expiry_days() -> i64 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NIRMAAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                (
                    "NIRMAAN__DATABASE__URL",
                    Some("postgres://localhost/nirmaan_test"),
                ),
                ("NIRMAAN__SERVER__PORT", Some("3001")),
            ],
            || {
                let config = AppConfig::load().expect("config should load from env");
                assert_eq!(config.database.url, "postgres://localhost/nirmaan_test");
                assert_eq!(config.server.port, 3001);
                assert_eq!(config.server.host, "0.0.0.0");
            },
        );
    }

    #[test]
    fn test_session_defaults() {
        temp_env::with_vars(
            [("NIRMAAN__DATABASE__URL", Some("postgres://localhost/x"))],
            || {
                let config = AppConfig::load().expect("config should load from env");
                assert_eq!(config.session.expiry_days, 30);
                assert!(!config.session.secure_cookies);
            },
        );
    }

    #[test]
    fn test_session_override() {
        temp_env::with_vars(
            [
                ("NIRMAAN__DATABASE__URL", Some("postgres://localhost/x")),
                ("NIRMAAN__SESSION__EXPIRY_DAYS", Some("7")),
                ("NIRMAAN__SESSION__SECURE_COOKIES", Some("true")),
            ],
            || {
                let config = AppConfig::load().expect("config should load from env");
                assert_eq!(config.session.expiry_days, 7);
                assert!(config.session.secure_cookies);
            },
        );
    }
}
