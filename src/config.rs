use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ServerConfig {
    /// Session cookies carry the `Secure` flag only when the site is served
    /// over https, so local development over plain http keeps working.
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Signing secret for admin session tokens. Required: the server refuses
    /// to start without it rather than serve with a broken trust anchor.
    #[serde(default)]
    pub session_secret: String,
    /// Reference value for the admin login credential. May be left unset;
    /// login then fails with an operator-facing 500 instead of a 401.
    #[serde(default)]
    pub admin_password: String,
    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_session_ttl_days() -> u64 {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (SESSION_SECRET, ADMIN_PASSWORD)
    /// 2. Prefixed environment variables (FOLIO__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("auth.session_ttl_days", 7)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (FOLIO__AUTH__SESSION_SECRET, etc.)
        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support legacy environment variables without prefix
        if let Ok(session_secret) = env::var("SESSION_SECRET") {
            builder = builder.set_override("auth.session_secret", session_secret)?;
        }
        if let Ok(admin_password) = env::var("ADMIN_PASSWORD") {
            builder = builder.set_override("auth.admin_password", admin_password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// A missing or weak session secret is a boot-time fatal condition, not a
    /// request-time error: serving without a trust anchor would silently
    /// disable the admin boundary.
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.session_secret.is_empty() {
            return Err(
                "Session secret is not set (SESSION_SECRET or FOLIO__AUTH__SESSION_SECRET)"
                    .to_string(),
            );
        }
        if self.auth.session_secret.len() < 32 {
            return Err("Session secret must be at least 32 characters long".to_string());
        }
        if self.auth.session_ttl_days < 1 {
            return Err("Session ttl must be at least 1 day".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                base_url: "http://localhost:3000".to_string(),
            },
            auth: AuthConfig {
                session_secret: "test_secret_key_minimum_32_characters_long".to_string(),
                admin_password: "hunter2".to_string(),
                session_ttl_days: 7,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_secret() {
        let mut config = valid_config();
        config.auth.session_secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("not set"), "unexpected message: {err}");
    }

    #[test]
    fn test_validation_short_secret() {
        let mut config = valid_config();
        config.auth.session_secret = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_ttl() {
        let mut config = valid_config();
        config.auth.session_ttl_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_secure_cookies_follows_base_url_scheme() {
        let mut config = valid_config();
        assert!(!config.server.secure_cookies());
        config.server.base_url = "https://folio.example".to_string();
        assert!(config.server.secure_cookies());
    }

    #[test]
    fn test_missing_admin_password_is_not_a_boot_error() {
        // An unset admin credential surfaces at login time as an operator
        // error, not at startup.
        let mut config = valid_config();
        config.auth.admin_password = String::new();
        assert!(config.validate().is_ok());
    }
}
