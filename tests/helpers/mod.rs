//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::Router;
use folio::clock::Clock;
use folio::config::{AuthConfig, Config, LoggingConfig, ServerConfig};
use folio::routes::{AppState, router};

pub const TEST_SECRET: &str = "test_secret_key_minimum_32_characters_long";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Reference instant used by the fixed test clocks
pub const T0: u64 = 1_700_000_000;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
        },
        auth: AuthConfig {
            session_secret: TEST_SECRET.to_string(),
            admin_password: TEST_PASSWORD.to_string(),
            session_ttl_days: 7,
        },
        logging: LoggingConfig::default(),
    }
}

/// Build the real router over a fixed clock
pub fn test_app(clock: Clock) -> Router {
    test_app_with_config(test_config(), clock)
}

pub fn test_app_with_config(config: Config, clock: Clock) -> Router {
    router(AppState { config, clock })
}
