//! Service configuration
//!
//! Built once at startup from environment variables and handed to the
//! router inside [`crate::AppState`].

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::password::PasswordScheme;

/// Which User Store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Application configuration
///
/// # Environment Variables
/// - `APP_VERSION`: version string reported by `/health` (default: unset)
/// - `AUTH_BIND_ADDRESS`: listener address (default: `0.0.0.0:5000`)
/// - `AUTH_STORE_BACKEND`: `postgres` or `memory` (default: `postgres`)
/// - `AUTH_PASSWORD_SCHEME`: `plaintext` or `argon2` (default: `plaintext`)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_version: Option<String>,
    pub bind_address: String,
    pub store_backend: StoreBackend,
    pub password_scheme: PasswordScheme,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("store_backend", "postgres")?
            .set_default("password_scheme", "plaintext")?
            .add_source(Environment::with_prefix("AUTH"))
            .set_override_option("app_version", std::env::var("APP_VERSION").ok())?
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_version: None,
            bind_address: "0.0.0.0:5000".to_string(),
            store_backend: StoreBackend::Postgres,
            password_scheme: PasswordScheme::Plaintext,
        }
    }
}
