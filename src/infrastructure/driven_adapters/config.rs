//! Application Configuration
//!
//! Loads configuration from built-in defaults, optional files and environment
//! variables. Both `APP__SECTION__KEY` variables and the flat `DB_*`,
//! `AUTH0_*` and `PORT` variables are understood; the flat ones win.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::application::use_cases::todos::ListScope;

/// Flat environment variables and the config keys they override
const FLAT_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DB_SSL_ROOT_CERT", "database.ssl_root_cert"),
    ("AUTH0_DOMAIN", "auth.domain"),
    ("AUTH0_AUDIENCE", "auth.audience"),
];

/// String secret that never prints and is wiped from memory on drop
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the secret value
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
///
/// Connections always use TLS with full certificate and host verification.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// PEM file with the root certificate; system roots are used when unset
    #[serde(default)]
    pub ssl_root_cert: Option<String>,
}

/// Identity provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Identity provider domain, e.g. `tenant.eu.auth0.com`
    pub domain: String,
    /// Expected `aud` claim
    pub audience: String,
    pub jwks_requests_per_minute: u32,
    /// Upper bound on one key-set download
    pub jwks_timeout_secs: u64,
}

impl AuthConfig {
    /// Expected `iss` claim
    #[must_use]
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    /// Well-known location of the provider's signing keys
    #[must_use]
    pub fn jwks_uri(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }
}

/// Todo behaviour switches
#[derive(Debug, Clone, Deserialize)]
pub struct TodosConfig {
    pub list_scope: ListScope,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub todos: TodosConfig,
}

impl AppConfig {
    /// Load configuration from files and the process environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a required value is missing or malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let builder = Self::defaults()?
            // Merge config files if present
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"));

        Self::with_flat_overrides(builder, |name| std::env::var(name).ok())?
            .build()?
            .try_deserialize()
    }

    /// Builder holding the built-in defaults
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.port", 5432)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("auth.jwks_requests_per_minute", 5)?
            .set_default("auth.jwks_timeout_secs", 5)?
            .set_default("todos.list_scope", "all")
    }

    fn with_flat_overrides<F>(
        mut builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (variable, key) in FLAT_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(variable))?;
        }
        Ok(builder)
    }
}
