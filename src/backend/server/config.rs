/**
 * Server Configuration
 *
 * This module loads and validates the process-wide configuration: where to
 * listen, which database to open, and the token and hashing parameters.
 *
 * # Configuration Sources
 *
 * In order of increasing precedence:
 * 1. Built-in defaults
 * 2. A TOML file named by `CRANESHELL_CONFIG`
 * 3. Environment variables
 *
 * ```toml
 * [server]
 * host = "127.0.0.1"
 * port = 8080
 * cors_origins = ["https://craneshell.example"]
 *
 * [database]
 * url = "sqlite://craneshell.db?mode=rwc"
 *
 * [auth]
 * jwt_secret = "..."
 * jwt_algorithm = "HS256"
 * token_ttl_hours = 24
 * bcrypt_cost = 12
 * ```
 *
 * # Error Handling
 *
 * Any invalid value fails startup with a [`ConfigError`]. Configuration is
 * read once; the resulting [`ServerConfig`] is immutable.
 */

use jsonwebtoken::Algorithm;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::auth::password::{MAX_COST, MIN_COST};
use crate::backend::auth::sessions::MAX_TTL_HOURS;

/// Environment variable naming the optional TOML config file
pub const CONFIG_FILE_ENV: &str = "CRANESHELL_CONFIG";

/// Signing secret used when none is configured
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "sqlite://craneshell.db?mode=rwc";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEFAULT_BCRYPT_COST: u32 = 12;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has a value that cannot be used
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
            reason,
        }
    }
}

/// Token and password hashing settings
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Allowed CORS origins; `["*"]` allows any origin
    pub cors_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors_origins: vec!["*".to_string()],
            auth: AuthConfig {
                jwt_secret: DEFAULT_JWT_SECRET.to_string(),
                jwt_algorithm: Algorithm::HS256,
                token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
                bcrypt_cost: DEFAULT_BCRYPT_COST,
            },
        }
    }
}

/// Shape of the TOML config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    server: ServerSection,
    database: DatabaseSection,
    auth: AuthSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
    cors_origins: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DatabaseSection {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AuthSection {
    jwt_secret: Option<String>,
    jwt_algorithm: Option<String>,
    token_ttl_hours: Option<i64>,
    bcrypt_cost: Option<u32>,
}

/// Parse an HMAC algorithm name
fn parse_algorithm(key: &'static str, value: &str) -> Result<Algorithm, ConfigError> {
    match value.to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(ConfigError::invalid(key, value, "expected HS256, HS384 or HS512")),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, value, "not a valid number"))
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// Reads the TOML file named by `CRANESHELL_CONFIG` if set, then applies
    /// environment overrides. Call `dotenv` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Some(
                    std::fs::read_to_string(&path)
                        .map_err(|source| ConfigError::Read { path, source })?,
                )
            }
            Err(_) => None,
        };

        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build configuration from TOML file contents and a variable lookup
    ///
    /// # Arguments
    /// * `file` - Contents of the config file, if any
    /// * `lookup` - Environment lookup, e.g. `|k| std::env::var(k).ok()`
    pub fn from_sources<F>(file: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(contents) = file {
            config.apply_file(toml::from_str(contents)?)?;
        }
        config.apply_env(lookup)?;
        config.validate()?;

        if config.auth.jwt_secret == DEFAULT_JWT_SECRET {
            tracing::warn!("JWT_SECRET is not set; using the built-in development secret");
        }

        Ok(config)
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn apply_file(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        let FileConfig {
            server,
            database,
            auth,
        } = file;

        if let Some(host) = server.host {
            self.host = host;
        }
        if let Some(port) = server.port {
            self.port = port;
        }
        if let Some(origins) = server.cors_origins {
            self.cors_origins = origins;
        }
        if let Some(url) = database.url {
            self.database_url = url;
        }
        if let Some(secret) = auth.jwt_secret {
            self.auth.jwt_secret = secret;
        }
        if let Some(algorithm) = auth.jwt_algorithm {
            self.auth.jwt_algorithm = parse_algorithm("auth.jwt_algorithm", &algorithm)?;
        }
        if let Some(hours) = auth.token_ttl_hours {
            self.auth.token_ttl_hours = hours;
        }
        if let Some(cost) = auth.bcrypt_cost {
            self.auth.bcrypt_cost = cost;
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = parse_number("SERVER_PORT", &port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = parse_origins(&origins);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(algorithm) = lookup("JWT_ALGORITHM") {
            self.auth.jwt_algorithm = parse_algorithm("JWT_ALGORITHM", &algorithm)?;
        }
        if let Some(hours) = lookup("JWT_EXPIRATION_HOURS") {
            self.auth.token_ttl_hours = parse_number("JWT_EXPIRATION_HOURS", &hours)?;
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.auth.bcrypt_cost = parse_number("BCRYPT_COST", &cost)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::invalid("JWT_SECRET", "", "must not be empty"));
        }
        if !(1..=MAX_TTL_HOURS).contains(&self.auth.token_ttl_hours) {
            return Err(ConfigError::invalid(
                "JWT_EXPIRATION_HOURS",
                self.auth.token_ttl_hours.to_string(),
                "must be between 1 and 87600",
            ));
        }
        if !(MIN_COST..=MAX_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                self.auth.bcrypt_cost.to_string(),
                "must be between 4 and 31",
            ));
        }
        if self.cors_origins.is_empty() {
            return Err(ConfigError::invalid("CORS_ORIGINS", "", "must name at least one origin"));
        }
        Ok(())
    }
}
