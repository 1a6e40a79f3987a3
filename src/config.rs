mod cors;
mod server;

pub use cors::{normalize_origin, CorsConfig, WILDCARD};
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use std::env;

/// Default configuration values
pub mod defaults {
    pub const SERVER_HOST: &str = "0.0.0.0";
    pub const SERVER_PORT: &str = "8080";
    pub const CORS_PATH_PREFIX: &str = "/api";
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";
    pub const CORS_ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
    pub const CORS_ALLOWED_HEADERS: &str = "*";
    pub const CORS_ALLOW_CREDENTIALS: &str = "true";
    pub const CORS_MAX_AGE_SECONDS: &str = "1800";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `main` loads `.env` before this runs, so values from it are visible here.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_host = var("SERVER_HOST", defaults::SERVER_HOST);
        let server_port = var("SERVER_PORT", defaults::SERVER_PORT)
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        // CORS config
        let path_prefix = var("CORS_PATH_PREFIX", defaults::CORS_PATH_PREFIX)
            .trim()
            .to_string();

        let allowed_origins = split_list(&var("CORS_ALLOWED_ORIGINS", defaults::CORS_ALLOWED_ORIGINS))
            .iter()
            .map(|o| normalize_origin(o))
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::Configuration)?;

        let mut allowed_methods: Vec<String> = Vec::new();
        for method in split_list(&var("CORS_ALLOWED_METHODS", defaults::CORS_ALLOWED_METHODS)) {
            let method = method.to_ascii_uppercase();
            if !allowed_methods.contains(&method) {
                allowed_methods.push(method);
            }
        }

        let allowed_headers = split_list(&var("CORS_ALLOWED_HEADERS", defaults::CORS_ALLOWED_HEADERS))
            .into_iter()
            .map(|h| h.to_ascii_lowercase())
            .collect();

        let allow_credentials = var("CORS_ALLOW_CREDENTIALS", defaults::CORS_ALLOW_CREDENTIALS)
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration("Invalid CORS_ALLOW_CREDENTIALS".to_string()))?;
        let max_age_seconds = var("CORS_MAX_AGE_SECONDS", defaults::CORS_MAX_AGE_SECONDS)
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration("Invalid CORS_MAX_AGE_SECONDS".to_string()))?;

        let config = Config {
            server: ServerConfig {
                host: server_host.trim().to_string(),
                port: server_port,
            },
            cors: CorsConfig {
                path_prefix,
                allowed_origins,
                allowed_methods,
                allowed_headers,
                allow_credentials,
                max_age_seconds,
            },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.server.validate().map_err(AppError::Configuration)?;
        self.cors.validate().map_err(AppError::Configuration)?;

        Ok(())
    }
}

/// Split a comma-separated value, dropping empty entries
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
