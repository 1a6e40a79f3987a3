//! Configuration loading and validation tests.
//!
//! These tests go through `Config::from_vars` so the process environment is
//! never touched.

use hello_backend::{AppError, Config};
use std::collections::HashMap;

fn load(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(|key| vars.get(key).cloned())
}

/// Test module for server settings
mod server_tests {
    use super::*;

    #[test]
    fn test_server_overrides() {
        let config = load(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "9000")]).unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_port_out_of_range() {
        assert!(load(&[("SERVER_PORT", "70000")]).is_err());
    }
}

/// Test module for the CORS rule
mod cors_tests {
    use super::*;

    #[test]
    fn test_placeholder_deployment_origins() {
        let config = load(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000,http://3.24.168.37/,https://your-domain.example",
        )])
        .unwrap();

        assert_eq!(config.cors.allowed_origins.len(), 3);
        assert!(config
            .cors
            .allowed_origins
            .iter()
            .all(|o| !o.ends_with('/')));
    }

    #[test]
    fn test_wildcard_origin_requires_credentials_off() {
        let err = load(&[("CORS_ALLOWED_ORIGINS", "*")]).unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOW_CREDENTIALS"));

        let config = load(&[
            ("CORS_ALLOWED_ORIGINS", "*"),
            ("CORS_ALLOW_CREDENTIALS", "false"),
        ])
        .unwrap();
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_named_headers() {
        let config = load(&[("CORS_ALLOWED_HEADERS", "Content-Type, Authorization")]).unwrap();
        assert!(!config.cors.allows_any_header());
        assert_eq!(
            config.cors.allowed_headers,
            vec!["content-type", "authorization"]
        );
    }

    #[test]
    fn test_custom_prefix() {
        let config = load(&[("CORS_PATH_PREFIX", "/v1")]).unwrap();
        assert_eq!(config.cors.path_prefix, "/v1");

        assert!(load(&[("CORS_PATH_PREFIX", "/v1/")]).is_err());
    }

    #[test]
    fn test_invalid_max_age() {
        let err = load(&[("CORS_MAX_AGE_SECONDS", "-1")]).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
