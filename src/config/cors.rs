use url::Url;

/// Wildcard accepted for origins and headers
pub const WILDCARD: &str = "*";

/// CORS rule applied to every request under `path_prefix`
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Path prefix the rule covers (e.g., "/api")
    pub path_prefix: String,

    /// Origins allowed to read responses, in serialized origin form
    pub allowed_origins: Vec<String>,

    /// Upper-case HTTP methods allowed on preflight
    pub allowed_methods: Vec<String>,

    /// Allowed request headers (use ["*"] for all)
    pub allowed_headers: Vec<String>,

    /// Whether `Access-Control-Allow-Credentials: true` is sent
    pub allow_credentials: bool,

    /// Preflight cache lifetime sent as `Access-Control-Max-Age`
    pub max_age_seconds: u64,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == WILDCARD)
    }

    pub fn allows_any_header(&self) -> bool {
        self.allowed_headers.iter().any(|h| h == WILDCARD)
    }

    /// Validate CORS configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.path_prefix.starts_with('/') {
            return Err("CORS_PATH_PREFIX must start with '/'".to_string());
        }

        if self.path_prefix.len() < 2 || self.path_prefix.ends_with('/') {
            return Err("CORS_PATH_PREFIX must name a path segment without a trailing '/'".to_string());
        }

        if self.path_prefix.contains(['{', '}', '*']) {
            return Err("CORS_PATH_PREFIX cannot contain route parameters or wildcards".to_string());
        }

        if self.allowed_origins.is_empty() {
            return Err("CORS_ALLOWED_ORIGINS must list at least one origin".to_string());
        }

        if self.allow_credentials && self.allows_any_origin() {
            return Err(
                "CORS_ALLOWED_ORIGINS cannot be '*' when CORS_ALLOW_CREDENTIALS is true".to_string(),
            );
        }

        if self.allowed_methods.is_empty() {
            return Err("CORS_ALLOWED_METHODS must list at least one method".to_string());
        }

        for method in &self.allowed_methods {
            http::Method::from_bytes(method.as_bytes())
                .map_err(|_| format!("Invalid HTTP method in CORS_ALLOWED_METHODS: {}", method))?;
        }

        if self.allows_any_header() {
            if self.allowed_headers.len() > 1 {
                return Err("CORS_ALLOWED_HEADERS cannot combine '*' with named headers".to_string());
            }
        } else {
            for header in &self.allowed_headers {
                http::HeaderName::from_bytes(header.as_bytes())
                    .map_err(|_| format!("Invalid header name in CORS_ALLOWED_HEADERS: {}", header))?;
            }
        }

        Ok(())
    }
}

/// Normalize a configured origin to the form browsers send in `Origin`.
///
/// `http://Example.com:80/` becomes `http://example.com`. Anything carrying a
/// path, query or fragment is rejected, since it can never match.
pub fn normalize_origin(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    if raw == WILDCARD {
        return Ok(WILDCARD.to_string());
    }

    let url = Url::parse(raw).map_err(|e| format!("Invalid origin '{}': {}", raw, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("Invalid origin '{}': scheme must be http or https", raw));
    }

    if url.host_str().is_none() {
        return Err(format!("Invalid origin '{}': missing host", raw));
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(format!(
            "Invalid origin '{}': origins cannot carry a path, query or fragment",
            raw
        ));
    }

    Ok(url.origin().ascii_serialization())
}
