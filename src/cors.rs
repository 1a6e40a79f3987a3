//! Translation of the configured CORS rule into a `tower-http` layer.
//!
//! The layer echoes an allowed `Origin` back, answers every `OPTIONS` request
//! itself as a preflight. Responses to disallowed origins carry no
//! `Access-Control-*` header at all; the request is still served and the
//! browser does the blocking.

use crate::config::CorsConfig;
use axum::response::Response;
use http::{header, HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowCredentials, AllowHeaders, AllowOrigin, CorsLayer};

/// Build the CORS layer for the given rule.
///
/// The rule is expected to have passed `CorsConfig::validate`; entries that do
/// not parse as header values are skipped.
pub fn cors_layer(rule: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = rule
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect();

    let allow_origin = if rule.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.clone())
    };

    let methods: Vec<Method> = rule
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
        .collect();

    // A literal `*` is not honoured by browsers on credentialed requests, so
    // mirror whatever the preflight asked for instead.
    let allow_headers = if rule.allows_any_header() {
        if rule.allow_credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::any()
        }
    } else {
        AllowHeaders::list(
            rule.allowed_headers
                .iter()
                .filter_map(|h| h.parse::<HeaderName>().ok()),
        )
    };

    let allow_credentials = if rule.allow_credentials {
        AllowCredentials::predicate(move |origin: &HeaderValue, _| origins.contains(origin))
    } else {
        AllowCredentials::from(false)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(methods)
        .allow_headers(allow_headers)
        .allow_credentials(allow_credentials)
        .max_age(Duration::from_secs(rule.max_age_seconds))
}

/// Remove every `Access-Control-*` header from a response that did not get an
/// `Access-Control-Allow-Origin`.
///
/// tower-http always adds the method, header and max-age entries to preflight
/// responses. Must run outside `cors_layer`.
pub async fn strip_unmatched_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    if headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN) {
        return response;
    }

    let cors_headers: Vec<HeaderName> = headers
        .keys()
        .filter(|name| name.as_str().starts_with("access-control-"))
        .cloned()
        .collect();
    for name in cors_headers {
        headers.remove(name);
    }

    response
}

/// Human-readable one-line summary of the rule, for startup logs
pub fn describe(rule: &CorsConfig) -> String {
    format!(
        "{}/** origins=[{}] methods=[{}] headers=[{}] credentials={}",
        rule.path_prefix,
        rule.allowed_origins.join(", "),
        rule.allowed_methods.join(", "),
        rule.allowed_headers.join(", "),
        rule.allow_credentials
    )
}
