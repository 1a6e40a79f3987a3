use crate::config::CorsConfig;
use crate::cors::{cors_layer, strip_unmatched_cors_headers};
use crate::middleware::{request_id_middleware, request_span};
use axum::middleware;
use axum::routing::{any, get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::health;
use super::helpers;

/// Create application router
///
/// Everything under `cors.path_prefix` sits behind the CORS layer, including
/// the API 404 fallback and the bare `{prefix}/` path. Paths outside the
/// prefix get axum's default 404 with no CORS headers.
pub fn create_router(cors: &CorsConfig) -> axum::Router {
    let api_routes = axum::Router::new()
        .route("/hello", get(health::hello))
        .fallback(helpers::api_not_found)
        .layer(cors_layer(cors))
        .layer(middleware::map_response(strip_unmatched_cors_headers));

    // Nesting matches `{prefix}` and `{prefix}/<rest>` but not `{prefix}/`
    let prefix_root = any(helpers::api_not_found)
        .layer(cors_layer(cors))
        .layer(middleware::map_response(strip_unmatched_cors_headers));

    axum::Router::new()
        .nest(&cors.path_prefix, api_routes)
        .route(&format!("{}/", cors.path_prefix), prefix_root)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(request_span)),
        )
}
