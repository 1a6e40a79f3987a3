use crate::error::AppError;
use axum::extract::OriginalUri;

/// Fallback for unknown paths under the API prefix.
///
/// Answered from inside the CORS layer so browsers can read the 404 body.
pub(crate) async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
