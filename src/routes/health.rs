/// Body returned by the liveness endpoint
pub const ALIVE_MESSAGE: &str = "Backend is alive!";

/// GET /api/hello
///
/// Plain-text liveness probe. A `&'static str` body is served as
/// `text/plain; charset=utf-8`.
pub async fn hello() -> &'static str {
    ALIVE_MESSAGE
}
