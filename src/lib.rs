//! # hello-backend
//!
//! Minimal API backend: a CORS policy over the `/api` prefix and a plain-text
//! liveness endpoint at `GET /api/hello`.
//!
//! ## Main modules
//! - `config`: environment-driven configuration and validation
//! - `cors`: CORS rule to `tower-http` layer translation
//! - `routes`: router and handlers
//! - `server`: listener, serve loop and graceful shutdown

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use config::{Config, CorsConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use routes::create_router;
pub use routes::health::ALIVE_MESSAGE;
