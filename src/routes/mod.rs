pub mod health;
pub mod helpers;
mod router;

pub use router::create_router;
